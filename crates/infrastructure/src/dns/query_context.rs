use super::forwarding::{MessageBuilder, RecordSetCollector};
use hickory_proto::op::{Message, Query};
use split_horizon_application::ports::QueryContext;
use split_horizon_domain::{
    AnswerRrSet, DomainError, ExtState, ModuleId, ResponseCode, SecurityStatus,
    SyntheticResponse,
};
use std::collections::HashMap;
use tracing::debug;

/// Query context backed by a hickory [`Message`].
///
/// Holds the question, the current response (upstream or synthetic) and the
/// per-module bookkeeping the host would otherwise keep.
pub struct MessageQueryContext {
    query: Query,
    qname: String,
    response: Option<Message>,
    rrsets: Option<Vec<AnswerRrSet>>,
    security: SecurityStatus,
    return_rcode: Option<ResponseCode>,
    ext_states: HashMap<ModuleId, ExtState>,
    accept_install: bool,
}

impl MessageQueryContext {
    pub fn new(query: Query) -> Self {
        let qname = query.name().to_utf8();
        Self {
            query,
            qname,
            response: None,
            rrsets: None,
            security: SecurityStatus::Unchecked,
            return_rcode: None,
            ext_states: HashMap::new(),
            accept_install: true,
        }
    }

    pub fn for_name(domain: &str) -> Result<Self, DomainError> {
        Ok(Self::new(MessageBuilder::a_query(domain)?))
    }

    /// Makes every later `install_response` fail.
    pub fn rejecting_install(mut self) -> Self {
        self.accept_install = false;
        self
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Stores the reply produced by resolution.
    pub fn set_response(&mut self, message: Message) {
        let rrsets = RecordSetCollector::collect(&message);
        debug!(qname = %self.qname, rrsets = rrsets.len(), "Response attached");
        self.rrsets = Some(rrsets);
        self.response = Some(message);
        self.security = SecurityStatus::Unchecked;
    }

    pub fn response(&self) -> Option<&Message> {
        self.response.as_ref()
    }

    pub fn into_response(self) -> Option<Message> {
        self.response
    }

    pub fn security(&self) -> SecurityStatus {
        self.security
    }

    pub fn return_rcode(&self) -> Option<ResponseCode> {
        self.return_rcode
    }

    pub fn ext_state(&self, module: ModuleId) -> Option<ExtState> {
        self.ext_states.get(&module).copied()
    }
}

impl QueryContext for MessageQueryContext {
    fn qname(&self) -> &str {
        &self.qname
    }

    fn has_response(&self) -> bool {
        self.response.is_some()
    }

    fn answer_rrsets(&self) -> Option<&[AnswerRrSet]> {
        self.rrsets.as_deref()
    }

    fn install_response(&mut self, response: &SyntheticResponse) -> Result<(), DomainError> {
        if !self.accept_install {
            return Err(DomainError::SynthesisFailed(
                "response installation refused".to_string(),
            ));
        }

        let id = self.response.as_ref().map(|m| m.id()).unwrap_or_default();
        let message = MessageBuilder::build_synthetic_response(id, &self.query, response)?;

        self.rrsets = Some(RecordSetCollector::collect(&message));
        self.response = Some(message);
        Ok(())
    }

    fn set_security(&mut self, status: SecurityStatus) {
        self.security = status;
    }

    fn set_return_rcode(&mut self, rcode: ResponseCode) {
        self.return_rcode = Some(rcode);
    }

    fn set_ext_state(&mut self, module: ModuleId, state: ExtState) {
        self.ext_states.insert(module, state);
    }
}

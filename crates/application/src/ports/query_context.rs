use split_horizon_domain::{
    AnswerRrSet, DomainError, ExtState, ModuleId, ResponseCode, SecurityStatus,
    SyntheticResponse,
};

/// Per-query handle owned by the host resolver.
///
/// The rewriter only touches it while handling the resolution-complete event.
pub trait QueryContext {
    fn qname(&self) -> &str;

    fn has_response(&self) -> bool;

    /// Answer section of the current response, `None` when there is no
    /// response yet or it carries no reply data.
    fn answer_rrsets(&self) -> Option<&[AnswerRrSet]>;

    /// Replaces the current response. Hosts may refuse.
    fn install_response(&mut self, response: &SyntheticResponse) -> Result<(), DomainError>;

    fn set_security(&mut self, status: SecurityStatus);

    fn set_return_rcode(&mut self, rcode: ResponseCode);

    fn set_ext_state(&mut self, module: ModuleId, state: ExtState);
}

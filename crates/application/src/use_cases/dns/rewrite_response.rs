use crate::ports::QueryContext;
use split_horizon_domain::{
    AnswerRrSet, ResponseCode, RewriteOutcome, RrEntry, SecurityStatus, SyntheticResponse,
    ViewTable,
};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Use case: replace an upstream answer that points at an external address
/// with a single authoritative answer carrying the internal address.
pub struct RewriteResponseUseCase {
    views: Arc<ViewTable>,
    answer_ttl: u32,
}

impl RewriteResponseUseCase {
    pub fn new(views: Arc<ViewTable>, answer_ttl: u32) -> Self {
        Self { views, answer_ttl }
    }

    pub fn views(&self) -> &Arc<ViewTable> {
        &self.views
    }

    /// First internal address whose external counterpart appears in an A
    /// record set. Signature entries are walked past, never decoded.
    pub fn find_match(&self, rrsets: &[AnswerRrSet]) -> Option<Ipv4Addr> {
        for rrset in rrsets.iter().filter(|set| set.is_address_set()) {
            for entry in rrset.entries() {
                let RrEntry::Data(rdata) = entry else {
                    continue;
                };

                match self.views.lookup_rdata(rdata) {
                    Ok(Some(internal)) => return Some(internal),
                    Ok(None) => {}
                    Err(e) => {
                        warn!(error = %e, owner = %rrset.owner, "Skipping malformed A record");
                    }
                }
            }
        }
        None
    }

    pub fn execute(&self, ctx: &mut dyn QueryContext) -> RewriteOutcome {
        if !ctx.has_response() {
            debug!(qname = %ctx.qname(), "No response to rewrite");
            return RewriteOutcome::PassThrough;
        }

        let internal = ctx.answer_rrsets().and_then(|rrsets| self.find_match(rrsets));

        let Some(internal) = internal else {
            return RewriteOutcome::PassThrough;
        };

        let response = SyntheticResponse::new(ctx.qname(), internal, self.answer_ttl);

        match ctx.install_response(&response) {
            Ok(()) => {
                ctx.set_security(SecurityStatus::Indeterminate);
                ctx.set_return_rcode(ResponseCode::NoError);
                debug!(answer = %response.answer_line(), "Response rewritten");
                RewriteOutcome::Rewritten(internal)
            }
            Err(e) => {
                error!(error = %e, qname = %response.qname, "Cannot create response");
                RewriteOutcome::SynthesisFailed
            }
        }
    }
}

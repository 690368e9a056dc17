use std::net::Ipv4Addr;

/// Result of running one completed query through the rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// Nothing matched; the upstream reply stands as is.
    PassThrough,
    /// A synthetic answer pointing at the internal address was installed.
    Rewritten(Ipv4Addr),
    /// A match was found but the host refused the synthetic answer.
    SynthesisFailed,
}

impl RewriteOutcome {
    pub fn is_rewritten(&self) -> bool {
        matches!(self, RewriteOutcome::Rewritten(_))
    }
}

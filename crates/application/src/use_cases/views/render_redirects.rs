use split_horizon_domain::{Config, DomainError, NetworkPair, ViewTable};
use tracing::debug;

/// Use case: render every configured WAN → LAN address pair through the
/// redirect template, for feeding a packet filter.
///
/// Interface discovery is not consulted; all pairs are rendered. Output is
/// sorted by external address and holds one line per external address.
pub struct RenderRedirectsUseCase;

impl RenderRedirectsUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, config: &Config) -> Result<Vec<String>, DomainError> {
        let pairs = config.network_pairs()?;

        let mut builder = ViewTable::builder();
        for pair in &pairs {
            builder.activate(pair);
        }
        let table = builder.build();

        let template = config.redirect_template();
        let lines: Vec<String> = table
            .sorted_entries()
            .into_iter()
            .map(|(wan, lan)| NetworkPair::render(template, wan, lan))
            .collect();

        debug!(pairs = pairs.len(), lines = lines.len(), "Redirects rendered");
        Ok(lines)
    }
}

impl Default for RenderRedirectsUseCase {
    fn default() -> Self {
        Self::new()
    }
}

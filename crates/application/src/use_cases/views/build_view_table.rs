use crate::ports::InterfaceAddressSource;
use split_horizon_domain::address::parse_address;
use split_horizon_domain::{Config, DomainError, ViewTable};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Use case: derive the external → internal view table from the configured
/// network pairs and the addresses currently bound to each interface.
///
/// A pair only takes part when one of its interface's addresses lies inside
/// the LAN network; it then contributes its whole WAN ↔ LAN correspondence.
pub struct BuildViewTableUseCase {
    address_source: Arc<dyn InterfaceAddressSource>,
}

impl BuildViewTableUseCase {
    pub fn new(address_source: Arc<dyn InterfaceAddressSource>) -> Self {
        Self { address_source }
    }

    #[instrument(skip(self, config))]
    pub async fn execute(&self, config: &Config) -> Result<ViewTable, DomainError> {
        let pairs = config.view_pairs()?;
        let mut builder = ViewTable::builder();

        for interface_pairs in pairs.chunk_by(|a, b| a.interface() == b.interface()) {
            let interface = interface_pairs[0].interface();
            let local_addrs = self.local_addresses(interface).await;
            debug!(
                interface = %interface,
                addresses = local_addrs.len(),
                "Interface addresses discovered"
            );

            for pair in interface_pairs {
                if !pair.is_active_on(&local_addrs) {
                    debug!(interface = %interface, wan = %pair.wan(), lan = %pair.lan(), "No local address inside LAN");
                    continue;
                }

                let written = builder.activate(pair);
                debug!(interface = %interface, wan = %pair.wan(), lan = %pair.lan(), entries = written, "Network pair activated");
            }
        }

        let table = builder.build();
        info!(entries = table.len(), "View table built");
        Ok(table)
    }

    async fn local_addresses(&self, interface: &str) -> Vec<Ipv4Addr> {
        self.address_source
            .addresses(interface)
            .await
            .iter()
            .filter_map(|raw| match parse_address(raw) {
                Ok(addr) => Some(addr),
                Err(e) => {
                    warn!(error = %e, interface = %interface, "Skipping malformed interface address");
                    None
                }
            })
            .collect()
    }
}

use crate::address::{self, parse_network};
use crate::DomainError;
use ipnetwork::Ipv4Network;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// A WAN network and the LAN network it is NATed onto, scoped to one interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkPair {
    interface: Arc<str>,
    wan: Ipv4Network,
    lan: Ipv4Network,
}

impl NetworkPair {
    /// Parses both networks. WAN and LAN must have the same prefix length so
    /// that their address sequences line up one to one.
    pub fn parse(interface: &str, wan: &str, lan: &str) -> Result<Self, DomainError> {
        let wan_net = parse_network(wan)?;
        let lan_net = parse_network(lan)?;

        if wan_net.prefix() != lan_net.prefix() {
            return Err(DomainError::PrefixLengthMismatch {
                wan: wan.to_string(),
                lan: lan.to_string(),
            });
        }

        Ok(Self {
            interface: Arc::from(interface),
            wan: wan_net,
            lan: lan_net,
        })
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn wan(&self) -> Ipv4Network {
        self.wan
    }

    pub fn lan(&self) -> Ipv4Network {
        self.lan
    }

    /// True when any of the given local addresses lies inside the LAN network.
    pub fn is_active_on(&self, local_addrs: &[Ipv4Addr]) -> bool {
        local_addrs.iter().any(|addr| self.lan.contains(*addr))
    }

    /// `(WAN[i], LAN[i])` for every index of the shared enumeration.
    pub fn correspondence(&self) -> impl Iterator<Item = (Ipv4Addr, Ipv4Addr)> {
        address::enumerate(self.wan).zip(address::enumerate(self.lan))
    }

    /// Renders the pair through a template with `{wan}` and `{lan}` fields.
    pub fn render(template: &str, wan: Ipv4Addr, lan: Ipv4Addr) -> String {
        template
            .replace("{wan}", &wan.to_string())
            .replace("{lan}", &lan.to_string())
    }
}

use crate::address::{self, AddressKey};
use crate::network_pair::NetworkPair;
use crate::DomainError;
use rustc_hash::FxHashMap;
use std::net::Ipv4Addr;

/// External address → internal address mapping.
///
/// Only [`ViewTableBuilder`] can add entries; once built the table is
/// read-only and can be shared across query handlers behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewTable {
    entries: FxHashMap<AddressKey, Ipv4Addr>,
}

impl ViewTable {
    pub fn builder() -> ViewTableBuilder {
        ViewTableBuilder::default()
    }

    pub fn get(&self, key: &AddressKey) -> Option<Ipv4Addr> {
        self.entries.get(key).copied()
    }

    pub fn translate(&self, external: Ipv4Addr) -> Option<Ipv4Addr> {
        self.get(&address::to_key(external))
    }

    /// Looks up the address carried by an A record data blob.
    pub fn lookup_rdata(&self, rdata: &[u8]) -> Result<Option<Ipv4Addr>, DomainError> {
        let key = address::key_from_rdata(rdata)?;
        Ok(self.get(&key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by numeric external address.
    pub fn sorted_entries(&self) -> Vec<(Ipv4Addr, Ipv4Addr)> {
        let mut entries: Vec<(Ipv4Addr, Ipv4Addr)> = self
            .entries
            .iter()
            .map(|(key, internal)| (address::from_key(*key), *internal))
            .collect();
        entries.sort_unstable_by_key(|(external, _)| u32::from(*external));
        entries
    }
}

#[derive(Debug, Default)]
pub struct ViewTableBuilder {
    entries: FxHashMap<AddressKey, Ipv4Addr>,
}

impl ViewTableBuilder {
    /// Inserts the whole WAN ↔ LAN correspondence of `pair`. Existing keys are
    /// overwritten. Returns the number of entries written.
    pub fn activate(&mut self, pair: &NetworkPair) -> usize {
        let mut written = 0;
        for (wan, lan) in pair.correspondence() {
            self.entries.insert(address::to_key(wan), lan);
            written += 1;
        }
        written
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(self) -> ViewTable {
        ViewTable {
            entries: self.entries,
        }
    }
}

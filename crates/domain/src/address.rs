//! IPv4 address and network helpers.
//!
//! All conversions between the textual, structured and four-byte wire forms
//! of an address go through here.

use crate::DomainError;
use ipnetwork::Ipv4Network;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Length of an A record payload.
pub const ADDRESS_LEN: usize = 4;

/// Network-order bytes of an IPv4 address, as found in A record data.
pub type AddressKey = [u8; ADDRESS_LEN];

pub fn parse_network(cidr: &str) -> Result<Ipv4Network, DomainError> {
    Ipv4Network::from_str(cidr.trim())
        .map_err(|e| DomainError::InvalidCidr(format!("{}: {}", cidr, e)))
}

pub fn parse_address(addr: &str) -> Result<Ipv4Addr, DomainError> {
    Ipv4Addr::from_str(addr.trim())
        .map_err(|e| DomainError::InvalidIpAddress(format!("{}: {}", addr, e)))
}

#[inline]
pub fn to_key(addr: Ipv4Addr) -> AddressKey {
    addr.octets()
}

#[inline]
pub fn from_key(key: AddressKey) -> Ipv4Addr {
    Ipv4Addr::from(key)
}

/// Extracts the address from an A record data blob.
///
/// The address occupies the last four bytes, so blobs carrying a length
/// prefix in front of the rdata are accepted as well.
pub fn key_from_rdata(rdata: &[u8]) -> Result<AddressKey, DomainError> {
    if rdata.len() < ADDRESS_LEN {
        return Err(DomainError::InvalidRecordData(format!(
            "A record data too short: {} bytes",
            rdata.len()
        )));
    }

    let mut key = [0u8; ADDRESS_LEN];
    key.copy_from_slice(&rdata[rdata.len() - ADDRESS_LEN..]);
    Ok(key)
}

/// Addresses of `network` in ascending order, network and broadcast included.
pub fn enumerate(network: Ipv4Network) -> impl Iterator<Item = Ipv4Addr> {
    network.iter()
}

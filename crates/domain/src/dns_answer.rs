//! Resolver-agnostic view of an answer section.

use std::fmt;
use std::net::Ipv4Addr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    RRSIG,
    Other(u16),
}

impl RecordType {
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::CNAME => 5,
            RecordType::AAAA => 28,
            RecordType::RRSIG => 46,
            RecordType::Other(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            5 => RecordType::CNAME,
            28 => RecordType::AAAA,
            46 => RecordType::RRSIG,
            other => RecordType::Other(other),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => write!(f, "A"),
            RecordType::AAAA => write!(f, "AAAA"),
            RecordType::CNAME => write!(f, "CNAME"),
            RecordType::RRSIG => write!(f, "RRSIG"),
            RecordType::Other(code) => write!(f, "TYPE{}", code),
        }
    }
}

/// One entry of a record set, either record data or a covering signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RrEntry<'a> {
    Data(&'a [u8]),
    Signature(&'a [u8]),
}

/// A record set from the answer section.
///
/// `data` holds `count` record data blobs followed by `rrsig_count`
/// signature blobs, mirroring how resolvers store signed sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRrSet {
    pub owner: Arc<str>,
    pub record_type: RecordType,
    data: Vec<Vec<u8>>,
    count: usize,
    rrsig_count: usize,
}

impl AnswerRrSet {
    pub fn new(owner: impl Into<Arc<str>>, record_type: RecordType, data: Vec<Vec<u8>>) -> Self {
        let count = data.len();
        Self {
            owner: owner.into(),
            record_type,
            data,
            count,
            rrsig_count: 0,
        }
    }

    pub fn with_signatures(mut self, signatures: Vec<Vec<u8>>) -> Self {
        self.rrsig_count += signatures.len();
        self.data.extend(signatures);
        self
    }

    pub fn push_signature(&mut self, signature: Vec<u8>) {
        self.data.push(signature);
        self.rrsig_count += 1;
    }

    pub fn push_data(&mut self, rdata: Vec<u8>) {
        self.data.insert(self.count, rdata);
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn rrsig_count(&self) -> usize {
        self.rrsig_count
    }

    pub fn is_address_set(&self) -> bool {
        self.record_type == RecordType::A
    }

    /// All `count + rrsig_count` entries, tagged by kind.
    pub fn entries(&self) -> impl Iterator<Item = RrEntry<'_>> {
        let count = self.count;
        self.data.iter().enumerate().map(move |(i, blob)| {
            if i < count {
                RrEntry::Data(blob.as_slice())
            } else {
                RrEntry::Signature(blob.as_slice())
            }
        })
    }
}

/// Validation state attached to a reply.
///
/// Numbering follows the usual resolver convention; `Indeterminate` tells a
/// downstream validator the answer was produced locally and needs no check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecurityStatus {
    #[default]
    Unchecked = 0,
    Indeterminate = 2,
}

impl SecurityStatus {
    pub fn needs_validation(&self) -> bool {
        matches!(self, SecurityStatus::Unchecked)
    }
}

/// Return code handed back to the host. A rewrite always succeeds with
/// NOERROR; failures surface as a module error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
}

/// Locally built single-answer reply: `<qname> IN A <address>`.
///
/// Always a query response with AA and RA set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticResponse {
    pub qname: Arc<str>,
    pub address: Ipv4Addr,
    pub ttl: u32,
}

impl SyntheticResponse {
    pub const AUTHORITATIVE: bool = true;
    pub const RECURSION_AVAILABLE: bool = true;

    pub fn new(qname: impl Into<Arc<str>>, address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            qname: qname.into(),
            address,
            ttl,
        }
    }

    pub fn answer_line(&self) -> String {
        format!("{} IN A {}", self.qname, self.address)
    }
}

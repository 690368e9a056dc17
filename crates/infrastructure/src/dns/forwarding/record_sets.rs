//! Groups a hickory answer section into resolver-style record sets.

use hickory_proto::dnssec::rdata::DNSSECRData;
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use split_horizon_domain::{AnswerRrSet, RecordType};
use tracing::warn;

/// One answer record reduced to what grouping needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawRecord {
    Data {
        owner: String,
        record_type: RecordType,
        rdata: Vec<u8>,
    },
    Signature {
        owner: String,
        covered: RecordType,
        rdata: Vec<u8>,
    },
}

pub struct RecordSetCollector;

impl RecordSetCollector {
    pub fn collect(message: &Message) -> Vec<AnswerRrSet> {
        Self::group(message.answers().iter().filter_map(Self::raw_record))
    }

    /// Sets appear in first-seen order. Signatures are attached to the set
    /// they cover; a signature with no such set becomes an RRSIG set of its own.
    pub fn group(records: impl IntoIterator<Item = RawRecord>) -> Vec<AnswerRrSet> {
        let mut sets: Vec<AnswerRrSet> = Vec::new();
        let mut signatures = Vec::new();

        for record in records {
            match record {
                RawRecord::Data {
                    owner,
                    record_type,
                    rdata,
                } => match Self::find(&mut sets, &owner, record_type) {
                    Some(set) => set.push_data(rdata),
                    None => sets.push(AnswerRrSet::new(owner, record_type, vec![rdata])),
                },
                RawRecord::Signature {
                    owner,
                    covered,
                    rdata,
                } => signatures.push((owner, covered, rdata)),
            }
        }

        for (owner, covered, rdata) in signatures {
            match Self::find(&mut sets, &owner, covered) {
                Some(set) => set.push_signature(rdata),
                None => sets.push(
                    AnswerRrSet::new(owner, RecordType::RRSIG, Vec::new())
                        .with_signatures(vec![rdata]),
                ),
            }
        }

        sets
    }

    fn find<'a>(
        sets: &'a mut [AnswerRrSet],
        owner: &str,
        record_type: RecordType,
    ) -> Option<&'a mut AnswerRrSet> {
        sets.iter_mut().find(|set| {
            set.record_type == record_type && set.owner.eq_ignore_ascii_case(owner)
        })
    }

    fn raw_record(record: &Record) -> Option<RawRecord> {
        let owner = record.name().to_utf8();

        match record.data() {
            RData::A(a) => Some(RawRecord::Data {
                owner,
                record_type: RecordType::A,
                rdata: a.0.octets().to_vec(),
            }),
            RData::DNSSEC(DNSSECRData::RRSIG(rrsig)) => {
                let covered = RecordType::from_u16(u16::from(rrsig.input().type_covered));
                let rdata = Self::encode(record)?;
                Some(RawRecord::Signature {
                    owner,
                    covered,
                    rdata,
                })
            }
            _ => {
                let record_type = RecordType::from_u16(u16::from(record.record_type()));
                let rdata = Self::encode(record)?;
                Some(RawRecord::Data {
                    owner,
                    record_type,
                    rdata,
                })
            }
        }
    }

    fn encode(record: &Record) -> Option<Vec<u8>> {
        match record.data().to_bytes() {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(error = %e, owner = %record.name(), "Failed to encode record data");
                None
            }
        }
    }
}

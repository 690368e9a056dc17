//! DNS Message Builder
//!
//! Constructs the upstream A query and the locally synthesized answer using
//! `hickory-proto`.

use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use split_horizon_domain::{DomainError, SyntheticResponse};
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Question section entry for `domain IN A`.
    pub fn a_query(domain: &str) -> Result<Query, DomainError> {
        let name = Name::from_str(domain).map_err(|e| {
            DomainError::InvalidRecordData(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordType::A);
        query.set_query_class(DNSClass::IN);
        Ok(query)
    }

    /// Build a recursive query message and return both its ID and wire bytes.
    pub fn build_query_with_id(query: &Query) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query.clone());

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Single-answer authoritative reply for a rewritten query.
    ///
    /// QR, AA and RA are set and the response code is NOERROR.
    pub fn build_synthetic_response(
        id: u16,
        query: &Query,
        response: &SyntheticResponse,
    ) -> Result<Message, DomainError> {
        let name = Name::from_str(&response.qname).map_err(|e| {
            DomainError::SynthesisFailed(format!(
                "Invalid owner name '{}': {}",
                response.qname, e
            ))
        })?;

        let mut message = Message::new(id, MessageType::Response, OpCode::Query);
        message.set_authoritative(SyntheticResponse::AUTHORITATIVE);
        message.set_recursion_available(SyntheticResponse::RECURSION_AVAILABLE);
        message.set_response_code(ResponseCode::NoError);
        message.add_query(query.clone());
        message.add_answer(Record::from_rdata(
            name,
            response.ttl,
            RData::A(A(response.address)),
        ));

        Ok(message)
    }

    pub fn parse(bytes: &[u8]) -> Result<Message, DomainError> {
        Message::from_vec(bytes).map_err(|e| {
            DomainError::InvalidRecordData(format!("Failed to parse DNS response: {}", e))
        })
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidRecordData(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

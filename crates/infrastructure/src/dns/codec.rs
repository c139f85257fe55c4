//! Wire encode/decode via `hickory-proto`.
//!
//! This is the only place outside the Listener's own receive loop that
//! touches `hickory_proto` types — the rest of the workspace talks in
//! terms of the domain-level [`DnsQuery`] and raw wire bytes.

use aegis_dns_application::ports::WireCodecPort;
use aegis_dns_domain::{BlockAction, DnsQuery, DomainError, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType as HickoryRecordType};
use hickory_proto::serialize::binary::{BinDecodable, BinEncodable, BinEncoder};
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

pub struct WireCodec;

impl WireCodec {
    pub fn new() -> Self {
        Self
    }

    /// Decodes an inbound datagram into a [`DnsQuery`]. Returns `None` for
    /// a message that fails to parse or carries zero questions — the
    /// Listener answers those with [`WireCodecPort::build_empty_reply`]
    /// and discards them without further processing.
    pub fn decode_query(&self, raw: &[u8], client: SocketAddr) -> Option<DnsQuery> {
        let message = Message::from_vec(raw).ok()?;
        let question = message.queries().first()?;
        let name = Arc::from(normalize_hickory_name(question.name()));
        let record_type = to_record_type(question.query_type());
        Some(DnsQuery {
            id: message.id(),
            name,
            record_type,
            client,
            raw: Arc::from(raw.to_vec().into_boxed_slice()),
        })
    }
}

impl Default for WireCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl WireCodecPort for WireCodec {
    fn substitute_transaction_id(&self, wire_bytes: &[u8], id: u16) -> Vec<u8> {
        let mut copy = wire_bytes.to_vec();
        if copy.len() >= 2 {
            copy[0..2].copy_from_slice(&id.to_be_bytes());
        }
        copy
    }

    fn build_block_response(
        &self,
        query: &DnsQuery,
        action: BlockAction,
        redirect_ip: Ipv4Addr,
    ) -> Vec<u8> {
        let mut message = base_reply(query.id);
        let Ok(name) = Name::from_str(&query.name) else {
            return encode(&message).unwrap_or_default();
        };
        let mut question = Query::new();
        question.set_name(name.clone());
        question.set_query_type(to_hickory_type(query.record_type));
        question.set_query_class(DNSClass::IN);
        message.add_query(question);

        match action {
            BlockAction::Nxdomain => {
                message.set_response_code(ResponseCode::NXDomain);
            }
            BlockAction::Redirect => {
                apply_address_answer(&mut message, &name, query.record_type, redirect_ip);
            }
            BlockAction::BlockPage => {
                apply_address_answer(&mut message, &name, query.record_type, Ipv4Addr::LOCALHOST);
            }
        }

        encode(&message).unwrap_or_default()
    }

    fn build_servfail(&self, query: &DnsQuery) -> Vec<u8> {
        let mut message = base_reply(query.id);
        message.set_response_code(ResponseCode::ServFail);
        if let Ok(name) = Name::from_str(&query.name) {
            let mut question = Query::new();
            question.set_name(name);
            question.set_query_type(to_hickory_type(query.record_type));
            question.set_query_class(DNSClass::IN);
            message.add_query(question);
        }
        encode(&message).unwrap_or_default()
    }

    fn build_empty_reply(&self, raw_query: &[u8]) -> Vec<u8> {
        let id = if raw_query.len() >= 2 {
            u16::from_be_bytes([raw_query[0], raw_query[1]])
        } else {
            0
        };
        let mut message = base_reply(id);
        if let Ok(parsed) = Message::from_vec(raw_query) {
            for query in parsed.queries() {
                message.add_query(query.clone());
            }
        }
        encode(&message).unwrap_or_default()
    }
}

/// Only `A` queries get a synthesized address record under
/// `redirect`/`block_page`; every other query type resolves to NOERROR
/// with an empty answer section.
fn apply_address_answer(
    message: &mut Message,
    name: &Name,
    record_type: RecordType,
    address: Ipv4Addr,
) {
    if !record_type.is_a() {
        message.set_response_code(ResponseCode::NoError);
        return;
    }
    let record = Record::from_rdata(name.clone(), 300, RData::A(A(address)));
    message.add_answer(record);
    message.set_response_code(ResponseCode::NoError);
}

fn base_reply(id: u16) -> Message {
    let mut message = Message::new(id, MessageType::Response, OpCode::Query);
    message.set_recursion_desired(true);
    message.set_recursion_available(true);
    message.set_authoritative(true);
    message
}

fn encode(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message
        .emit(&mut encoder)
        .map_err(|e| DomainError::InvalidDnsMessage(e.to_string()))?;
    Ok(buf)
}

fn normalize_hickory_name(name: &Name) -> String {
    aegis_dns_domain::domain_name::normalize(&name.to_utf8())
}

fn to_record_type(hickory: HickoryRecordType) -> RecordType {
    RecordType::from_u16(u16::from(hickory))
}

fn to_hickory_type(record_type: RecordType) -> HickoryRecordType {
    HickoryRecordType::from(record_type.to_u16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::rr::DNSClass;

    fn build_query_bytes(name: &str, id: u16) -> Vec<u8> {
        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        let mut query = Query::new();
        query.set_name(Name::from_str(name).unwrap());
        query.set_query_type(HickoryRecordType::A);
        query.set_query_class(DNSClass::IN);
        message.add_query(query);
        message.set_recursion_desired(true);
        encode(&message).unwrap()
    }

    #[test]
    fn decodes_name_and_type() {
        let bytes = build_query_bytes("Example.COM.", 42);
        let codec = WireCodec::new();
        let query = codec
            .decode_query(&bytes, "127.0.0.1:5353".parse().unwrap())
            .unwrap();
        assert_eq!(query.id, 42);
        assert_eq!(&*query.name, "example.com");
        assert!(query.record_type.is_a());
    }

    #[test]
    fn malformed_bytes_decode_to_none() {
        let codec = WireCodec::new();
        assert!(codec
            .decode_query(&[1, 2, 3], "127.0.0.1:5353".parse().unwrap())
            .is_none());
    }

    #[test]
    fn substitute_transaction_id_overwrites_first_two_bytes() {
        let codec = WireCodec::new();
        let bytes = build_query_bytes("example.com", 1);
        let out = codec.substitute_transaction_id(&bytes, 99);
        assert_eq!(u16::from_be_bytes([out[0], out[1]]), 99);
    }

    #[test]
    fn empty_reply_echoes_question_with_noerror() {
        let codec = WireCodec::new();
        let bytes = build_query_bytes("example.com", 7);
        let reply = codec.build_empty_reply(&bytes);
        let parsed = Message::from_vec(&reply).unwrap();
        assert_eq!(parsed.id(), 7);
        assert_eq!(parsed.response_code(), ResponseCode::NoError);
        assert!(parsed.answers().is_empty());
        assert_eq!(parsed.queries().len(), 1);
    }
}

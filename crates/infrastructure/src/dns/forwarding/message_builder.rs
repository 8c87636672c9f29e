//! Wire-format query construction with `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use mesos_dns_domain::{DomainError, RecordType, ResolutionError};
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Serialize a single-question recursive query with a random ID.
    ///
    /// `record_type` of `None` builds an `ANY` query. Returns the ID so the
    /// caller can match the response.
    pub fn build_query(
        name: &str,
        record_type: Option<RecordType>,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let qname = Name::from_str(name).map_err(|e| ResolutionError::InvalidName {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        let mut query = Query::new();
        query.set_name(qname);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);
        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::Internal(format!("Failed to serialize DNS query: {}", e))
        })?;

        Ok(buf)
    }
}

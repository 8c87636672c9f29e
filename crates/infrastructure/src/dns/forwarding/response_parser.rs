use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::Record;
use mesos_dns_domain::{DomainError, RecordType, ResolutionError};
use tracing::debug;

/// One answer in presentation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireAnswer {
    pub record_type: RecordType,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub authoritative: bool,

    pub answers: Vec<WireAnswer>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    pub fn is_success(&self) -> bool {
        self.rcode == ResponseCode::NoError
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            ResolutionError::MalformedResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();
        let authoritative = message.authoritative();

        let mut answers = Vec::with_capacity(message.answers().len());
        let mut skipped = 0usize;

        for record in message.answers() {
            match Self::to_answer(record) {
                Some(answer) => answers.push(answer),
                None => skipped += 1,
            }
        }

        debug!(
            rcode = ?rcode,
            answers = answers.len(),
            skipped = skipped,
            truncated = truncated,
            authoritative = authoritative,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            truncated,
            authoritative,
            answers,
        })
    }

    fn to_answer(record: &Record) -> Option<WireAnswer> {
        let record_type = RecordTypeMapper::from_hickory(record.record_type())?;

        // presentation form; SRV renders as "<priority> <weight> <port> <target>"
        Some(WireAnswer {
            record_type,
            value: record.data().to_string(),
        })
    }

    /// Failures that should move the query on to the next server.
    pub fn is_transport_error(error: &DomainError) -> bool {
        matches!(
            error,
            DomainError::Resolution(
                ResolutionError::Timeout { .. } | ResolutionError::Unreachable { .. }
            )
        )
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

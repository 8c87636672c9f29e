use super::{RecordType, ServiceRecord};
use crate::errors::DomainError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlainRecord {
    pub record_type: RecordType,

    pub name: String,

    /// Presentation text of the record data, exactly as the server returned it.
    pub value: String,
}

impl PlainRecord {
    pub fn new(record_type: RecordType, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            record_type,
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A resolved record. SRV answers are parsed into [`ServiceRecord`], every
/// other type keeps its raw value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DnsRecord {
    Plain(PlainRecord),
    Service(ServiceRecord),
}

impl DnsRecord {
    /// Record factory keyed on type: SRV values are parsed, anything else is
    /// stored verbatim.
    pub fn create(
        record_type: RecordType,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, DomainError> {
        match record_type {
            RecordType::SRV => ServiceRecord::create(record_type, name, value).map(Self::Service),
            _ => Ok(Self::plain(record_type, name, value)),
        }
    }

    pub fn plain(record_type: RecordType, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Plain(PlainRecord::new(record_type, name, value))
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            Self::Plain(record) => record.record_type,
            Self::Service(record) => record.record_type(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Plain(record) => &record.name,
            Self::Service(record) => record.name(),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Plain(record) => &record.value,
            Self::Service(record) => record.value(),
        }
    }

    pub fn is_service_record(&self) -> bool {
        matches!(self, Self::Service(_))
    }

    pub fn as_service_record(&self) -> Option<&ServiceRecord> {
        match self {
            Self::Service(record) => Some(record),
            Self::Plain(_) => None,
        }
    }

    pub fn into_service_record(self) -> Option<ServiceRecord> {
        match self {
            Self::Service(record) => Some(record),
            Self::Plain(_) => None,
        }
    }
}

impl From<ServiceRecord> for DnsRecord {
    fn from(record: ServiceRecord) -> Self {
        Self::Service(record)
    }
}

impl From<PlainRecord> for DnsRecord {
    fn from(record: PlainRecord) -> Self {
        Self::Plain(record)
    }
}

impl fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(record) => {
                write!(f, "{} {} {}", record.name, record.record_type, record.value)
            }
            Self::Service(record) => record.fmt(f),
        }
    }
}

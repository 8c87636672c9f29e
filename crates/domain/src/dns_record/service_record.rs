use super::RecordType;
use crate::errors::DomainError;
use std::fmt;

/// A parsed SRV record.
///
/// The only way to obtain one is to parse the raw `value` handed back by the
/// server, so the numeric fields and `target` always agree with `value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceRecord {
    name: String,
    value: String,
    priority: u16,
    weight: u16,
    port: u16,
    target: String,
}

impl ServiceRecord {
    /// Builds a service record from a record of the given type.
    ///
    /// Fails with [`DomainError::InvalidArgument`] when `record_type` is not
    /// SRV and with [`DomainError::InvalidServiceRecord`] when `value` does
    /// not read as `<priority> <weight> <port> <target>`.
    pub fn create(
        record_type: RecordType,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if record_type != RecordType::SRV {
            return Err(DomainError::InvalidArgument(format!(
                "type must be SRV, got {}",
                record_type
            )));
        }

        Self::parse(name, value)
    }

    pub fn parse(name: impl Into<String>, value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let (priority, weight, port, target) = parse_fields(&value).ok_or_else(|| {
            DomainError::InvalidServiceRecord(format!(
                "SRV record \"{}\" could not be parsed",
                value
            ))
        })?;
        let target = target.to_string();

        Ok(Self {
            name: name.into(),
            value,
            priority,
            weight,
            port,
            target,
        })
    }

    pub fn record_type(&self) -> RecordType {
        RecordType::SRV
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Lower value means more preferred.
    pub fn priority(&self) -> u16 {
        self.priority
    }

    /// Relative weight among records sharing a priority; higher is picked more often.
    pub fn weight(&self) -> u16 {
        self.weight
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Canonical hostname of the machine providing the service, trailing dot included.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for ServiceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} SRV priority={} weight={} port={} target={}",
            self.name, self.priority, self.weight, self.port, self.target
        )
    }
}

fn parse_fields(value: &str) -> Option<(u16, u16, u16, &str)> {
    let (priority, rest) = next_token(value)?;
    let (weight, rest) = next_token(rest)?;
    let (port, rest) = next_token(rest)?;
    let target = rest.trim();

    if target.is_empty() {
        return None;
    }

    Some((
        parse_u16(priority)?,
        parse_u16(weight)?,
        parse_u16(port)?,
        target,
    ))
}

fn next_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    let end = input.find(char::is_whitespace)?;
    Some((&input[..end], &input[end..]))
}

fn parse_u16(token: &str) -> Option<u16> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

use mesos_dns_domain::DomainError;
use thiserror::Error;

/// Error surfaced by [`MesosDnsClient`](crate::use_cases::MesosDnsClient).
///
/// Every failure of the wrapped client is re-typed as `Lookup`, keeping the
/// underlying error as its source.
#[derive(Error, Debug)]
pub enum MesosDnsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Lookup of '{name}' failed")]
    Lookup {
        name: String,
        #[source]
        source: DomainError,
    },
}

impl MesosDnsError {
    /// The wrapped client's error, if this is a lookup failure.
    pub fn lookup_error(&self) -> Option<&DomainError> {
        match self {
            Self::Lookup { source, .. } => Some(source),
            Self::InvalidArgument(_) => None,
        }
    }
}

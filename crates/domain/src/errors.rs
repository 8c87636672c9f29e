use thiserror::Error;

/// Failures of the name-resolution primitive itself.
///
/// These always reach the caller: the cache never stores them and the retry
/// layer never retries past them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Name not found (NXDOMAIN): {name}")]
    NotFound { name: String },

    #[error("Query timeout waiting for {server}")]
    Timeout { server: String },

    #[error("Server {server} unreachable: {reason}")]
    Unreachable { server: String, reason: String },

    #[error("Server failure for {name}: {rcode}")]
    ServerFailure { name: String, rcode: String },

    #[error("Non-authoritative answer for {name}")]
    NotAuthoritative { name: String },

    #[error("Malformed DNS response: {0}")]
    MalformedResponse(String),

    #[error("Invalid query name {name}: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("No DNS servers configured")]
    NoServers,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid service record: {0}")]
    InvalidServiceRecord(String),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution(_))
    }

    pub fn resolution(&self) -> Option<&ResolutionError> {
        match self {
            Self::Resolution(e) => Some(e),
            _ => None,
        }
    }
}

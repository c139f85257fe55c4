use thiserror::Error;

/// Error kinds the core can produce. The query hot path never lets one of
/// these escape to the client unanswered (see [`crate::DomainError`]
/// callers in `application`/`infrastructure`): it is always resolved into a
/// concrete DNS reply before the worker task ends.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("malformed query: {0}")]
    MalformedQuery(String),

    #[error("invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("no upstream servers configured")]
    NoUpstreamServers,

    #[error("blocklist fetch failed for {source}: {reason}")]
    BlocklistFetchFailure { source: String, reason: String },

    #[error("blocklist parse failed for {file}: {reason}")]
    BlocklistParseFailure { file: String, reason: String },

    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("storage failure: {0}")]
    StorageFailure(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}

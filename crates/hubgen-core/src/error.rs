//! Error types for catalog acquisition and code generation

use thiserror::Error;

/// Result type alias for hubgen operations
pub type HubgenResult<T> = Result<T, HubgenError>;

/// Error raised by a remote catalog call.
///
/// The acquisition layer treats every variant as retryable up to the retry
/// ceiling; after that the error propagates unchanged inside
/// [`HubgenError::Remote`].
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// Transport-level failure (connection reset, DNS, TLS, timeout)
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote rejected the call due to rate limiting
    #[error("rate limited by remote")]
    RateLimited,

    /// Non-success HTTP status from the remote
    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Error type for a generation run
///
/// All variants are fatal to the run: there is no partial output, because the
/// four emitted modules cross-reference each other's names.
#[derive(Error, Debug)]
pub enum HubgenError {
    /// A remote call failed after exhausting every retry attempt
    #[error("remote call failed after {attempts} attempts: {source}")]
    Remote {
        attempts: u32,
        #[source]
        source: ApiError,
    },

    /// A schema node used a type tag outside the closed vocabulary
    #[error("unsupported schema: {0}")]
    UnsupportedSchema(String),

    /// A component referenced a capability absent from the resolved catalog
    #[error("component references capability {id} v{version} missing from catalog")]
    MissingCapability { id: String, version: u32 },

    /// Entity data too broken to name (e.g. empty id on the collision path)
    #[error("invalid entity data: {0}")]
    InvalidEntity(String),
}

impl From<serde_json::Error> for HubgenError {
    fn from(err: serde_json::Error) -> Self {
        HubgenError::InvalidEntity(err.to_string())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;

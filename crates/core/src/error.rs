//! Domain-level error type.

/// Errors produced by the domain and repository layers.
///
/// HTTP mapping happens in the API crate's `AppError`; this enum stays
/// transport-agnostic. An absent record is a normal outcome represented
/// as `None`, never a variant here.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A write violated the minimal required-fields contract
    /// (`email` for users, `category` + `host.email` for rooms).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A caller-supplied identifier does not parse into the store's
    /// identifier format. Surfaced as a client error, never a crash.
    #[error("Malformed identifier: {0}")]
    MalformedId(String),
}

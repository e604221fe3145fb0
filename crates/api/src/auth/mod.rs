//! Session authentication primitives.
//!
//! - [`jwt`] -- signed session token issuance and verification.
//! - [`cookies`] -- binding a token to the HTTP `token` cookie.

pub mod cookies;
pub mod jwt;

/// Why a request could not be authenticated.
///
/// All three variants surface as a 401; none is retried and none escalates
/// to a crash. The response body does not distinguish `Invalid` from
/// `Expired`, so a caller learns nothing about why verification failed.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No session cookie was present on the request.
    #[error("missing session cookie")]
    Missing,
    /// The token signature did not verify or the payload was malformed.
    #[error("invalid session token")]
    Invalid,
    /// The token's embedded expiry has elapsed.
    #[error("expired session token")]
    Expired,
}

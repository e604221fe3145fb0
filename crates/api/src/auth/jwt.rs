//! Session token issuance and verification.
//!
//! Tokens are HS256-signed JWTs whose payload is the caller-supplied
//! identity claim (an arbitrary field bag, in practice at least an email)
//! plus an absolute expiry. A token is valid iff its signature verifies
//! against the server secret and its expiry has not elapsed. There is no
//! server-side revocation: logout only clears the client's cookie, so an
//! unexpired token stays cryptographically valid after logout.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use stayvista_core::types::Document;

use super::AuthError;

/// JWT claims embedded in every session token.
///
/// The identity bag is flattened, so the wire format is the caller's own
/// fields plus `exp`/`iat`. On decode the registered claims are consumed by
/// the named fields and the identity comes back unchanged.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(flatten)]
    identity: Document,
    /// Expiration time (UTC Unix timestamp).
    exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    iat: i64,
}

/// Default session lifetime in hours.
const DEFAULT_TOKEN_EXPIRY_HOURS: i64 = 2;

/// Configuration for session token generation and verification.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Session token lifetime in hours (default: 2).
    pub token_expiry_hours: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var              | Required | Default |
    /// |----------------------|----------|---------|
    /// | `ACCESS_TOKEN_SECRET`| **yes**  | --      |
    /// | `TOKEN_EXPIRY_HOURS` | no       | `2`     |
    ///
    /// # Panics
    ///
    /// Panics if `ACCESS_TOKEN_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret = std::env::var("ACCESS_TOKEN_SECRET")
            .expect("ACCESS_TOKEN_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "ACCESS_TOKEN_SECRET must not be empty");

        let token_expiry_hours: i64 = std::env::var("TOKEN_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_EXPIRY_HOURS.to_string())
            .parse()
            .expect("TOKEN_EXPIRY_HOURS must be a valid i64");

        Self {
            secret,
            token_expiry_hours,
        }
    }
}

/// Sign the given identity claim into a session token.
///
/// The expiry is `now + token_expiry_hours`, so two calls at different
/// instants produce different tokens for the same claim.
pub fn issue_token(
    identity: &Document,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.token_expiry_hours * 3600;

    let claims = Claims {
        identity: identity.clone(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify a session token and return the embedded identity claim unchanged.
///
/// Fails with [`AuthError::Expired`] when the embedded expiry has elapsed
/// and [`AuthError::Invalid`] for a bad signature or malformed payload.
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<Document, AuthError> {
    // HS256, validates exp. The expiry is absolute: the default 60-second
    // clock-skew leeway would let an already-elapsed token through.
    let mut validation = Validation::default();
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        _ => AuthError::Invalid,
    })?;

    Ok(token_data.claims.identity)
}

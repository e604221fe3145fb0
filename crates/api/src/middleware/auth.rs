//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use stayvista_core::types::Document;

use crate::auth::cookies::SESSION_COOKIE;
use crate::auth::jwt::verify_token;
use crate::auth::AuthError;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated identity decoded from the session cookie.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication; it runs before the handler and short-circuits with a 401
/// when the cookie is missing, the signature does not verify, or the token
/// has expired:
///
/// ```ignore
/// async fn my_handler(identity: Identity) -> AppResult<Json<Document>> {
///     tracing::info!(email = ?identity.email(), "handling request");
///     Ok(Json(identity.into_claims()))
/// }
/// ```
///
/// Whether a given route is protected is a routing decision; see the route
/// modules for which handlers take this extractor.
#[derive(Debug, Clone)]
pub struct Identity {
    claims: Document,
}

impl Identity {
    /// The identity's email, when the signed claim carried one.
    pub fn email(&self) -> Option<&str> {
        self.claims.get("email").and_then(|v| v.as_str())
    }

    /// The full decoded claim, exactly as it was signed at issuance.
    pub fn into_claims(self) -> Document {
        self.claims
    }
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or(AuthError::Missing)?;

        let claims = verify_token(&token, &state.config.jwt)?;

        Ok(Identity { claims })
    }
}

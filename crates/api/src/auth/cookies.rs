//! Binding a session token to the HTTP `token` cookie.
//!
//! The cookie is HTTP-only always; in production it is additionally
//! `Secure` with `SameSite=None` (the SPA is served from another origin),
//! while development uses `SameSite=Strict` over plain HTTP. `clear` must
//! use the exact attribute set `attach` used -- browsers silently ignore a
//! removal whose attributes do not match the stored cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::config::Environment;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// The environment-dependent attribute set shared by set and clear.
fn session_cookie(value: String, env: Environment) -> Cookie<'static> {
    let same_site = if env.is_production() {
        SameSite::None
    } else {
        SameSite::Strict
    };

    Cookie::build((SESSION_COOKIE, value))
        .http_only(true)
        .secure(env.is_production())
        .same_site(same_site)
        .path("/")
        .build()
}

/// Set the session cookie carrying `token` on the response jar.
pub fn attach(jar: CookieJar, token: String, env: Environment) -> CookieJar {
    jar.add(session_cookie(token, env))
}

/// Remove the session cookie: empty value, `Max-Age: 0`, and the same
/// attributes `attach` used.
pub fn clear(jar: CookieJar, env: Environment) -> CookieJar {
    let mut cookie = session_cookie(String::new(), env);
    cookie.set_max_age(Duration::ZERO);
    jar.add(cookie)
}

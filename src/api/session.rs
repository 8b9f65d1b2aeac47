//! Username session cookie
//!
//! The cookie holds the raw username: it is not signed and never expires server-side, so
//! anyone can claim any name by setting it.

use crate::api::error::AppError;
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;

pub const SESSION_COOKIE: &str = "username";

/// The username of the current session. Rejects with 401 when the cookie is missing or empty;
/// extract `Option<SessionUser>` to handle that case instead.
#[derive(Debug)]
pub struct SessionUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, AppError> {
        CookieJar::from_headers(&parts.headers)
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value())
            .filter(|username| !username.is_empty())
            .map(|username| SessionUser(username.to_owned()))
            .ok_or(AppError::NotLoggedIn)
    }
}

/// Session-lifetime cookie scoped to the whole site.
pub fn session_cookie(username: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, username)).path("/").build()
}

/// `Set-Cookie` value starting a session for `username`.
///
/// The username is written verbatim when it consists of RFC 6265 cookie-octets. Anything
/// else (spaces, `;`, `"`, `%`, non-ASCII) cannot appear raw in the header and is
/// percent-encoded instead; `SessionUser` decodes it back to the same string.
pub fn set_cookie_header(username: String) -> Result<HeaderValue, InvalidHeaderValue> {
    let cookie = session_cookie(username);
    if cookie.value().bytes().all(is_raw_octet) {
        HeaderValue::from_str(&cookie.to_string())
    } else {
        HeaderValue::from_str(&cookie.encoded().to_string())
    }
}

// `%` is a cookie-octet, but reads percent-decode, so it has to be escaped.
fn is_raw_octet(b: u8) -> bool {
    matches!(b, 0x21 | 0x23..=0x24 | 0x26..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
}

//! Defines functions for carrying the session in a private cookie.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use time::{Duration, OffsetDateTime};

use crate::{Error, auth::Session};

/// The name of the cookie that carries the session snapshot.
pub const SESSION_COOKIE: &str = "money-tracker-session";

/// How long a session cookie stays valid after it is issued.
pub const SESSION_COOKIE_DURATION: Duration = Duration::days(7);

/// Add the session cookie to the cookie jar, indicating that a user is logged in.
///
/// The cookie holds the JSON-encoded session snapshot and expires
/// [SESSION_COOKIE_DURATION] from now. `secure` should be enabled when the
/// app is served over HTTPS and is injected so that local deployments keep
/// working without TLS.
///
/// Returns the cookie jar with the cookie added.
///
/// # Errors
///
/// Returns an [Error::Json] if the session cannot be serialized.
pub fn set_session_cookie(
    jar: PrivateCookieJar,
    session: &Session,
    secure: bool,
) -> Result<PrivateCookieJar, Error> {
    let session_json = serde_json::to_string(session)?;

    Ok(jar.add(
        Cookie::build((SESSION_COOKIE, session_json))
            .expires(OffsetDateTime::now_utc() + SESSION_COOKIE_DURATION)
            .max_age(SESSION_COOKIE_DURATION)
            .http_only(true)
            .path("/")
            .same_site(SameSite::Strict)
            .secure(secure),
    ))
}

/// Set the session cookie to an invalid value and set its max age to zero,
/// which should delete the cookie on the client side.
pub fn remove_session_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, "deleted"))
            .expires(OffsetDateTime::UNIX_EPOCH)
            .max_age(Duration::ZERO)
            .http_only(true)
            .path("/")
            .same_site(SameSite::Strict)
            .secure(true),
    )
}

/// Parse the session snapshot out of the cookie jar.
///
/// Fails open to "unauthenticated": an absent cookie or one that does not
/// hold valid session JSON yields `None`, never an error.
pub fn get_session(jar: &PrivateCookieJar) -> Option<Session> {
    let cookie = jar.get(SESSION_COOKIE)?;

    match serde_json::from_str(cookie.value()) {
        Ok(session) => Some(session),
        Err(error) => {
            tracing::warn!("Could not parse session cookie: {}", error);
            None
        }
    }
}

//! Updating user settings, including the session cookie refresh.

use axum_extra::extract::PrivateCookieJar;

use crate::{
    Error,
    auth::{
        Session,
        cookie::{get_session, set_session_cookie},
    },
    models::{UserID, UserSettings},
    stores::UserStore,
};

/// Persist new display preferences for a user.
///
/// If the session in `jar` belongs to the updated user, the session cookie is
/// reissued with the new settings so that the current browser does not keep a
/// stale snapshot. Other active sessions for the same user remain stale until
/// their next log-in.
///
/// Returns the (possibly updated) cookie jar and the saved settings.
///
/// # Errors
///
/// Returns [Error::UserNotFound] if no user with `user_id` exists.
pub fn update_user_settings(
    user_store: &mut impl UserStore,
    jar: PrivateCookieJar,
    user_id: UserID,
    settings: UserSettings,
    cookie_secure: bool,
) -> Result<(PrivateCookieJar, UserSettings), Error> {
    let user = user_store.update_settings(user_id, settings.clone())?;

    let jar = match get_session(&jar) {
        Some(session) if session.user_id == user_id => {
            let session = Session {
                settings: user.settings().cloned(),
                ..session
            };

            set_session_cookie(jar, &session, cookie_secure)?
        }
        _ => jar,
    };

    Ok((jar, settings))
}

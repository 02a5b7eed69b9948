//! Verifies user credentials and produces session snapshots.

use crate::{Error, auth::Session, stores::UserStore};

/// Authenticate a user by email and password.
///
/// On success a fresh [Session] snapshot is returned; place it in the cookie
/// jar with [set_session_cookie](crate::auth::set_session_cookie).
///
/// # Errors
///
/// Returns [Error::InvalidCredentials] if no user has the given email or the
/// password does not match. The two cases are deliberately indistinguishable
/// to the caller.
pub fn log_in(user_store: &impl UserStore, email: &str, password: &str) -> Result<Session, Error> {
    let user = match user_store.get_by_email(email) {
        Ok(user) => user,
        Err(Error::UserNotFound) => return Err(Error::InvalidCredentials),
        Err(error) => return Err(error),
    };

    if !user.password_hash().verify(password)? {
        return Err(Error::InvalidCredentials);
    }

    Ok(Session::for_user(&user))
}

//! Implements a struct that holds the state an embedding axum app needs.

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use time::Duration;

use crate::{
    auth::{AuthState, SESSION_COOKIE_DURATION},
    stores::{CategoryStore, TransactionStore, UserStore},
};

/// The state of the application.
///
/// Generic over the store implementations so that request handlers and tests
/// can be written against the store traits.
#[derive(Debug, Clone)]
pub struct AppState<C, T, U> {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,

    /// The duration for which session cookies are valid.
    pub cookie_duration: Duration,

    /// Whether session cookies should only be sent over HTTPS. Enable in
    /// production deployments.
    pub cookie_secure: bool,

    /// The store for transaction categories.
    pub category_store: C,

    /// The store for transactions.
    pub transaction_store: T,

    /// The store for users.
    pub user_store: U,
}

impl<C, T, U> AppState<C, T, U>
where
    C: CategoryStore,
    T: TransactionStore,
    U: UserStore,
{
    /// Create a new [AppState].
    ///
    /// The cookie key is derived from `cookie_secret`; the data directory
    /// should already have been initialized via
    /// [DataDir::initialize](crate::stores::json::DataDir::initialize).
    pub fn new(
        cookie_secret: &str,
        cookie_secure: bool,
        category_store: C,
        transaction_store: T,
        user_store: U,
    ) -> Self {
        Self {
            cookie_key: create_cookie_key(cookie_secret),
            cookie_duration: SESSION_COOKIE_DURATION,
            cookie_secure,
            category_store,
            transaction_store,
            user_store,
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl<C: Clone, T: Clone, U: Clone> FromRef<AppState<C, T, U>> for Key {
    fn from_ref(state: &AppState<C, T, U>) -> Self {
        state.cookie_key.clone()
    }
}

impl<C: Clone, T: Clone, U: Clone> FromRef<AppState<C, T, U>> for AuthState {
    fn from_ref(state: &AppState<C, T, U>) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
        }
    }
}

/// Create a signing key for cookies from a `secret` string.
pub fn create_cookie_key(secret: &str) -> Key {
    let hash = Sha512::digest(secret);

    Key::from(&hash)
}

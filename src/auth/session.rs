//! Defines the session snapshot carried in the session cookie.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{User, UserID, UserSettings};

/// A snapshot of a user taken at log-in time.
///
/// The session is stored client-side in the session cookie; there is no
/// server-side session table, so the cookie *is* the session. If the user
/// record changes elsewhere the snapshot is not reconciled, except when the
/// user updates their settings from the browser holding this cookie.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// An opaque identifier for this session.
    pub id: Uuid,
    /// The ID of the logged-in user.
    pub user_id: UserID,
    /// The user's display name at log-in time.
    pub name: String,
    /// The user's email at log-in time.
    pub email: String,
    /// The user's display preferences at log-in time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<UserSettings>,
}

impl Session {
    /// Take a fresh session snapshot of `user`.
    pub fn for_user(user: &User) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user.id(),
            name: user.name().to_owned(),
            email: user.email().to_owned(),
            settings: user.settings().cloned(),
        }
    }
}

//! This file defines a user of the application and its supporting types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::PasswordHash;

/// The currency symbol assigned to newly registered users.
pub const DEFAULT_CURRENCY: &str = "$";

/// A newtype wrapper for user IDs.
///
/// This helps disambiguate user IDs from other types of IDs, leading to better compile time
/// errors, and more flexible generics that can have distinct implementations for multiple ID
/// types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserID(Uuid);

impl UserID {
    /// Create a user ID from an existing UUID.
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Create a fresh, random user ID.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for UserID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Per-user display preferences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// The currency symbol to prefix amounts with, e.g. "$".
    pub currency: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_owned(),
        }
    }
}

/// A user of the application.
///
/// The password is stored as a salted hash and is serialized under the
/// `password` field of the user collection on disk. It is never copied into
/// [Session](crate::auth::Session) snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserID,
    name: String,
    email: String,
    #[serde(rename = "password")]
    password_hash: PasswordHash,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    settings: Option<UserSettings>,
}

impl User {
    /// Create a new user.
    pub fn new(
        id: UserID,
        name: String,
        email: String,
        password_hash: PasswordHash,
        settings: Option<UserSettings>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            settings,
        }
    }

    /// The user's ID.
    pub fn id(&self) -> UserID {
        self.id
    }

    /// The user's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The email address associated with the user.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The user's password hash.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// The user's display preferences, if any have been saved.
    pub fn settings(&self) -> Option<&UserSettings> {
        self.settings.as_ref()
    }

    /// Replace the user's display preferences.
    pub fn set_settings(&mut self, settings: UserSettings) {
        self.settings = Some(settings);
    }
}

#[cfg(test)]
mod user_tests {
    use crate::models::{PasswordHash, User, UserID, UserSettings};

    #[test]
    fn serialized_user_uses_password_field_name() {
        let user = User::new(
            UserID::random(),
            "Ava".to_owned(),
            "ava@example.com".to_owned(),
            PasswordHash::new_unchecked("nothashed"),
            Some(UserSettings::default()),
        );

        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["password"], "nothashed");
        assert_eq!(json["settings"]["currency"], "$");
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn deserializes_user_without_settings() {
        let json = r#"{
            "id": "5f9f1a1a-4c84-4fdc-9a3b-86b3a7c00b5e",
            "name": "Ava",
            "email": "ava@example.com",
            "password": "nothashed"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.name(), "Ava");
        assert!(user.settings().is_none());
    }
}

//! Defines the user store trait.

use crate::{
    Error,
    models::{PasswordHash, User, UserID, UserSettings},
};

/// Handles the creation and retrieval of users.
pub trait UserStore {
    /// Create a new user with the default display preferences.
    ///
    /// # Errors
    ///
    /// Returns [Error::DuplicateUser] if a user with the given email already
    /// exists.
    fn create(&mut self, name: &str, email: &str, password_hash: PasswordHash)
    -> Result<User, Error>;

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if no user with the given ID exists.
    fn get(&self, id: UserID) -> Result<User, Error>;

    /// Get a user by their email.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if no user with the given email exists.
    fn get_by_email(&self, email: &str) -> Result<User, Error>;

    /// Replace a user's display preferences and return the updated user.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if no user with the given ID exists.
    fn update_settings(&mut self, id: UserID, settings: UserSettings) -> Result<User, Error>;
}

//! Implements a JSON file backed user store.

use std::sync::{Arc, Mutex};

use crate::{
    Error,
    models::{PasswordHash, User, UserID, UserSettings},
    stores::{UserStore, json::DataDir},
};

/// Creates and retrieves users to/from the `users.json` collection.
#[derive(Debug, Clone)]
pub struct JsonUserStore {
    data: Arc<Mutex<DataDir>>,
}

impl JsonUserStore {
    /// Create a new user store over a shared data directory.
    pub fn new(data: Arc<Mutex<DataDir>>) -> Self {
        Self { data }
    }
}

impl UserStore for JsonUserStore {
    /// Create a user and append it to the user collection.
    ///
    /// New users start with the default display preferences.
    ///
    /// # Panics
    ///
    /// Panics if the data directory lock is poisoned.
    ///
    /// # Errors
    ///
    /// Returns [Error::DuplicateUser] if the email is already in use.
    fn create(
        &mut self,
        name: &str,
        email: &str,
        password_hash: PasswordHash,
    ) -> Result<User, Error> {
        let data = self.data.lock().unwrap();
        let mut users: Vec<User> = data.load(&data.users_path());

        if users.iter().any(|user| user.email() == email) {
            return Err(Error::DuplicateUser);
        }

        let user = User::new(
            UserID::random(),
            name.to_owned(),
            email.to_owned(),
            password_hash,
            Some(UserSettings::default()),
        );

        users.push(user.clone());
        data.save(&data.users_path(), &users)?;

        Ok(user)
    }

    /// Get the user that has the specified `id`.
    ///
    /// # Panics
    ///
    /// Panics if the data directory lock is poisoned.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if there is no user with the specified ID.
    fn get(&self, id: UserID) -> Result<User, Error> {
        let data = self.data.lock().unwrap();
        let users: Vec<User> = data.load(&data.users_path());

        users
            .into_iter()
            .find(|user| user.id() == id)
            .ok_or(Error::UserNotFound)
    }

    /// Get the user that has the specified `email` address.
    ///
    /// # Panics
    ///
    /// Panics if the data directory lock is poisoned.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if there is no user with the specified email.
    fn get_by_email(&self, email: &str) -> Result<User, Error> {
        let data = self.data.lock().unwrap();
        let users: Vec<User> = data.load(&data.users_path());

        users
            .into_iter()
            .find(|user| user.email() == email)
            .ok_or(Error::UserNotFound)
    }

    /// Replace the display preferences of the user with `id` and rewrite the collection.
    ///
    /// # Panics
    ///
    /// Panics if the data directory lock is poisoned.
    ///
    /// # Errors
    ///
    /// Returns [Error::UserNotFound] if there is no user with the specified ID.
    fn update_settings(&mut self, id: UserID, settings: UserSettings) -> Result<User, Error> {
        let data = self.data.lock().unwrap();
        let mut users: Vec<User> = data.load(&data.users_path());

        let user = users
            .iter_mut()
            .find(|user| user.id() == id)
            .ok_or(Error::UserNotFound)?;

        user.set_settings(settings);
        let updated_user = user.clone();
        data.save(&data.users_path(), &users)?;

        Ok(updated_user)
    }
}

#[cfg(test)]
mod user_store_tests {
    use std::sync::{Arc, Mutex};

    use tempfile::{TempDir, tempdir};

    use crate::{
        Error,
        models::{PasswordHash, UserID, UserSettings},
        stores::{UserStore, json::DataDir},
    };

    use super::JsonUserStore;

    fn get_store() -> (TempDir, JsonUserStore) {
        let temp_dir = tempdir().unwrap();
        let data_dir = DataDir::new(temp_dir.path());
        data_dir.initialize().unwrap();

        (temp_dir, JsonUserStore::new(Arc::new(Mutex::new(data_dir))))
    }

    #[test]
    fn create_user_succeeds_with_default_settings() {
        let (_temp_dir, mut store) = get_store();

        let user = store
            .create("Ava", "ava@example.com", PasswordHash::new_unchecked("x"))
            .unwrap();

        assert_eq!(user.name(), "Ava");
        assert_eq!(user.email(), "ava@example.com");
        assert_eq!(user.settings(), Some(&UserSettings::default()));
    }

    #[test]
    fn create_user_fails_on_duplicate_email() {
        let (_temp_dir, mut store) = get_store();

        assert!(
            store
                .create("Ava", "ava@example.com", PasswordHash::new_unchecked("x"))
                .is_ok()
        );

        assert_eq!(
            store.create("Eve", "ava@example.com", PasswordHash::new_unchecked("y")),
            Err(Error::DuplicateUser)
        );
    }

    #[test]
    fn get_user_fails_with_non_existent_id() {
        let (_temp_dir, store) = get_store();

        assert_eq!(store.get(UserID::random()), Err(Error::UserNotFound));
    }

    #[test]
    fn get_user_succeeds_with_existing_id() {
        let (_temp_dir, mut store) = get_store();
        let created_user = store
            .create("Ava", "ava@example.com", PasswordHash::new_unchecked("x"))
            .unwrap();

        let retrieved_user = store.get(created_user.id()).unwrap();

        assert_eq!(retrieved_user, created_user);
    }

    #[test]
    fn get_user_by_email_succeeds_with_existing_email() {
        let (_temp_dir, mut store) = get_store();
        let created_user = store
            .create("Ava", "ava@example.com", PasswordHash::new_unchecked("x"))
            .unwrap();

        let retrieved_user = store.get_by_email("ava@example.com").unwrap();

        assert_eq!(retrieved_user, created_user);
    }

    #[test]
    fn get_user_by_email_fails_with_non_existent_email() {
        let (_temp_dir, store) = get_store();

        assert_eq!(
            store.get_by_email("nobody@example.com"),
            Err(Error::UserNotFound)
        );
    }

    #[test]
    fn update_settings_persists_new_currency() {
        let (_temp_dir, mut store) = get_store();
        let user = store
            .create("Ava", "ava@example.com", PasswordHash::new_unchecked("x"))
            .unwrap();
        let settings = UserSettings {
            currency: "€".to_owned(),
        };

        let updated_user = store.update_settings(user.id(), settings.clone()).unwrap();

        assert_eq!(updated_user.settings(), Some(&settings));
        assert_eq!(store.get(user.id()).unwrap().settings(), Some(&settings));
    }

    #[test]
    fn update_settings_fails_with_non_existent_id() {
        let (_temp_dir, mut store) = get_store();

        let result = store.update_settings(
            UserID::random(),
            UserSettings {
                currency: "€".to_owned(),
            },
        );

        assert_eq!(result, Err(Error::UserNotFound));
    }
}

//! The flat-file data directory backing the JSON stores.
//!
//! Each collection is a whole JSON array in a single file: `users.json` at the
//! root, and `categories.json` plus `transactions.json` in a per-user
//! directory. Every store operation loads the full collection, mutates it in
//! memory, and rewrites the whole file. The stores share one
//! `Arc<Mutex<DataDir>>` so read-modify-write cycles within a process
//! serialize instead of losing updates.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, models::UserID};

const USERS_FILE: &str = "users.json";
const CATEGORIES_FILE: &str = "categories.json";
const TRANSACTIONS_FILE: &str = "transactions.json";

/// The root directory that holds the application's JSON collections.
#[derive(Debug)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Create a handle to the data directory at `root`.
    ///
    /// No filesystem access happens here; call [DataDir::initialize] at
    /// startup to create the directory and the user collection.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the data directory and an empty user collection if they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an [Error::Io] if the directory or the user collection could
    /// not be created.
    pub fn initialize(&self) -> Result<(), Error> {
        fs::create_dir_all(&self.root)?;

        if !self.users_path().exists() {
            self.save::<crate::models::User>(&self.users_path(), &[])?;
        }

        Ok(())
    }

    pub(crate) fn users_path(&self) -> PathBuf {
        self.root.join(USERS_FILE)
    }

    pub(crate) fn categories_path(&self, user_id: UserID) -> PathBuf {
        self.root.join(user_id.to_string()).join(CATEGORIES_FILE)
    }

    pub(crate) fn transactions_path(&self, user_id: UserID) -> PathBuf {
        self.root.join(user_id.to_string()).join(TRANSACTIONS_FILE)
    }

    /// Load a whole collection from `path`.
    ///
    /// A missing file means the collection has no data yet and an unreadable
    /// or unparsable file is treated the same way, so this never fails. Parse
    /// failures are logged since they indicate a file that was edited or
    /// corrupted outside the application.
    pub(crate) fn load<T: DeserializeOwned>(&self, path: &Path) -> Vec<T> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&contents) {
            Ok(items) => items,
            Err(error) => {
                tracing::warn!(
                    "Could not parse collection at {}, treating it as empty: {}",
                    path.display(),
                    error
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the whole collection at `path`, pretty-printed.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns an [Error::Io] if the file could not be written or an
    /// [Error::Json] if the collection could not be serialized.
    pub(crate) fn save<T: Serialize>(&self, path: &Path, items: &[T]) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_vec_pretty(items)?;
        fs::write(path, contents)?;

        Ok(())
    }
}

//! Implements a JSON file backed category store.

use std::sync::{Arc, Mutex};

use crate::{
    Error,
    models::{Category, CategoryID, CategoryName, CategoryPatch, TransactionType, UserID},
    stores::{CategoryStore, json::DataDir},
};

/// Creates and retrieves transaction categories to/from a user's `categories.json` collection.
#[derive(Debug, Clone)]
pub struct JsonCategoryStore {
    data: Arc<Mutex<DataDir>>,
}

impl JsonCategoryStore {
    /// Create a new category store over a shared data directory.
    pub fn new(data: Arc<Mutex<DataDir>>) -> Self {
        Self { data }
    }
}

impl CategoryStore for JsonCategoryStore {
    /// Create a category and append it to the user's collection.
    ///
    /// # Panics
    ///
    /// Panics if the data directory lock is poisoned.
    fn create(
        &mut self,
        user_id: UserID,
        name: CategoryName,
        transaction_type: TransactionType,
    ) -> Result<Category, Error> {
        let data = self.data.lock().unwrap();
        let path = data.categories_path(user_id);
        let mut categories: Vec<Category> = data.load(&path);

        let category = Category {
            id: CategoryID::random(),
            name,
            transaction_type,
        };

        categories.push(category.clone());
        data.save(&path, &categories)?;

        Ok(category)
    }

    /// Retrieve the categories in the user's collection.
    ///
    /// An empty vector is returned if the user has no category file yet.
    ///
    /// # Panics
    ///
    /// Panics if the data directory lock is poisoned.
    fn get_by_user(&self, user_id: UserID) -> Result<Vec<Category>, Error> {
        let data = self.data.lock().unwrap();

        Ok(data.load(&data.categories_path(user_id)))
    }

    /// Merge `patch` into the category with `category_id` and rewrite the collection.
    ///
    /// # Panics
    ///
    /// Panics if the data directory lock is poisoned.
    ///
    /// # Errors
    ///
    /// Returns [Error::NotFound] if the user has no category with the given ID.
    fn update(
        &mut self,
        user_id: UserID,
        category_id: CategoryID,
        patch: CategoryPatch,
    ) -> Result<Category, Error> {
        let data = self.data.lock().unwrap();
        let path = data.categories_path(user_id);
        let mut categories: Vec<Category> = data.load(&path);

        let category = categories
            .iter_mut()
            .find(|category| category.id == category_id)
            .ok_or(Error::NotFound)?;

        if let Some(name) = patch.name {
            category.name = name;
        }

        if let Some(transaction_type) = patch.transaction_type {
            category.transaction_type = transaction_type;
        }

        let updated_category = category.clone();
        data.save(&path, &categories)?;

        Ok(updated_category)
    }

    /// Delete the category with `category_id` and rewrite the collection.
    ///
    /// Returns `false` without touching the file if the ID is absent. Does
    /// not cascade to transactions.
    ///
    /// # Panics
    ///
    /// Panics if the data directory lock is poisoned.
    fn delete(&mut self, user_id: UserID, category_id: CategoryID) -> Result<bool, Error> {
        let data = self.data.lock().unwrap();
        let path = data.categories_path(user_id);
        let mut categories: Vec<Category> = data.load(&path);

        let count_before = categories.len();
        categories.retain(|category| category.id != category_id);

        if categories.len() == count_before {
            return Ok(false);
        }

        data.save(&path, &categories)?;

        Ok(true)
    }
}

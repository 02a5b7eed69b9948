//! Defines the category store trait.

use crate::{
    Error,
    models::{Category, CategoryID, CategoryName, CategoryPatch, TransactionType, UserID},
};

/// Creates and retrieves the categories that label a user's transactions.
pub trait CategoryStore {
    /// Create a new category and add it to the user's collection.
    fn create(
        &mut self,
        user_id: UserID,
        name: CategoryName,
        transaction_type: TransactionType,
    ) -> Result<Category, Error>;

    /// Get all categories for a given user.
    ///
    /// Returns an empty vector if the user has no categories yet.
    fn get_by_user(&self, user_id: UserID) -> Result<Vec<Category>, Error>;

    /// Merge `patch` into the category with `category_id` and return the updated category.
    ///
    /// # Errors
    ///
    /// Returns [Error::NotFound] if the user has no category with the given
    /// ID. The stored collection is not modified in that case.
    fn update(
        &mut self,
        user_id: UserID,
        category_id: CategoryID,
        patch: CategoryPatch,
    ) -> Result<Category, Error>;

    /// Delete the category with `category_id` from the user's collection.
    ///
    /// Returns `false` if the user has no category with the given ID, `true`
    /// otherwise. Transactions referencing the deleted category are left in
    /// place and resolve as uncategorized.
    fn delete(&mut self, user_id: UserID, category_id: CategoryID) -> Result<bool, Error>;
}

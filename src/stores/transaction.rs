//! Defines the transaction store trait.

use crate::{
    Error,
    models::{NewTransaction, Transaction, UserID},
};

/// Handles the creation and retrieval of transactions.
pub trait TransactionStore {
    /// Create the empty transaction collection for a newly registered user.
    fn initialize_user(&mut self, user_id: UserID) -> Result<(), Error>;

    /// Create a new transaction in the user's collection.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [Error::NonPositiveAmount] if the amount is zero or negative,
    /// - [Error::CategoryTypeMismatch] if the referenced category exists and
    ///   its type differs from the transaction's type.
    fn create(&mut self, user_id: UserID, transaction: NewTransaction)
    -> Result<Transaction, Error>;

    /// Get all transactions for a given user.
    ///
    /// Returns an empty vector if the user has no transactions yet.
    fn get_by_user(&self, user_id: UserID) -> Result<Vec<Transaction>, Error>;
}

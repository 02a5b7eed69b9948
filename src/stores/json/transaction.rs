//! Implements a JSON file backed transaction store.

use std::sync::{Arc, Mutex};

use crate::{
    Error,
    models::{Category, NewTransaction, Transaction, TransactionID, UserID},
    stores::{TransactionStore, json::DataDir},
};

/// Creates and retrieves transactions to/from a user's `transactions.json` collection.
#[derive(Debug, Clone)]
pub struct JsonTransactionStore {
    data: Arc<Mutex<DataDir>>,
}

impl JsonTransactionStore {
    /// Create a new transaction store over a shared data directory.
    pub fn new(data: Arc<Mutex<DataDir>>) -> Self {
        Self { data }
    }
}

impl TransactionStore for JsonTransactionStore {
    /// Write the empty transaction collection for a newly registered user.
    ///
    /// # Panics
    ///
    /// Panics if the data directory lock is poisoned.
    fn initialize_user(&mut self, user_id: UserID) -> Result<(), Error> {
        let data = self.data.lock().unwrap();

        data.save::<Transaction>(&data.transactions_path(user_id), &[])
    }

    /// Create a transaction and append it to the user's collection.
    ///
    /// The transaction type is checked against the referenced category when
    /// that category exists; a dangling category ID is tolerated since
    /// category deletion does not cascade.
    ///
    /// # Panics
    ///
    /// Panics if the data directory lock is poisoned.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [Error::NonPositiveAmount] if the amount is zero or negative,
    /// - [Error::CategoryTypeMismatch] if the referenced category exists and
    ///   its type differs from the transaction's type.
    fn create(
        &mut self,
        user_id: UserID,
        transaction: NewTransaction,
    ) -> Result<Transaction, Error> {
        if transaction.amount <= 0.0 {
            return Err(Error::NonPositiveAmount(transaction.amount));
        }

        let data = self.data.lock().unwrap();

        let categories: Vec<Category> = data.load(&data.categories_path(user_id));
        let category = categories
            .iter()
            .find(|category| category.id == transaction.category_id);

        if let Some(category) = category {
            if category.transaction_type != transaction.transaction_type {
                return Err(Error::CategoryTypeMismatch);
            }
        }

        let path = data.transactions_path(user_id);
        let mut transactions: Vec<Transaction> = data.load(&path);

        let transaction = Transaction {
            id: TransactionID::random(),
            amount: transaction.amount,
            description: transaction.description,
            date: transaction.date,
            category_id: transaction.category_id,
            transaction_type: transaction.transaction_type,
        };

        transactions.push(transaction.clone());
        data.save(&path, &transactions)?;

        Ok(transaction)
    }

    /// Retrieve the transactions in the user's collection.
    ///
    /// An empty vector is returned if the user has no transaction file yet.
    ///
    /// # Panics
    ///
    /// Panics if the data directory lock is poisoned.
    fn get_by_user(&self, user_id: UserID) -> Result<Vec<Transaction>, Error> {
        let data = self.data.lock().unwrap();

        Ok(data.load(&data.transactions_path(user_id)))
    }
}

#[cfg(test)]
mod transaction_store_tests {
    use std::{
        fs,
        sync::{Arc, Mutex},
    };

    use tempfile::{TempDir, tempdir};
    use time::macros::date;

    use crate::{
        Error,
        models::{CategoryID, CategoryName, NewTransaction, TransactionType, UserID},
        stores::{CategoryStore, TransactionStore, json::DataDir},
    };

    use crate::stores::json::JsonCategoryStore;

    use super::JsonTransactionStore;

    fn get_stores() -> (TempDir, JsonCategoryStore, JsonTransactionStore) {
        let temp_dir = tempdir().unwrap();
        let data_dir = DataDir::new(temp_dir.path());
        data_dir.initialize().unwrap();
        let data = Arc::new(Mutex::new(data_dir));

        (
            temp_dir,
            JsonCategoryStore::new(data.clone()),
            JsonTransactionStore::new(data.clone()),
        )
    }

    fn new_transaction(category_id: CategoryID) -> NewTransaction {
        NewTransaction {
            amount: 42.5,
            description: "Weekly shop".to_owned(),
            date: date!(2024 - 06 - 15),
            category_id,
            transaction_type: TransactionType::Expense,
        }
    }

    #[test]
    fn initialize_user_writes_empty_collection() {
        let (temp_dir, _category_store, mut store) = get_stores();
        let user_id = UserID::random();

        store.initialize_user(user_id).unwrap();

        let path = temp_dir
            .path()
            .join(user_id.to_string())
            .join("transactions.json");
        assert_eq!(fs::read_to_string(path).unwrap(), "[]");
    }

    #[test]
    fn create_transaction_round_trips_field_values() {
        let (_temp_dir, _category_store, mut store) = get_stores();
        let user_id = UserID::random();
        let new_transaction = new_transaction(CategoryID::random());

        let created = store.create(user_id, new_transaction.clone()).unwrap();
        let retrieved = store.get_by_user(user_id).unwrap();

        assert_eq!(retrieved, vec![created.clone()]);
        assert_eq!(created.amount, new_transaction.amount);
        assert_eq!(created.description, new_transaction.description);
        assert_eq!(created.date, new_transaction.date);
        assert_eq!(created.category_id, new_transaction.category_id);
        assert_eq!(created.transaction_type, new_transaction.transaction_type);
    }

    #[test]
    fn created_transactions_get_unique_ids() {
        let (_temp_dir, _category_store, mut store) = get_stores();
        let user_id = UserID::random();
        let new_transaction = new_transaction(CategoryID::random());

        let first = store.create(user_id, new_transaction.clone()).unwrap();
        let second = store.create(user_id, new_transaction).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.get_by_user(user_id).unwrap().len(), 2);
    }

    #[test]
    fn get_by_user_returns_empty_for_missing_file() {
        let (_temp_dir, _category_store, store) = get_stores();

        let transactions = store.get_by_user(UserID::random()).unwrap();

        assert!(transactions.is_empty());
    }

    #[test]
    fn create_transaction_rejects_non_positive_amount() {
        let (_temp_dir, _category_store, mut store) = get_stores();
        let user_id = UserID::random();
        let mut new_transaction = new_transaction(CategoryID::random());
        new_transaction.amount = 0.0;

        let result = store.create(user_id, new_transaction);

        assert_eq!(result, Err(Error::NonPositiveAmount(0.0)));
        assert!(store.get_by_user(user_id).unwrap().is_empty());
    }

    #[test]
    fn create_transaction_rejects_type_mismatch_with_existing_category() {
        let (_temp_dir, mut category_store, mut store) = get_stores();
        let user_id = UserID::random();
        let category = category_store
            .create(
                user_id,
                CategoryName::new_unchecked("Salary"),
                TransactionType::Income,
            )
            .unwrap();
        let new_transaction = new_transaction(category.id);

        let result = store.create(user_id, new_transaction);

        assert_eq!(result, Err(Error::CategoryTypeMismatch));
    }

    #[test]
    fn create_transaction_tolerates_dangling_category_id() {
        let (_temp_dir, _category_store, mut store) = get_stores();
        let user_id = UserID::random();

        let result = store.create(user_id, new_transaction(CategoryID::random()));

        assert!(result.is_ok());
    }
}

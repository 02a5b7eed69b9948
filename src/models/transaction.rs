//! This file defines the type `Transaction`, the core type of the money tracking part of the
//! application.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::models::CategoryID;

/// A newtype wrapper for transaction IDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionID(Uuid);

impl TransactionID {
    /// Create a transaction ID from an existing UUID.
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Create a fresh, random transaction ID.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for TransactionID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Whether money was earned or spent.
///
/// Shared by transactions and categories; a transaction's type must match the
/// type of the category it references.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, e.g. wages.
    Income,
    /// Money going out, e.g. groceries.
    Expense,
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "income"),
            TransactionType::Expense => write!(f, "expense"),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Owned by one user and stored in that user's transaction collection. The
/// `category_id` may refer to a category that has since been deleted; such
/// transactions are displayed as uncategorized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionID,
    /// The amount of money spent or earned, always positive.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    pub date: Date,
    /// The user-defined category that describes the transaction.
    pub category_id: CategoryID,
    /// Whether the transaction records income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// The data needed to create a new transaction.
///
/// The ID is generated by the store when the transaction is created.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    /// The amount of money spent or earned, must be positive.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    pub date: Date,
    /// The user-defined category that describes the transaction.
    pub category_id: CategoryID,
    /// Whether the transaction records income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

#[cfg(test)]
mod transaction_tests {
    use time::macros::date;

    use crate::models::{CategoryID, Transaction, TransactionID, TransactionType};

    #[test]
    fn serializes_with_camel_case_field_names_and_iso_date() {
        let transaction = Transaction {
            id: TransactionID::random(),
            amount: 42.5,
            description: "Weekly shop".to_owned(),
            date: date!(2024 - 06 - 15),
            category_id: CategoryID::random(),
            transaction_type: TransactionType::Expense,
        };

        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(json["amount"], 42.5);
        assert_eq!(json["date"], "2024-06-15");
        assert_eq!(json["type"], "expense");
        assert!(json.get("categoryId").is_some());
        assert!(json.get("category_id").is_none());
    }

    #[test]
    fn deserializes_from_stored_json() {
        let json = r#"{
            "id": "0b5c3a62-94a5-4be4-9b3d-0a3bbd9c7d5a",
            "amount": 1250.0,
            "description": "June salary",
            "date": "2024-06-01",
            "categoryId": "8e7a3a9d-3c6f-45f1-b7b0-f2f2ddfdd9cd",
            "type": "income"
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(transaction.amount, 1250.0);
        assert_eq!(transaction.transaction_type, TransactionType::Income);
        assert_eq!(transaction.date, date!(2024 - 06 - 01));
    }
}

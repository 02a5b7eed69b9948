//! This file defines the `Category` type and the types needed to create and edit a category.
//! A category labels transactions, however a transaction may only have one category.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, models::TransactionType};

/// A newtype wrapper for category IDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryID(Uuid);

impl CategoryID {
    /// Create a category ID from an existing UUID.
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Create a fresh, random category ID.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for CategoryID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The name of a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    ///
    /// This function will return an error if `name` is an empty string.
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty
    /// invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A category for expenses and income, e.g., 'Groceries', 'Eating Out', 'Wages'.
///
/// Owned by exactly one user and stored in that user's category collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryID,
    /// The display name of the category.
    pub name: CategoryName,
    /// Whether the category labels income or expenses.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// A partial update to a category.
///
/// Fields that are `None` are left unchanged on the stored category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryPatch {
    /// The new display name, if it should change.
    pub name: Option<CategoryName>,
    /// The new transaction type, if it should change.
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
}


#[cfg(test)]
mod category_tests {
    use crate::models::{Category, CategoryID, CategoryName, TransactionType};

    #[test]
    fn serializes_type_field_in_lowercase() {
        let category = Category {
            id: CategoryID::random(),
            name: CategoryName::new_unchecked("Utilities"),
            transaction_type: TransactionType::Expense,
        };

        let json = serde_json::to_value(&category).unwrap();

        assert_eq!(json["type"], "expense");
        assert_eq!(json["name"], "Utilities");
    }
}

//! Monthly aggregation of transaction data.
//!
//! Provides the monthly view the dashboard is built from: the month's
//! transactions joined with their category names, income and expense totals,
//! and the per-category expense breakdown used for charts.

use std::collections::HashMap;

use serde::Serialize;
use time::{Date, Month};

use crate::{
    Error,
    models::{CategoryID, Transaction, TransactionID, TransactionType, UserID},
    stores::{CategoryStore, TransactionStore},
};

/// The display name used for transactions whose category no longer exists.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// A transaction joined with its category's display name.
///
/// Deleting a category does not cascade to transactions, so the category
/// lookup can miss; such transactions resolve to [UNCATEGORIZED_LABEL].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedTransaction {
    /// The ID of the transaction.
    pub id: TransactionID,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    pub date: Date,
    /// The category the transaction references, which may have been deleted.
    pub category_id: CategoryID,
    /// Whether the transaction records income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The display name of the category, or [UNCATEGORIZED_LABEL].
    pub category_name: String,
}

/// One month of a user's finances.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// The month's transactions, newest first.
    pub transactions: Vec<CategorizedTransaction>,
    /// The sum of the month's income amounts.
    pub income: f64,
    /// The sum of the month's expense amounts.
    pub expense: f64,
}

/// Build the monthly view of a user's finances.
///
/// Filters the user's transactions to those dated in `month`/`year`, sorts
/// them descending by date, totals income and expense amounts separately, and
/// joins each transaction with its category's display name.
pub fn get_monthly_data<C, T>(
    category_store: &C,
    transaction_store: &T,
    user_id: UserID,
    month: Month,
    year: i32,
) -> Result<MonthlySummary, Error>
where
    C: CategoryStore,
    T: TransactionStore,
{
    let transactions = transaction_store.get_by_user(user_id)?;
    let categories = category_store.get_by_user(user_id)?;

    let mut monthly_transactions: Vec<Transaction> = transactions
        .into_iter()
        .filter(|transaction| {
            transaction.date.month() == month && transaction.date.year() == year
        })
        .collect();

    monthly_transactions.sort_by(|a, b| b.date.cmp(&a.date));

    let income = sum_amounts(&monthly_transactions, TransactionType::Income);
    let expense = sum_amounts(&monthly_transactions, TransactionType::Expense);

    let category_names: HashMap<CategoryID, String> = categories
        .into_iter()
        .map(|category| (category.id, category.name.to_string()))
        .collect();

    let transactions = monthly_transactions
        .into_iter()
        .map(|transaction| {
            let category_name = category_names
                .get(&transaction.category_id)
                .cloned()
                .unwrap_or_else(|| UNCATEGORIZED_LABEL.to_owned());

            CategorizedTransaction {
                id: transaction.id,
                amount: transaction.amount,
                description: transaction.description,
                date: transaction.date,
                category_id: transaction.category_id,
                transaction_type: transaction.transaction_type,
                category_name,
            }
        })
        .collect();

    Ok(MonthlySummary {
        transactions,
        income,
        expense,
    })
}

/// Total a month's expenses per category name, largest first.
///
/// This is the series the presentation layer feeds to its category breakdown
/// chart. Ties are broken by name so the output is deterministic.
pub fn group_expenses_by_category(summary: &MonthlySummary) -> Vec<(String, f64)> {
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for transaction in summary
        .transactions
        .iter()
        .filter(|transaction| transaction.transaction_type == TransactionType::Expense)
    {
        *totals.entry(transaction.category_name.as_str()).or_insert(0.0) += transaction.amount;
    }

    let mut breakdown: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(name, total)| (name.to_owned(), total))
        .collect();

    breakdown.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    breakdown
}

fn sum_amounts(transactions: &[Transaction], transaction_type: TransactionType) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.transaction_type == transaction_type)
        .map(|transaction| transaction.amount)
        .sum()
}

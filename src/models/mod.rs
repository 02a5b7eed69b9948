//! The domain models of the application and their supporting types.

mod category;
mod password;
mod transaction;
mod user;

pub use category::{Category, CategoryID, CategoryName, CategoryPatch};
pub use password::PasswordHash;
pub use transaction::{NewTransaction, Transaction, TransactionID, TransactionType};
pub use user::{DEFAULT_CURRENCY, User, UserID, UserSettings};

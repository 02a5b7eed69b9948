//! Registration of new users and provisioning of their starter data.

use serde::Serialize;

use crate::{
    Error,
    models::{CategoryName, PasswordHash, TransactionType, UserID},
    stores::{CategoryStore, TransactionStore, UserStore},
};

/// The categories every new user starts out with.
const STARTER_CATEGORIES: [(&str, TransactionType); 6] = [
    ("Food", TransactionType::Expense),
    ("Transportation", TransactionType::Expense),
    ("Entertainment", TransactionType::Expense),
    ("Utilities", TransactionType::Expense),
    ("Salary", TransactionType::Income),
    ("Gifts", TransactionType::Income),
];

/// The public fields of a freshly registered user.
///
/// This is what registration hands back to the presentation layer; the
/// password hash stays inside the store.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisteredUser {
    /// The generated ID of the new user.
    pub id: UserID,
    /// The user's display name.
    pub name: String,
    /// The user's email address.
    pub email: String,
}

/// Register a new user.
///
/// Hashes the password, creates the user with the default currency, and
/// provisions the user's data: the starter category set (four expense and two
/// income categories) and an empty transaction collection.
///
/// # Errors
///
/// Returns:
/// - [Error::DuplicateUser] if a user with `email` already exists,
/// - [Error::HashingError] if the password could not be hashed.
pub fn register_user<C, T, U>(
    user_store: &mut U,
    category_store: &mut C,
    transaction_store: &mut T,
    name: &str,
    email: &str,
    password: &str,
) -> Result<RegisteredUser, Error>
where
    C: CategoryStore,
    T: TransactionStore,
    U: UserStore,
{
    let password_hash = PasswordHash::from_raw_password(password, PasswordHash::DEFAULT_COST)?;
    let user = user_store.create(name, email, password_hash)?;

    for (category_name, transaction_type) in STARTER_CATEGORIES {
        category_store.create(
            user.id(),
            CategoryName::new_unchecked(category_name),
            transaction_type,
        )?;
    }

    transaction_store.initialize_user(user.id())?;

    tracing::info!("Registered user {}", user.id());

    Ok(RegisteredUser {
        id: user.id(),
        name: user.name().to_owned(),
        email: user.email().to_owned(),
    })
}

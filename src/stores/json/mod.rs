//! Implements the JSON flat-file backed stores.
//!
//! The backend reads and writes whole collections per user; see [DataDir] for
//! the on-disk layout and the locking discipline the stores share.

mod category;
mod data_dir;
mod transaction;
mod user;

pub use category::JsonCategoryStore;
pub use data_dir::DataDir;
pub use transaction::JsonTransactionStore;
pub use user::JsonUserStore;

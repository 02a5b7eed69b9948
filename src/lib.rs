//! Money Tracker is a personal finance tracker: users register, log in,
//! record income and expense transactions against their own categories, and
//! view monthly summaries.
//!
//! This library provides the service core for embedding in an axum
//! application: JSON flat-file stores, cookie-carried session auth, and
//! monthly aggregation. Page rendering, routing, and forms are left to the
//! embedding app.
//!
//! Data lives under an injected data root, one JSON collection per file:
//! `users.json` at the root, and `categories.json` plus `transactions.json`
//! per user. Call [stores::json::DataDir::initialize] and [init_logging] at
//! startup.

#![warn(missing_docs)]

mod app_state;
mod error;
mod format;
mod logging;

pub mod auth;
pub mod models;
pub mod stores;
pub mod summary;

pub use app_state::{AppState, create_cookie_key};
pub use error::Error;
pub use format::format_money;
pub use logging::{LOG_BODY_LENGTH_LIMIT, init_logging, logging_middleware};

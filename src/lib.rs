//! Personal income and expense tracking.
//!
//! [`store::TransactionStore`] owns the transactions of a session,
//! [`summary`] derives balances and category breakdowns from them, and
//! [`db`] persists the list as JSON in a key-value store.

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod operations;
pub mod store;
pub mod summary;

pub mod category;
pub mod filter;
pub mod transaction;

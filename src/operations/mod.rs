pub mod add;
pub mod import;
pub mod list;
pub mod remove;
pub mod report;

//! The in-memory transaction store.
//!
//! A [`TransactionStore`] is created by the application at startup, filled
//! from the persistence layer with [`TransactionStore::replace_all`], and
//! then mutated only through [`TransactionStore::add`] and
//! [`TransactionStore::remove`]. Saving after a mutation is the caller's job.

use crate::error::ValidationError;
use crate::models::transaction::{DATE_FORMAT, NewTransaction, Transaction};
use chrono::Utc;
use log::debug;
use uuid::Uuid;

#[derive(Debug, Default, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Validates `request`, assigns a fresh id and appends the record.
    pub fn add(&mut self, request: NewTransaction) -> Result<Transaction, ValidationError> {
        let category = request.validate()?;

        let transaction = Transaction {
            id: generate_id(),
            transaction_type: request.transaction_type,
            category: category.to_string(),
            amount: request.amount,
            description: request.description,
            date: request.date.format(DATE_FORMAT).to_string(),
        };

        debug!(
            "Added {} transaction {} ({}, {})",
            transaction.transaction_type, transaction.id, transaction.category, transaction.amount
        );
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// Removes the record with `id`. Absent ids are ignored; the return value
    /// tells whether anything changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            debug!("Removed transaction {}", id);
        } else {
            debug!("No transaction with id {} to remove", id);
        }
        removed
    }

    /// Installs a previously persisted collection as-is.
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) {
        debug!("Replacing store contents with {} transactions", transactions.len());
        self.transactions = transactions;
    }

    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

// Millisecond clock followed by 64 random bits, both base 36. Uniqueness is
// probabilistic; there is no collision check against existing ids.
fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u128;
    let random = Uuid::new_v4().as_u128() as u64;
    format!("{}{:0>13}", to_base36(millis), to_base36(random as u128))
}

fn to_base36(mut value: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    digits.iter().rev().collect()
}

use crate::models::transaction::{Transaction, TransactionType};
use std::fmt;
use std::str::FromStr;

/// Display-only selection over transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Income,
    Expense,
}

impl Filter {
    pub fn matches(self, transaction: &Transaction) -> bool {
        match self {
            Filter::All => true,
            Filter::Income => transaction.transaction_type == TransactionType::Income,
            Filter::Expense => transaction.transaction_type == TransactionType::Expense,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Filter::All => "all",
            Filter::Income => "income",
            Filter::Expense => "expense",
        };
        f.write_str(label)
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(Filter::All),
            "income" => Ok(Filter::Income),
            "expense" => Ok(Filter::Expense),
            other => Err(format!("Invalid filter '{}'. Use all, income or expense.", other)),
        }
    }
}

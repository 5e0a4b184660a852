use crate::display::{format_currency, format_date, format_percentage};
use crate::models::category::categories_for;
use crate::models::filter::Filter;
use crate::models::transaction::{Transaction, TransactionType};
use crate::summary::{category_breakdown, totals, visible_transactions};

pub fn format_transaction_line(transaction: &Transaction) -> String {
    let sign = match transaction.transaction_type {
        TransactionType::Income => '+',
        TransactionType::Expense => '-',
    };
    format!(
        "{:<13} {:<13} {}{:>12}  {:<26} {}",
        format_date(&transaction.date),
        transaction.category,
        sign,
        format_currency(transaction.amount),
        transaction.id,
        transaction.description
    )
}

/// Newest first, restricted to `filter`.
pub fn transaction_lines(transactions: &[Transaction], filter: Filter) -> Vec<String> {
    let visible = visible_transactions(transactions, filter);
    if visible.is_empty() {
        return vec!["No transactions found.".to_string()];
    }
    visible.into_iter().map(format_transaction_line).collect()
}

pub fn summary_lines(transactions: &[Transaction]) -> Vec<String> {
    let totals = totals(transactions);
    vec![
        format!("Balance: {}", format_currency(totals.balance)),
        format!("Income:  {}", format_currency(totals.income)),
        format!("Expense: {}", format_currency(totals.expense)),
    ]
}

pub fn breakdown_lines(transactions: &[Transaction]) -> Vec<String> {
    let breakdown = category_breakdown(transactions);
    if breakdown.is_empty() {
        return vec!["No expenses to show.".to_string()];
    }
    breakdown
        .iter()
        .map(|share| {
            format!(
                "{:<15} {:>12} {:>7}",
                share.category,
                format_currency(share.amount),
                format_percentage(share.percentage)
            )
        })
        .collect()
}

pub fn category_list_lines() -> Vec<String> {
    [TransactionType::Income, TransactionType::Expense]
        .into_iter()
        .map(|transaction_type| {
            format!("{}: {}", transaction_type, categories_for(transaction_type).join(", "))
        })
        .collect()
}

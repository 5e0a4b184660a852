//! Read-only views derived from a snapshot of the store.

use crate::models::filter::Filter;
use crate::models::transaction::Transaction;
use rust_decimal::Decimal;
use std::cmp::Reverse;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Decimal,
    /// Share of the total expense amount, 0 to 100.
    pub percentage: Decimal,
}

pub fn totals(transactions: &[Transaction]) -> Totals {
    let (income, expense) = transactions.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(income, expense), t| {
            if t.is_income() {
                (income.saturating_add(t.amount), expense)
            } else {
                (income, expense.saturating_add(t.amount))
            }
        },
    );

    Totals {
        income,
        expense,
        balance: income.saturating_sub(expense),
    }
}

pub fn filter_by_type(transactions: &[Transaction], filter: Filter) -> Vec<&Transaction> {
    transactions.iter().filter(|t| filter.matches(t)).collect()
}

/// Newest first. Ties and unparseable dates keep their input order; records
/// with unparseable dates go after every dated record.
pub fn sort_by_date_descending<'a>(transactions: &[&'a Transaction]) -> Vec<&'a Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by_cached_key(|t| {
        let date = t.parsed_date();
        (date.is_none(), Reverse(date))
    });
    sorted
}

/// What the transaction list shows for `filter`.
pub fn visible_transactions(transactions: &[Transaction], filter: Filter) -> Vec<&Transaction> {
    sort_by_date_descending(&filter_by_type(transactions, filter))
}

pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let mut groups: Vec<(String, Decimal)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        match index.get(transaction.category.as_str()) {
            Some(&i) => groups[i].1 = groups[i].1.saturating_add(transaction.amount),
            None => {
                index.insert(transaction.category.as_str(), groups.len());
                groups.push((transaction.category.clone(), transaction.amount));
            }
        }
    }

    let total = groups.iter().fold(Decimal::ZERO, |acc, (_, v)| acc.saturating_add(*v));
    if total.is_zero() {
        return Vec::new();
    }

    // stable, so equal amounts stay in first-seen order
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    groups
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            percentage: percentage_of(amount, total),
            category,
            amount,
        })
        .collect()
}

// Records loaded from storage are unvalidated, so either order of the
// multiply and divide can overflow.
fn percentage_of(amount: Decimal, total: Decimal) -> Decimal {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(total))
        .or_else(|| {
            amount
                .checked_div(total)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        })
        .unwrap_or(Decimal::ZERO)
}

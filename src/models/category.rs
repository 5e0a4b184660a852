use crate::models::transaction::TransactionType;

pub const INCOME_CATEGORIES: [&str; 5] = ["Salary", "Freelance", "Investment", "Gift", "Other"];

pub const EXPENSE_CATEGORIES: [&str; 8] = [
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Entertainment",
    "Health",
    "Education",
    "Other",
];

pub fn categories_for(transaction_type: TransactionType) -> &'static [&'static str] {
    match transaction_type {
        TransactionType::Income => &INCOME_CATEGORIES,
        TransactionType::Expense => &EXPENSE_CATEGORIES,
    }
}

/// Looks up `name` in the category list of `transaction_type`, ignoring case,
/// and returns the canonical spelling.
pub fn canonical_category(transaction_type: TransactionType, name: &str) -> Option<&'static str> {
    let name = name.trim();
    categories_for(transaction_type)
        .iter()
        .copied()
        .find(|category| category.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_for_type() {
        assert_eq!(categories_for(TransactionType::Income).len(), 5);
        assert_eq!(categories_for(TransactionType::Expense).len(), 8);
        assert!(categories_for(TransactionType::Expense).contains(&"Education"));
    }

    #[test]
    fn test_canonical_category_case_insensitive() {
        assert_eq!(canonical_category(TransactionType::Expense, " food "), Some("Food"));
        assert_eq!(canonical_category(TransactionType::Income, "SALARY"), Some("Salary"));
    }

    #[test]
    fn test_canonical_category_wrong_type() {
        assert_eq!(canonical_category(TransactionType::Income, "Food"), None);
        assert_eq!(canonical_category(TransactionType::Expense, "Salary"), None);
    }

    #[test]
    fn test_other_belongs_to_both() {
        assert_eq!(canonical_category(TransactionType::Income, "other"), Some("Other"));
        assert_eq!(canonical_category(TransactionType::Expense, "other"), Some("Other"));
    }
}

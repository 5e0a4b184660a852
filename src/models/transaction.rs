use crate::error::ValidationError;
use crate::models::category::canonical_category;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest amount `add` accepts. Together with the two-decimal limit this
/// keeps every stored amount within 15 significant digits, which survive
/// the `f64` the JSON layout stores.
// 99_999_999_999_999 with scale 2 (`Decimal::new` is not const).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);

pub const MAX_DECIMAL_PLACES: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(ValidationError::UnknownType(s.trim().to_string())),
        }
    }
}

/// A stored record. Field names and the `type` key match the persisted JSON.
///
/// `date` keeps the raw `YYYY-MM-DD` string because persisted records are
/// loaded without validation; use [`Transaction::parsed_date`] to compare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub description: String,
    pub date: String,
}

impl Transaction {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}

/// The fields of an add request, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub transaction_type: TransactionType,
    pub category: String,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub fn new(
        transaction_type: TransactionType,
        category: &str,
        amount: Decimal,
        description: &str,
        date: NaiveDate,
    ) -> Self {
        Self {
            transaction_type,
            category: category.to_string(),
            amount,
            description: description.to_string(),
            date,
        }
    }

    /// Builds a request from raw text fields, as typed by a user or read from a file.
    pub fn parse(
        transaction_type: &str,
        category: &str,
        amount: &str,
        description: &str,
        date: &str,
    ) -> Result<Self, ValidationError> {
        let transaction_type = transaction_type.parse::<TransactionType>()?;

        let amount = Decimal::from_str(amount.trim())
            .map_err(|_| ValidationError::InvalidAmount(amount.trim().to_string()))?;

        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(date.trim().to_string()))?;

        Ok(Self::new(
            transaction_type,
            category.trim(),
            amount,
            description.trim(),
            date,
        ))
    }

    /// Checks the amount and category, returning the canonical category name.
    pub fn validate(&self) -> Result<&'static str, ValidationError> {
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            return Err(ValidationError::NegativeAmount(self.amount));
        }
        if self.amount > MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge(self.amount));
        }
        if self.amount.normalize().scale() > MAX_DECIMAL_PLACES {
            return Err(ValidationError::TooManyDecimals(self.amount));
        }

        canonical_category(self.transaction_type, &self.category).ok_or_else(|| {
            ValidationError::UnknownCategory {
                transaction_type: self.transaction_type,
                category: self.category.clone(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_type_from_str() {
        assert_eq!("income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!(" Expense ".parse::<TransactionType>(), Ok(TransactionType::Expense));
        assert_eq!(
            "transfer".parse::<TransactionType>(),
            Err(ValidationError::UnknownType("transfer".to_string()))
        );
    }

    #[test]
    fn test_parse_valid_request() {
        let request = NewTransaction::parse("expense", "food", "12.50", " Lunch ", "2025-03-14").unwrap();
        assert_eq!(request.transaction_type, TransactionType::Expense);
        assert_eq!(request.amount, Decimal::new(1250, 2));
        assert_eq!(request.description, "Lunch");
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(request.validate(), Ok("Food"));
    }

    #[test]
    fn test_parse_rejects_non_numeric_amount() {
        let result = NewTransaction::parse("expense", "Food", "abc", "", "2025-03-14");
        assert_eq!(result, Err(ValidationError::InvalidAmount("abc".to_string())));

        let result = NewTransaction::parse("expense", "Food", "NaN", "", "2025-03-14");
        assert!(matches!(result, Err(ValidationError::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let result = NewTransaction::parse("income", "Salary", "10", "", "14/03/2025");
        assert_eq!(result, Err(ValidationError::InvalidDate("14/03/2025".to_string())));
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let request = NewTransaction::parse("expense", "Food", "-1", "", "2025-03-14").unwrap();
        assert_eq!(request.validate(), Err(ValidationError::NegativeAmount(Decimal::from(-1))));
    }

    #[test]
    fn test_validate_accepts_zero_amount() {
        let request = NewTransaction::parse("expense", "Food", "0", "", "2025-03-14").unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_amount_limits() {
        let largest = NewTransaction::parse("income", "Salary", "999999999999.99", "", "2025-03-14").unwrap();
        assert_eq!(largest.amount, MAX_AMOUNT);
        assert!(largest.validate().is_ok());

        let too_large = NewTransaction::parse("income", "Salary", "1000000000000", "", "2025-03-14").unwrap();
        assert!(matches!(too_large.validate(), Err(ValidationError::AmountTooLarge(_))));

        let huge = NewTransaction::parse("expense", "Food", "1000000000000000000000000000", "", "2025-03-14").unwrap();
        assert!(matches!(huge.validate(), Err(ValidationError::AmountTooLarge(_))));
    }

    #[test]
    fn test_validate_decimal_places() {
        let trailing_zeros = NewTransaction::parse("expense", "Food", "3.5000", "", "2025-03-14").unwrap();
        assert!(trailing_zeros.validate().is_ok());

        let three_places = NewTransaction::parse("expense", "Food", "3.505", "", "2025-03-14").unwrap();
        assert!(matches!(three_places.validate(), Err(ValidationError::TooManyDecimals(_))));
    }

    #[test]
    fn test_validate_rejects_category_of_other_type() {
        let request = NewTransaction::parse("income", "Food", "5", "", "2025-03-14").unwrap();
        assert!(matches!(
            request.validate(),
            Err(ValidationError::UnknownCategory { transaction_type: TransactionType::Income, .. })
        ));
    }

    #[test]
    fn test_serialized_layout() {
        let transaction = Transaction {
            id: "abc".to_string(),
            transaction_type: TransactionType::Expense,
            category: "Food".to_string(),
            amount: Decimal::new(1250, 2),
            description: "Lunch".to_string(),
            date: "2025-03-14".to_string(),
        };

        let value = serde_json::to_value(&transaction).unwrap();
        assert_eq!(value["type"], "expense");
        assert_eq!(value["amount"], serde_json::json!(12.5));
        assert_eq!(value["date"], "2025-03-14");
    }

    #[test]
    fn test_parsed_date_of_malformed_record() {
        let transaction: Transaction = serde_json::from_str(
            r#"{"id":"x","type":"income","category":"Gift","amount":3,"description":"","date":"someday"}"#,
        )
        .unwrap();
        assert_eq!(transaction.parsed_date(), None);
        assert_eq!(transaction.amount, Decimal::from(3));
    }
}

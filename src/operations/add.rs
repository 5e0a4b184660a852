use crate::db::repository;
use crate::db::storage::KeyValueStore;
use crate::error::{TrackerError, ValidationError};
use crate::models::transaction::{DATE_FORMAT, NewTransaction, Transaction};
use crate::store::TransactionStore;
use chrono::{Local, NaiveDate};
use csv::StringRecord;
use log::info;

/// Parses one CSV line `date, description, amount, type, category`.
/// An empty date means today; quote a description that contains commas.
pub fn parse_transaction_input(input: &str) -> Result<NewTransaction, ValidationError> {
    parse_transaction_input_on(input, Local::now().date_naive())
}

fn parse_transaction_input_on(input: &str, today: NaiveDate) -> Result<NewTransaction, ValidationError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .has_headers(false)
        .flexible(true)
        .from_reader(input.as_bytes());

    match reader.records().next() {
        Some(record) => {
            let record = record.map_err(|e| ValidationError::Malformed(e.to_string()))?;
            request_from_record(&record, today)
        }
        None => Err(ValidationError::FieldCount(0)),
    }
}

pub(crate) fn request_from_record(
    record: &StringRecord,
    today: NaiveDate,
) -> Result<NewTransaction, ValidationError> {
    if record.len() != 5 {
        return Err(ValidationError::FieldCount(record.len()));
    }

    let field = |i: usize| record.get(i).unwrap_or("");
    let date = match field(0) {
        "" => today.format(DATE_FORMAT).to_string(),
        date => date.to_string(),
    };
    NewTransaction::parse(field(3), field(4), field(2), field(1), &date)
}

pub fn add_transaction(
    store: &mut TransactionStore,
    storage: &mut impl KeyValueStore,
    input: &str,
) -> Result<Transaction, TrackerError> {
    let request = parse_transaction_input(input)?;
    let transaction = store.add(request)?;
    repository::save_transactions(storage, store.list())?;
    info!("Transaction {} added", transaction.id);
    Ok(transaction)
}

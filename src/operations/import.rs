use crate::db::repository;
use crate::db::storage::KeyValueStore;
use crate::error::{ImportError, TrackerError};
use crate::models::transaction::NewTransaction;
use crate::operations::add::request_from_record;
use crate::store::TransactionStore;
use chrono::Local;
use log::info;
use std::fs::File;
use std::io::Read;

/// Adds every record of a headerless CSV file
/// (`date, description, amount, type, category`). Nothing is added unless
/// every line is valid. An empty date means today.
pub fn import_transactions(
    store: &mut TransactionStore,
    storage: &mut impl KeyValueStore,
    path: &str,
) -> Result<usize, TrackerError> {
    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.to_string(),
        source,
    })?;
    let requests = read_csv(file)?;

    let count = requests.len();
    for request in requests {
        store.add(request)?;
    }
    repository::save_transactions(storage, store.list())?;

    info!("Imported {} transactions from {}", count, path);
    Ok(count)
}

fn read_csv(reader: impl Read) -> Result<Vec<NewTransaction>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let today = Local::now().date_naive();
    let mut requests = Vec::new();

    for (line_index, result) in reader.records().enumerate() {
        let line = line_index + 1;
        let record = result.map_err(|source| ImportError::Csv { line, source })?;

        if record.len() != 5 {
            return Err(ImportError::Columns {
                line,
                found: record.len(),
            });
        }

        let request = request_from_record(&record, today)
            .map_err(|source| ImportError::Invalid { line, source })?;
        request
            .validate()
            .map_err(|source| ImportError::Invalid { line, source })?;

        requests.push(request);
    }

    Ok(requests)
}

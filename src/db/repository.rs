use crate::db::storage::KeyValueStore;
use crate::error::PersistenceError;
use crate::models::transaction::Transaction;
use crate::store::TransactionStore;
use log::{debug, info};

/// The single entry holding the JSON array of transactions.
pub const STORAGE_KEY: &str = "expenseTrackerTransactions";

/// A missing entry is an empty collection. Records are not validated.
pub fn load_transactions(storage: &impl KeyValueStore) -> Result<Vec<Transaction>, PersistenceError> {
    let Some(bytes) = storage.get(STORAGE_KEY)? else {
        debug!("No stored transactions under '{}'", STORAGE_KEY);
        return Ok(Vec::new());
    };

    let transactions: Vec<Transaction> = serde_json::from_slice(&bytes)?;
    info!("Loaded {} transactions", transactions.len());
    Ok(transactions)
}

/// Builds the session's store from the saved entry. On error the entry is
/// left as it was; callers must not save over it.
pub fn load_store(storage: &impl KeyValueStore) -> Result<TransactionStore, PersistenceError> {
    load_transactions(storage).map(TransactionStore::with_transactions)
}

pub fn save_transactions(
    storage: &mut impl KeyValueStore,
    transactions: &[Transaction],
) -> Result<(), PersistenceError> {
    let bytes = serde_json::to_vec(transactions)?;
    storage.set(STORAGE_KEY, &bytes)?;
    debug!("Saved {} transactions ({} bytes)", transactions.len(), bytes.len());
    Ok(())
}

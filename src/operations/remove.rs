use crate::db::repository;
use crate::db::storage::KeyValueStore;
use crate::error::TrackerError;
use crate::store::TransactionStore;

/// Deletes by id and saves. Returns `false`, without saving, when the id is unknown.
pub fn remove_transaction(
    store: &mut TransactionStore,
    storage: &mut impl KeyValueStore,
    id: &str,
) -> Result<bool, TrackerError> {
    let id = id.trim();
    if !store.remove(id) {
        return Ok(false);
    }
    repository::save_transactions(storage, store.list())?;
    Ok(true)
}

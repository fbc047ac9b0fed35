// src/application/store.rs
use crate::domain::DomainError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Synchronous key-value string storage that survives restarts.
pub trait KeyValueStore {
    /// Returns `None` when nothing has been stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Overwrites whatever is stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError>;
}

/// Read a JSON array of records stored under `key`.
///
/// Absent values, `null`, and anything that does not parse as an array of `T`
/// come back as an empty vector.
#[instrument(level = "debug", skip(store))]
pub fn load_records<S, T>(store: &S, key: &str) -> Result<Vec<T>, DomainError>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        debug!(key, "Nothing stored under key");
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Option<Vec<T>>>(&raw) {
        Ok(records) => Ok(records.unwrap_or_default()),
        Err(e) => {
            warn!(key, error = %e, "Ignoring malformed stored data");
            Ok(Vec::new())
        }
    }
}

/// Serialize `records` as one JSON array and overwrite `key`.
#[instrument(level = "debug", skip(store, records), fields(count = records.len()))]
pub fn save_records<S, T>(store: &mut S, key: &str, records: &[T]) -> Result<(), DomainError>
where
    S: KeyValueStore,
    T: Serialize,
{
    let raw = serde_json::to_string(records)?;
    store.set(key, &raw)
}

//! Persistence adapter: JSON documents under fixed string keys.
//!
//! Reads never fail on bad data. A missing key, malformed JSON or a document
//! of the wrong shape all resolve to the caller's default; only failures of
//! the backing store itself are reported.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const TRIPS_KEY: &str = "trips";
pub const SETTINGS_KEY: &str = "settings";
pub const ACTIVE_TRIP_KEY: &str = "activeTrip";

/// String-keyed, string-valued synchronous storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

/// Read and decode `key`, falling back to `default` when the entry is
/// absent or cannot be decoded as `T`.
pub fn load<T, S>(store: &S, key: &str, default: T) -> AppResult<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(default);
    };

    Ok(serde_json::from_str(&raw).unwrap_or(default))
}

/// Read `key` as a JSON array, keeping every element that decodes as `T`.
/// Only a missing entry or a document that is not an array yields `[]`.
pub fn load_list<T, S>(store: &S, key: &str) -> AppResult<Vec<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let items: Vec<serde_json::Value> = load(store, key, Vec::new())?;

    Ok(items
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect())
}

pub fn save<T, S>(store: &mut S, key: &str, value: &T) -> AppResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

/// Remove `key` entirely. Absence is how "nothing stored" is represented.
pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S, key: &str) -> AppResult<()> {
    store.remove(key)
}

pub mod file;
pub mod legacy;
pub mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Key of the signed-in user
pub const USER_KEY: &str = "user";
/// Key of the locally persisted legacy listings
pub const LEGACY_PROPERTIES_KEY: &str = "properties";
pub const THEME_KEY: &str = "theme";
pub const VIEW_MODE_KEY: &str = "viewMode";

/// Key of one user's favorite listing ids
pub fn favorites_key(user_id: &str) -> String {
    format!("favorites-{user_id}")
}

/// Persistent string key-value store scoped to this device
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    /// Name used in logs
    fn backend_name(&self) -> &'static str;
}

pub type SharedStorage = Arc<dyn KeyValueStorage>;

/// Read and decode a JSON value, `None` when the key is unset
pub fn load_json<T, S>(storage: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStorage + ?Sized,
{
    match storage.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .with_context(|| format!("Failed to decode stored value for '{key}'"))
            .map(Some),
        None => Ok(None),
    }
}

pub fn save_json<T, S>(storage: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStorage + ?Sized,
{
    let raw = serde_json::to_string(value)
        .with_context(|| format!("Failed to encode value for '{key}'"))?;
    storage.set(key, &raw)
}

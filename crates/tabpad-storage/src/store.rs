//! Key-value store contract

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::Result;

/// String-keyed, string-valued persistent store.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Read and decode a JSON value.
    ///
    /// A value that is present but does not decode is reported as an error so
    /// callers can tell corrupt state from absent state.
    fn get_json<T>(&self, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
        T: DeserializeOwned,
    {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Encode a value as JSON and write it.
    fn set_json<T>(&self, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
        T: Serialize + ?Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

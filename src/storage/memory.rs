use std::collections::HashMap;

use serde::{Serialize, de::DeserializeOwned};

use crate::{prelude::*, storage::Storage};

/// Keeps the serialized documents in memory, like a browser's local storage would.
#[must_use]
#[derive(Default)]
pub struct MemoryStorage(HashMap<String, String>);

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw serialized document under the key.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Put a raw document under the key, bypassing serialization.
    pub fn insert_raw(&mut self, key: impl Into<String>, document: impl Into<String>) {
        self.0.insert(key.into(), document.into());
    }
}

impl Storage for MemoryStorage {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.0
            .get(key)
            .map(|document| {
                serde_json::from_str(document).with_context(|| format!("failed to parse `{key}`"))
            })
            .transpose()
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result {
        self.0.insert(key.to_owned(), serde_json::to_string(value)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key() -> Result {
        assert_eq!(MemoryStorage::new().load::<Vec<u32>>("nothing")?, None);
        Ok(())
    }

    #[test]
    fn test_save_and_load() -> Result {
        let mut storage = MemoryStorage::new();
        storage.save("numbers", &vec![1, 2, 3])?;
        assert_eq!(storage.raw("numbers"), Some("[1,2,3]"));
        assert_eq!(storage.load::<Vec<u32>>("numbers")?, Some(vec![1, 2, 3]));
        Ok(())
    }

    #[test]
    fn test_corrupt_document() {
        let mut storage = MemoryStorage::new();
        storage.insert_raw("numbers", "[1, 2,");
        assert!(storage.load::<Vec<u32>>("numbers").is_err());
    }
}

mod file;
#[cfg(test)]
mod memory;

use serde::{Serialize, de::DeserializeOwned};

pub use self::file::FileStorage;
#[cfg(test)]
pub use self::memory::MemoryStorage;
use crate::prelude::*;

/// Durable key-value storage for the application state.
///
/// Values are plain structured data. Keys are expected to be namespaced by the caller.
pub trait Storage {
    /// Load the value stored under the key, if any.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>;

    /// Store the value under the key, replacing the previous one.
    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result;
}

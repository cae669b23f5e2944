use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{prelude::*, storage::Storage};

/// Stores every key as a separate JSON document in a directory.
#[must_use]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Platform data directory, for example `~/.local/share/energy-cost` on Linux.
    pub fn try_default() -> Result<Self> {
        let root = dirs_next::data_dir()
            .context("could not determine the user data directory, use `--state-dir`")?
            .join(env!("CARGO_PKG_NAME"));
        Ok(Self::new(root))
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    #[instrument(skip_all, fields(key = key))]
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path(key);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "nothing stored yet");
                return Ok(None);
            }
            Err(error) => {
                return Err(Error::new(error).context(format!("failed to read `{}`", path.display())));
            }
        };
        let value = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        Ok(Some(value))
    }

    #[instrument(skip_all, fields(key = key))]
    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create `{}`", self.root.display()))?;
        let path = self.path(key);
        fs::write(&path, serde_json::to_string_pretty(value)?)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        debug!(path = %path.display(), "saved");
        Ok(())
    }
}

/// Browser-style key/value storage persisted as a JSON object
use crate::error::Result;
use crate::state::paths;
use crate::utils::data;
use std::collections::BTreeMap;
use std::path::{ Path, PathBuf };

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalStorage {
    path: Option<PathBuf>,
    items: BTreeMap<String, String>,
}

impl LocalStorage {
    /// Open the storage file at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let items = if path.exists() {
            data::load_json_from_file::<BTreeMap<String, String>>(path)?
        } else {
            crate::debug_print!("🗄️ No local storage at {}, starting empty", path.display());
            BTreeMap::new()
        };

        Ok(Self { path: Some(path.to_path_buf()), items })
    }

    /// Open the storage file in the data directory
    pub fn open_default() -> Result<Self> {
        Self::open(paths::local_storage_json())
    }

    /// A store that is never written to disk
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
    }

    pub fn remove_item(&mut self, key: &str) -> Option<String> {
        self.items.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Write the store back to its file; in-memory stores are left alone
    pub fn save(&self) -> Result<()> {
        match &self.path {
            Some(path) => data::save_json_to_file(&self.items, path),
            None => Ok(()),
        }
    }
}

/// Deletes the given keys from storage. Keys that are not present are skipped.
/// Returns the number of keys removed.
pub fn delete_from_local_storage<I>(storage: &mut LocalStorage, keys: I) -> usize
    where I: IntoIterator, I::Item: AsRef<str>
{
    let mut removed = 0;
    for key in keys {
        let key = key.as_ref();
        if storage.contains_key(key) {
            storage.remove_item(key);
            crate::debug_print!("🗑️ Removed '{}' from local storage", key);
            removed += 1;
        }
    }
    removed
}

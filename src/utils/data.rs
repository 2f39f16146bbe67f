use crate::error::{ Error, Result };
use serde::{ Deserialize, Serialize };
/// Data serialization and file management utilities
use std::fs;
use std::path::Path;

/// Generic function to load JSON data from file
pub fn load_json_from_file<T>(file_path: &Path) -> Result<T> where T: for<'de> Deserialize<'de> {
    let contents = fs::read_to_string(file_path).map_err(|source| Error::Io {
        path: file_path.to_path_buf(),
        source,
    })?;

    serde_json::from_str::<T>(&contents).map_err(|source| Error::Json {
        path: file_path.to_path_buf(),
        source,
    })
}

/// Generic function to save data as JSON to file
pub fn save_json_to_file<T>(data: &T, file_path: &Path) -> Result<()> where T: Serialize {
    // Ensure parent directory exists
    if let Some(parent) = file_path.parent() {
        crate::utils::path::ensure_directory_exists(parent)?;
    }

    let contents = serde_json::to_string_pretty(data).map_err(Error::Serialize)?;

    fs::write(file_path, contents).map_err(|source| Error::Io {
        path: file_path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data.json");

        let mut map = BTreeMap::new();
        map.insert("a".to_string(), 1);
        save_json_to_file(&map, &path).unwrap();

        let loaded: BTreeMap<String, i32> = load_json_from_file(&path).unwrap();
        assert_eq!(loaded, map);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Vec<u8>> = load_json_from_file(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let result: Result<Vec<u8>> = load_json_from_file(&path);
        assert!(matches!(result, Err(Error::Json { .. })));
    }
}

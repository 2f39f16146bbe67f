/// Path and file system utility functions
use crate::error::{ Error, Result };
use crate::state::paths;
use std::fs;
use std::path::Path;

/// Get absolute path for data directory
pub fn get_data_dir_absolute() -> String {
    paths::data_dir().to_string_lossy().to_string()
}

/// Create directory recursively if it doesn't exist
pub fn ensure_directory_exists(path: impl AsRef<Path>) -> Result<()> {
    let path_ref = path.as_ref();
    fs::create_dir_all(path_ref).map_err(|source| Error::Io {
        path: path_ref.to_path_buf(),
        source,
    })
}

/// Centralized path definitions
///
/// ## Path Structure
/// - `config.json` - Application preferences (gallery sort, view mode, sidebar)
/// - `local_storage.json` - Browser-style key/value storage (theme, session leftovers)
///
/// Both live in the data directory. `PIXIO_DATA_DIR` overrides it; otherwise the
/// platform data directory is used:
/// - Windows: %APPDATA%/pixio
/// - macOS: ~/Library/Application Support/pixio
/// - Linux: ~/.local/share/pixio
use crate::utils::constants::{ APP_NAME_LOWERCASE, DATA_DIR_ENV };
use std::path::PathBuf;
use std::sync::OnceLock;

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Pin the data directory (e.g. from a command line flag).
/// Returns false if it was already resolved.
pub fn set_data_dir(dir: PathBuf) -> bool {
    DATA_DIR.set(dir).is_ok()
}

/// Resolve the data directory once per process
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(|| {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            let dir = PathBuf::from(dir);
            crate::debug_print!("📂 Data dir (from {}): {}", DATA_DIR_ENV, dir.display());
            return dir;
        }

        let dir = system_data_dir();
        crate::debug_print!("📂 Data dir: {}", dir.display());
        dir
    })
}

fn system_data_dir() -> PathBuf {
    use directories::BaseDirs;

    match BaseDirs::new() {
        Some(base_dirs) => base_dirs.data_dir().join(APP_NAME_LOWERCASE),
        // No home directory; fall back to the working directory
        None => std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("data"),
    }
}

/// Application configuration file
pub fn config_json() -> PathBuf {
    data_dir().join("config.json")
}

/// Local storage file
pub fn local_storage_json() -> PathBuf {
    data_dir().join("local_storage.json")
}

/// Application constants used throughout the application
/// This file centralizes all application naming and branding constants

/// The display name of the application (with proper casing)
pub const APP_NAME: &str = "Pixio";

/// The lowercase version for file names, directories, etc.
pub const APP_NAME_LOWERCASE: &str = "pixio";

/// Long description of the application
pub const APP_DESCRIPTION_LONG: &str =
    "A modern pixel art editor with a focus on collaboration and simplicity.";

/// Version of the application (should match Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "PIXIO_DATA_DIR";

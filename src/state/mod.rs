pub mod config;
pub mod gallery;
pub mod local_storage;
pub mod paths;

pub use config::{ AppConfig, GalleryPreferences, PreferenceOverrides };
pub use gallery::{ CanvasCardData, CanvasOwner };
pub use local_storage::{ delete_from_local_storage, LocalStorage };

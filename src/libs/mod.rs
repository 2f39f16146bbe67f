pub mod routes;
pub mod sort;
pub mod theme;
pub mod view;

pub use sort::{ GalleryQuery, SortDirection, SortOption };
pub use theme::Theme;
pub use view::ViewMode;

pub mod gallery_view;
pub mod sidebar;
pub mod ui;

pub use gallery_view::GalleryView;
pub use sidebar::SidebarView;
pub use ui::page_header::PageHeader;

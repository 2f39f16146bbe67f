use crate::utils::constants::{ APP_DESCRIPTION_LONG, APP_NAME };
use std::fmt;

/// Pages the navigation shell knows about
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Gallery,
    Collections,
    Starred,
    Shared,
    Recent,
    Settings,
    Trash,
    Login,
    Signup,
    Canvas {
        id: String,
    },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Gallery => "/gallery".to_string(),
            Route::Collections => "/collections".to_string(),
            Route::Starred => "/starred".to_string(),
            Route::Shared => "/shared".to_string(),
            Route::Recent => "/recent".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::Trash => "/trash".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Canvas { id } => format!("/canvas/{}", id),
        }
    }

    /// Parse a pathname. A single trailing slash is ignored; unknown paths give None.
    pub fn parse(path: &str) -> Option<Route> {
        let route = match normalize_path(path) {
            "/" => Route::Home,
            "/gallery" => Route::Gallery,
            "/collections" => Route::Collections,
            "/starred" => Route::Starred,
            "/shared" => Route::Shared,
            "/recent" => Route::Recent,
            "/settings" => Route::Settings,
            "/trash" => Route::Trash,
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            other => {
                let id = other.strip_prefix("/canvas/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Route::Canvas { id: id.to_string() }
            }
        };

        Some(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Drops a single trailing slash, except on the root path
pub fn normalize_path(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}

/// Routes rendered without the sidebar and header
pub const SIDEBAR_HIDDEN_ROUTES: &[&str] = &["/login", "/signup"];

/// Whether the navigation shell wraps the page at `pathname`
pub fn shows_sidebar(pathname: &str) -> bool {
    !SIDEBAR_HIDDEN_ROUTES.contains(&normalize_path(pathname))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarItem {
    pub title: &'static str,
    pub path: &'static str,
}

impl SidebarItem {
    /// Highlighted when the current pathname is exactly this item's path
    pub fn is_active(&self, pathname: &str) -> bool {
        self.path == pathname
    }
}

pub const SIDEBAR_ITEMS: &[SidebarItem] = &[
    SidebarItem { title: "Home", path: "/" },
    SidebarItem { title: "My Gallery", path: "/gallery" },
    SidebarItem { title: "My Collections", path: "/collections" },
    SidebarItem { title: "Starred", path: "/starred" },
    SidebarItem { title: "Shared with me", path: "/shared" },
    SidebarItem { title: "Recent", path: "/recent" },
];

/// Document title and description for a page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

pub const GALLERY_HEADING: &str = "My Gallery";
pub const GALLERY_DESCRIPTION: &str =
    "Manage your pixel art creations. Rename, duplicate, or delete your canvases with ease.";

pub fn page_meta(route: &Route) -> PageMeta {
    match route {
        Route::Gallery =>
            PageMeta {
                title: format!("{} | {}", GALLERY_HEADING, APP_NAME),
                description: GALLERY_DESCRIPTION.to_string(),
            },
        _ =>
            PageMeta {
                title: APP_NAME.to_string(),
                description: APP_DESCRIPTION_LONG.to_string(),
            },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_path_agree() {
        for item in SIDEBAR_ITEMS {
            let route = Route::parse(item.path).unwrap();
            assert_eq!(route.path(), item.path);
        }
        let canvas = Route::parse("/canvas/abc").unwrap();
        assert_eq!(canvas, Route::Canvas { id: "abc".to_string() });
        assert_eq!(canvas.to_string(), "/canvas/abc");
    }

    #[test]
    fn parse_rejects_unknown_paths() {
        assert_eq!(Route::parse("/nowhere"), None);
        assert_eq!(Route::parse("/canvas/"), None);
        assert_eq!(Route::parse("/canvas/a/b"), None);
        assert_eq!(Route::parse(""), None);
    }

    #[test]
    fn parse_ignores_trailing_slash() {
        assert_eq!(Route::parse("/gallery/"), Some(Route::Gallery));
        assert_eq!(Route::parse("/"), Some(Route::Home));
    }

    #[test]
    fn auth_pages_hide_sidebar() {
        assert!(!shows_sidebar("/login"));
        assert!(!shows_sidebar("/signup"));
        assert!(shows_sidebar("/gallery"));
        assert!(shows_sidebar("/"));
    }

    #[test]
    fn auth_pages_with_trailing_slash_hide_sidebar() {
        assert!(!shows_sidebar("/login/"));
        assert!(!shows_sidebar("/signup/"));
        assert_eq!(Route::parse("/login/"), Some(Route::Login));
        assert!(shows_sidebar("/gallery/"));
    }

    #[test]
    fn normalize_keeps_root() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/starred/"), "/starred");
        assert_eq!(normalize_path("/starred"), "/starred");
    }

    #[test]
    fn active_item_is_exact_match() {
        let gallery = SIDEBAR_ITEMS[1];
        assert!(gallery.is_active("/gallery"));
        assert!(!gallery.is_active("/gallery/other"));
        assert!(!SIDEBAR_ITEMS[0].is_active("/gallery"));
    }

    #[test]
    fn gallery_title() {
        let meta = page_meta(&Route::Gallery);
        assert_eq!(meta.title, "My Gallery | Pixio");
        assert_eq!(page_meta(&Route::Home).title, "Pixio");
    }
}

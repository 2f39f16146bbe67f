use crate::libs::routes::{ shows_sidebar, SIDEBAR_ITEMS };
use crate::utils::constants::APP_NAME;
use std::fmt;

/// Navigation list for the page at `pathname`, active entry marked with `>`
pub struct SidebarView<'a> {
    pub pathname: &'a str,
}

impl fmt::Display for SidebarView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Auth pages render without the navigation shell
        if !shows_sidebar(self.pathname) {
            return Ok(());
        }

        writeln!(f, "{}", APP_NAME)?;
        writeln!(f, "App")?;
        for item in SIDEBAR_ITEMS {
            let marker = if item.is_active(self.pathname) { '>' } else { ' ' };
            writeln!(f, "{} {:<16} {}", marker, item.title, item.path)?;
        }
        Ok(())
    }
}

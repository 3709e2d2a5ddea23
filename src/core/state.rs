//! # Application State
//!
//! Core state for Patternbook. No TUI-specific types live here;
//! presentation state (menu cursor, scroll offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog            // pages + active/default route
//! ├── nav: NavShell               // fixed menu entries
//! ├── status_message: String      // status bar text
//! ├── not_found: Option<String>   // route of the last failed navigation
//! └── show_source: bool           // render source listings
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::warn;

use crate::core::action::{Action, update};
use crate::core::catalog::Catalog;
use crate::core::error::CatalogError;
use crate::core::nav::NavShell;
use crate::core::page::Page;
use crate::core::render::{PageView, page_view};
use crate::core::route_table::RouteTable;

pub struct App {
    pub catalog: Catalog,
    pub nav: NavShell,
    pub status_message: String,
    /// Set when the last navigation named an unknown route. Cleared by the
    /// next successful navigation.
    pub not_found: Option<String>,
    pub show_source: bool,
}

impl App {
    pub fn new(catalog: Catalog, nav: NavShell) -> Self {
        Self {
            catalog,
            nav,
            status_message: String::from("Welcome to Patternbook!"),
            not_found: None,
            show_source: true,
        }
    }

    /// Build the catalog and open the requested page.
    ///
    /// Only construction errors fail. An unknown `default_route` or
    /// `start_route` is a navigation like any other: the app starts on the
    /// "not found" view and stays usable.
    pub fn open(
        table: &RouteTable,
        default_route: &str,
        start_route: Option<&str>,
    ) -> Result<Self, CatalogError> {
        let (mut catalog, nav) = table.build(None)?;

        let mut missing_default = None;
        if let Err(err) = catalog.set_default_route(default_route) {
            warn!("No landing page: {}", err);
            missing_default = Some(default_route);
        }

        let mut app = Self::new(catalog, nav);
        if let Some(route) = start_route.or(missing_default) {
            // Failures are already recorded in `not_found` and the status line
            let _ = update(&mut app, Action::Navigate(route.to_string()));
        }
        Ok(app)
    }

    pub fn active_page(&self) -> Option<&Page> {
        self.catalog.active_page()
    }

    /// View of the page to draw, or None while showing "not found" or
    /// before any page exists.
    pub fn current_view(&self) -> Option<PageView<'_>> {
        if self.not_found.is_some() {
            return None;
        }
        self.catalog.active_page().map(page_view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::ContentUnit;
    use crate::core::page::Tab;
    use crate::core::route_table::RouteEntry;
    use crate::test_support::test_app;

    fn table() -> RouteTable {
        ["strategy", "observer"]
            .into_iter()
            .map(|key| {
                RouteEntry::new(key, key, move || {
                    vec![Tab::new("Definition", vec![ContentUnit::new(key, "")])]
                })
            })
            .collect()
    }

    #[test]
    fn test_open_lands_on_default_route() {
        let app = App::open(&table(), "observer", None).unwrap();
        assert_eq!(app.catalog.current_route_key(), Some("observer"));
        assert!(app.catalog.active_route_key().is_none());
        assert!(app.not_found.is_none());
    }

    #[test]
    fn test_open_unknown_start_route_shows_not_found() {
        let app = App::open(&table(), "strategy", Some("ghost")).unwrap();
        assert_eq!(app.not_found.as_deref(), Some("ghost"));
        assert_eq!(app.catalog.current_route_key(), Some("strategy"));
        assert!(app.current_view().is_none());
    }

    #[test]
    fn test_open_unknown_default_route_shows_not_found() {
        let app = App::open(&table(), "ghost", None).unwrap();
        assert_eq!(app.not_found.as_deref(), Some("ghost"));
        assert!(app.catalog.current_route_key().is_none());

        let app = App::open(&table(), "ghost", Some("observer")).unwrap();
        assert!(app.not_found.is_none());
        assert_eq!(app.catalog.active_route_key(), Some("observer"));
    }

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Patternbook!");
        assert!(app.not_found.is_none());
        assert!(app.show_source);
        assert_eq!(app.nav.len(), 2);
    }

    #[test]
    fn test_current_view_hidden_while_not_found() {
        let mut app = test_app();
        app.catalog.navigate("strategy").unwrap();
        assert!(app.current_view().is_some());

        app.not_found = Some("ghost".to_string());
        assert!(app.current_view().is_none());
    }
}

//! # Catalog / Router
//!
//! Maps route keys to pages and tracks which page is active.
//!
//! ```text
//! Catalog
//! ├── pages: HashMap<route_key, Page>
//! ├── default_route: Option<String>   // landing page when nothing was navigated
//! └── active_route: Option<String>    // set only by navigate()
//! ```
//!
//! Invariant: `active_route` and `default_route`, when set, always name a
//! registered page. Both are only written after the key has been checked.

use std::collections::HashMap;

use log::{debug, info};

use crate::core::error::CatalogError;
use crate::core::page::Page;

#[derive(Debug, Default)]
pub struct Catalog {
    pages: HashMap<String, Page>,
    default_route: Option<String>,
    active_route: Option<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a page under its route key. A second page with the same key is
    /// rejected and dropped; the first stays registered.
    pub fn register(&mut self, page: Page) -> Result<(), CatalogError> {
        let key = page.route_key().to_string();
        if self.pages.contains_key(&key) {
            return Err(CatalogError::DuplicateRoute(key));
        }
        debug!("Registered page '{}' ({} tabs)", key, page.tab_count());
        self.pages.insert(key, page);
        Ok(())
    }

    /// Designate the landing page shown before any navigation.
    pub fn set_default_route(&mut self, route_key: &str) -> Result<(), CatalogError> {
        if !self.pages.contains_key(route_key) {
            return Err(CatalogError::RouteNotFound(route_key.to_string()));
        }
        self.default_route = Some(route_key.to_string());
        Ok(())
    }

    /// Make `route_key` the active page. Unknown keys leave the active
    /// route untouched.
    pub fn navigate(&mut self, route_key: &str) -> Result<(), CatalogError> {
        if !self.pages.contains_key(route_key) {
            return Err(CatalogError::RouteNotFound(route_key.to_string()));
        }
        info!("Navigated to '{}'", route_key);
        self.active_route = Some(route_key.to_string());
        Ok(())
    }

    /// Key of the page that `active_page()` resolves to: the navigated
    /// route, else the default route.
    pub fn current_route_key(&self) -> Option<&str> {
        self.active_route
            .as_deref()
            .or(self.default_route.as_deref())
    }

    /// Route set by the last successful `navigate`, if any.
    pub fn active_route_key(&self) -> Option<&str> {
        self.active_route.as_deref()
    }

    pub fn default_route_key(&self) -> Option<&str> {
        self.default_route.as_deref()
    }

    pub fn active_page(&self) -> Option<&Page> {
        self.current_route_key().and_then(|key| self.pages.get(key))
    }

    pub fn active_page_mut(&mut self) -> Option<&mut Page> {
        let key = self
            .active_route
            .as_ref()
            .or(self.default_route.as_ref())?;
        self.pages.get_mut(key)
    }

    /// Select a tab on the active page.
    pub fn select_tab(&mut self, index: usize) -> Result<(), CatalogError> {
        let page = self.active_page_mut().ok_or(CatalogError::NoActivePage)?;
        page.select_tab(index)?;
        debug!("Page '{}' selected tab {}", page.route_key(), index);
        Ok(())
    }

    pub fn page(&self, route_key: &str) -> Option<&Page> {
        self.pages.get(route_key)
    }

    pub fn contains(&self, route_key: &str) -> bool {
        self.pages.contains_key(route_key)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

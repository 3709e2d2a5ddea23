//! # Route Table
//!
//! The startup input: an ordered list of `(route key, label, builder)`
//! entries. Building it registers every page in order and derives the
//! navigation menu in the same order. Pure data assembly, no I/O.

use log::info;

use crate::core::catalog::Catalog;
use crate::core::error::CatalogError;
use crate::core::nav::{NavEntry, NavShell};
use crate::core::page::{Page, Tab};

/// Produces the tabs for one page.
pub type PageBuilder = Box<dyn Fn() -> Vec<Tab>>;

pub struct RouteEntry {
    pub route_key: String,
    pub label: String,
    pub builder: PageBuilder,
}

impl RouteEntry {
    pub fn new(
        route_key: impl Into<String>,
        label: impl Into<String>,
        builder: impl Fn() -> Vec<Tab> + 'static,
    ) -> Self {
        Self {
            route_key: route_key.into(),
            label: label.into(),
            builder: Box::new(builder),
        }
    }

    fn build_page(&self) -> Result<Page, CatalogError> {
        Page::new(self.route_key.as_str(), self.label.as_str(), (self.builder)())
    }
}

#[derive(Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: RouteEntry) {
        self.entries.push(entry);
    }

    /// Append every entry of `other` after this table's entries.
    pub fn extend(&mut self, other: RouteTable) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn route_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.route_key.as_str())
    }

    /// Assemble the catalog and menu. The first failing entry aborts the
    /// whole build.
    pub fn build(&self, default_route: Option<&str>) -> Result<(Catalog, NavShell), CatalogError> {
        let mut catalog = Catalog::new();
        let mut nav_entries = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            catalog.register(entry.build_page()?)?;
            nav_entries.push(NavEntry::new(entry.route_key.as_str(), entry.label.as_str()));
        }

        if let Some(key) = default_route {
            catalog.set_default_route(key)?;
        }

        info!("Catalog built: {} pages", catalog.len());
        Ok((catalog, NavShell::new(nav_entries)))
    }
}

impl FromIterator<RouteEntry> for RouteTable {
    fn from_iter<I: IntoIterator<Item = RouteEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

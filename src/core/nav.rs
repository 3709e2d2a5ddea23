//! # Navigation Shell
//!
//! The persistent menu. Holds the fixed, ordered list of entries built at
//! startup and forwards a chosen entry to [`Catalog::navigate`].
//!
//! The shell keeps no record of which entry is active. Highlighting is a
//! fresh comparison against the catalog on every call to
//! [`NavShell::is_active`].

use crate::core::catalog::Catalog;
use crate::core::error::CatalogError;

/// One menu entry. Immutable after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub route_key: String,
    pub label: String,
}

impl NavEntry {
    pub fn new(route_key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            route_key: route_key.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavShell {
    entries: Vec<NavEntry>,
}

impl NavShell {
    pub fn new(entries: Vec<NavEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&NavEntry> {
        self.entries.get(index)
    }

    /// Forward the entry at `index` to the catalog.
    ///
    /// An index past the end of the menu is reported as a missing route
    /// named after the index, since no key exists for it.
    pub fn activate(&self, index: usize, catalog: &mut Catalog) -> Result<(), CatalogError> {
        match self.entry(index) {
            Some(entry) => catalog.navigate(&entry.route_key),
            None => Err(CatalogError::RouteNotFound(format!("#{index}"))),
        }
    }

    /// Whether `entry` names the page the catalog currently shows.
    pub fn is_active(&self, entry: &NavEntry, catalog: &Catalog) -> bool {
        catalog.current_route_key() == Some(entry.route_key.as_str())
    }

    /// Position of the entry matching the catalog's current page.
    pub fn active_index(&self, catalog: &Catalog) -> Option<usize> {
        self.entries.iter().position(|e| self.is_active(e, catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_catalog;

    fn shell() -> NavShell {
        NavShell::new(vec![
            NavEntry::new("strategy", "Strategy Pattern"),
            NavEntry::new("observer", "Observer Pattern"),
            NavEntry::new("unrouted", "Dangling Entry"),
        ])
    }

    #[test]
    fn test_activate_forwards_route_key() {
        let nav = shell();
        let mut catalog = test_catalog();
        nav.activate(1, &mut catalog).unwrap();
        assert_eq!(catalog.active_route_key(), Some("observer"));
    }

    #[test]
    fn test_activate_unregistered_entry_reports_not_found() {
        let nav = shell();
        let mut catalog = test_catalog();
        nav.activate(0, &mut catalog).unwrap();

        let err = nav.activate(2, &mut catalog).unwrap_err();
        assert_eq!(err, CatalogError::RouteNotFound("unrouted".into()));
        assert_eq!(catalog.active_route_key(), Some("strategy"));
    }

    #[test]
    fn test_entry_lookup_matches_activation() {
        let nav = shell();
        assert_eq!(nav.entry(1).map(|e| e.route_key.as_str()), Some("observer"));
        assert!(nav.entry(3).is_none());

        let mut catalog = test_catalog();
        nav.activate(1, &mut catalog).unwrap();
        assert_eq!(catalog.active_route_key(), nav.entry(1).map(|e| e.route_key.as_str()));
    }

    #[test]
    fn test_activate_out_of_range() {
        let nav = shell();
        let mut catalog = test_catalog();
        assert!(nav.activate(99, &mut catalog).is_err());
        assert!(catalog.active_route_key().is_none());
    }

    #[test]
    fn test_highlight_follows_catalog() {
        let nav = shell();
        let mut catalog = test_catalog();
        assert_eq!(nav.active_index(&catalog), None);

        catalog.navigate("observer").unwrap();
        assert!(nav.is_active(&nav.entries()[1], &catalog));
        assert!(!nav.is_active(&nav.entries()[0], &catalog));
        assert_eq!(nav.active_index(&catalog), Some(1));
    }

    #[test]
    fn test_highlight_uses_default_route() {
        let nav = shell();
        let mut catalog = test_catalog();
        catalog.set_default_route("strategy").unwrap();
        assert_eq!(nav.active_index(&catalog), Some(0));
    }
}

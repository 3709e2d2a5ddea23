//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::content::ContentUnit;
use crate::core::nav::{NavEntry, NavShell};
use crate::core::page::{Page, Tab};
use crate::core::{Catalog, state::App};

/// A page whose tabs each hold one unit titled after the tab.
pub fn test_page(route_key: &str, labels: &[&str]) -> Page {
    let tabs = labels
        .iter()
        .map(|label| {
            Tab::new(
                *label,
                vec![ContentUnit::new(format!("{label} title"), format!("{label} body"))],
            )
        })
        .collect();
    Page::new(route_key, route_key, tabs).expect("test page labels must be unique")
}

/// Two pages, no default route, nothing navigated.
pub fn test_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .register(test_page("strategy", &["Definition", "Payment"]))
        .unwrap();
    catalog
        .register(test_page("observer", &["Definition", "Shopping Cart", "Chat"]))
        .unwrap();
    catalog
}

pub fn test_app() -> App {
    let nav = NavShell::new(vec![
        NavEntry::new("strategy", "Strategy Pattern"),
        NavEntry::new("observer", "Observer Pattern"),
    ]);
    App::new(test_catalog(), nav)
}

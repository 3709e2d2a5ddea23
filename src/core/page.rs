//! # Pages and Tabs
//!
//! A `Page` is one catalog entry: a route key, a title, and a non-empty,
//! uniquely-labeled sequence of tabs. Its only mutable state is
//! `selected_index`, which always points at an existing tab.
//!
//! ```text
//! Page ("strategy")
//! ├── tabs[0] "Definition"          ◄── selected_index = 0 on construction
//! ├── tabs[1] "Payment Processing"
//! └── tabs[2] "Form Validation"
//! ```

use std::collections::HashSet;

use crate::core::content::Panel;
use crate::core::error::CatalogError;

/// A labeled panel. Owns its panel exclusively.
#[derive(Debug, Clone)]
pub struct Tab {
    pub label: String,
    pub panel: Panel,
}

impl Tab {
    pub fn new(label: impl Into<String>, panel: impl Into<Panel>) -> Self {
        Self {
            label: label.into(),
            panel: panel.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Page {
    route_key: String,
    title: String,
    tabs: Vec<Tab>,
    selected_index: usize,
}

impl Page {
    /// Build a page. At least one tab is required; labels are trimmed and
    /// must be unique within the page.
    pub fn new(
        route_key: impl Into<String>,
        title: impl Into<String>,
        tabs: Vec<Tab>,
    ) -> Result<Self, CatalogError> {
        let route_key = route_key.into();
        if tabs.is_empty() {
            return Err(CatalogError::EmptyPage(route_key));
        }

        let tabs: Vec<Tab> = tabs
            .into_iter()
            .map(|tab| Tab {
                label: tab.label.trim().to_string(),
                panel: tab.panel,
            })
            .collect();

        let mut seen = HashSet::new();
        for tab in &tabs {
            if !seen.insert(tab.label.as_str()) {
                return Err(CatalogError::DuplicateTabLabel {
                    route_key,
                    label: tab.label.clone(),
                });
            }
        }

        Ok(Self {
            route_key,
            title: title.into(),
            tabs,
            selected_index: 0,
        })
    }

    pub fn route_key(&self) -> &str {
        &self.route_key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn tab_labels(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.label.as_str()).collect()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Select the tab at `index`. Out-of-range leaves the selection as is.
    pub fn select_tab(&mut self, index: usize) -> Result<(), CatalogError> {
        if index >= self.tabs.len() {
            return Err(CatalogError::InvalidTabIndex {
                index,
                tab_count: self.tabs.len(),
            });
        }
        self.selected_index = index;
        Ok(())
    }

    /// The currently selected tab. Never fails: a page has at least one tab
    /// and the index is only ever set to a valid position.
    pub fn selected_tab(&self) -> &Tab {
        &self.tabs[self.selected_index]
    }

    /// Select the following tab, wrapping to the first.
    pub fn next_tab(&mut self) -> Result<(), CatalogError> {
        self.select_tab((self.selected_index + 1) % self.tabs.len())
    }

    /// Select the preceding tab, wrapping to the last.
    pub fn previous_tab(&mut self) -> Result<(), CatalogError> {
        let previous = self
            .selected_index
            .checked_sub(1)
            .unwrap_or(self.tabs.len() - 1);
        self.select_tab(previous)
    }
}

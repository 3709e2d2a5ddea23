//! # Catalog Manifests
//!
//! Extra pages authored as TOML, appended to the built-in route table.
//!
//! ```toml
//! [[pages]]
//! route = "composite"
//! label = "Composite Pattern"
//!
//! [[pages.tabs]]
//! label = "Definition"
//!
//! [[pages.tabs.units]]
//! title = "Composite Pattern"
//! description = "Compose objects into tree structures."
//! source = "const Field = ..."
//! language = "js"
//! ```
//!
//! Manifest units never carry live examples.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::config::ConfigError;
use crate::core::content::ContentUnit;
use crate::core::page::Tab;
use crate::core::route_table::{RouteEntry, RouteTable};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Manifest {
    #[serde(default)]
    pub pages: Vec<PageSpec>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PageSpec {
    pub route: String,
    pub label: String,
    #[serde(default)]
    pub tabs: Vec<TabSpec>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TabSpec {
    pub label: String,
    #[serde(default)]
    pub units: Vec<UnitSpec>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UnitSpec {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub source: Option<String>,
    pub language: Option<String>,
}

impl UnitSpec {
    fn to_unit(&self) -> ContentUnit {
        let mut unit = ContentUnit::new(self.title.as_str(), self.description.as_str());
        unit.source = self.source.clone();
        unit.language = self.language.clone();
        unit
    }
}

impl TabSpec {
    fn to_tab(&self) -> Tab {
        Tab::new(
            self.label.as_str(),
            self.units.iter().map(UnitSpec::to_unit).collect::<Vec<_>>(),
        )
    }
}

impl Manifest {
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(ConfigError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let manifest = Self::parse(&contents)?;
        info!(
            "Loaded manifest {} ({} pages)",
            path.display(),
            manifest.pages.len()
        );
        Ok(manifest)
    }

    /// Convert into route entries, keeping file order.
    pub fn into_route_table(self) -> RouteTable {
        self.pages
            .into_iter()
            .map(|page| {
                let tabs = page.tabs;
                RouteEntry::new(page.route, page.label, move || {
                    tabs.iter().map(TabSpec::to_tab).collect()
                })
            })
            .collect()
    }
}

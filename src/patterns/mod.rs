//! # Built-in Pattern Pages
//!
//! The route table compiled into the binary, in menu order. Each submodule
//! exposes a `tabs()` builder for one page; use-case tabs pair a short
//! explanation with a source listing, and some carry a live `Example`
//! written against the pattern they describe.
//!
//! Extra pages can be appended at startup from a TOML manifest
//! (see `core::manifest`).

mod adapter;
mod decorator;
mod factory;
mod observer;
mod overview;
mod strategy;
mod template_method;

use crate::core::content::ContentUnit;
use crate::core::page::Tab;
use crate::core::route_table::{RouteEntry, RouteTable};

/// Listing language for every built-in source block.
const SOURCE_LANGUAGE: &str = "js";

pub fn builtin_route_table() -> RouteTable {
    [
        RouteEntry::new("designpattern", "Design Patterns", overview::tabs),
        RouteEntry::new("decorator", "Decorator Pattern", decorator::tabs),
        RouteEntry::new("strategy", "Strategy Pattern", strategy::tabs),
        RouteEntry::new("observer", "Observer Pattern", observer::tabs),
        RouteEntry::new("templatemethod", "Template Method Pattern", template_method::tabs),
        RouteEntry::new("factory", "Factory Pattern", factory::tabs),
        RouteEntry::new("adaptar", "Adaptar Pattern", adapter::tabs),
    ]
    .into_iter()
    .collect()
}

/// The explanation tab every pattern page opens with.
fn definition(title: &str, description: &str) -> Tab {
    Tab::new("Definition", vec![ContentUnit::new(title, description)])
}

/// A use-case tab: one unit with an explanation and a listing.
fn use_case(label: &str, title: &str, description: &str, source: &str) -> Tab {
    Tab::new(label, vec![use_case_unit(title, description, source)])
}

fn use_case_unit(title: &str, description: &str, source: &str) -> ContentUnit {
    ContentUnit::new(title, description).with_source(SOURCE_LANGUAGE, source)
}

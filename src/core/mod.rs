//! # Core Application Logic
//!
//! This module contains Patternbook's catalog engine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (router)     │
//!                    │  • Page (tab state)     │
//!                    │  • Action / update()    │
//!                    │  • render (pure views)  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │ Plain text │      │   Tests    │
//!     │  Adapter   │      │  (--print) │      │ (cargo)    │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`content`]: `ContentUnit`, `Panel`, and the opaque `Example` handle
//! - [`page`]: `Page` and `Tab`, the per-page tab state machine
//! - [`catalog`]: `Catalog`, route key → page plus navigation state
//! - [`nav`]: `NavShell`, the static menu
//! - [`route_table`]: startup assembly of catalog + menu
//! - [`manifest`]: extra pages loaded from TOML
//! - [`render`]: pure functions producing read-only views
//! - [`state`] / [`action`]: the `App` and its reducer
//! - [`config`]: settings resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod manifest;
pub mod nav;
pub mod page;
pub mod render;
pub mod route_table;
pub mod state;

pub use catalog::Catalog;
pub use content::{ContentUnit, Example, Panel, Renderable};
pub use error::CatalogError;
pub use nav::{NavEntry, NavShell};
pub use page::{Page, Tab};
pub use route_table::{RouteEntry, RouteTable};

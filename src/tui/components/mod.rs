//! # TUI Components
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: top line with app name, page title, and status
//! - `TabStrip`: tab labels of the active page
//! - `NotFound`: placeholder after navigating to an unknown route
//!
//! ### Stateful Components (Event-Driven)
//!
//! A persistent state struct lives in `TuiState` and implements
//! `EventHandler`; a transient wrapper borrows it each frame to render:
//! - `NavMenu` / `NavMenuState`: menu cursor, emits `NavMenuEvent::Activate`
//! - `PanelView` / `PanelViewState`: scrollable tab content
//!
//! Components never read `App` directly. The caller passes what they draw,
//! which keeps every component testable against a `TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── title_bar.rs
//! ├── nav_menu.rs
//! ├── tab_strip.rs
//! ├── panel_view.rs
//! └── not_found.rs
//! ```

mod not_found;
mod tab_strip;
mod title_bar;

pub mod nav_menu;
pub mod panel_view;

pub use nav_menu::{NavMenu, NavMenuEvent, NavMenuState};
pub use not_found::NotFound;
pub use panel_view::{PanelView, PanelViewState};
pub use tab_strip::TabStrip;
pub use title_bar::TitleBar;

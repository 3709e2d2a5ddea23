//! # Actions
//!
//! Everything that can happen in Patternbook becomes an `Action`.
//! User picks a menu entry? That's `Action::Navigate(route_key)`.
//! User presses `2`? That's `Action::SelectTab(1)`.
//!
//! The `update()` function applies an action to the state and reports
//! what the adapter should do next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  Effect (or CatalogError)
//! ```
//!
//! `Navigate` and `SelectTab` are the whole external mutation surface;
//! `NextTab`/`PreviousTab` are conveniences over the same tab state.

use log::warn;

use crate::core::error::CatalogError;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(String),
    SelectTab(usize),
    NextTab,
    PreviousTab,
    Quit,
}

/// What the adapter should do after an action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Result<Effect, CatalogError> {
    match action {
        Action::Navigate(route_key) => match app.catalog.navigate(&route_key) {
            Ok(()) => {
                app.not_found = None;
                app.status_message = app
                    .catalog
                    .active_page()
                    .map(|p| p.title().to_string())
                    .unwrap_or_default();
                Ok(Effect::Redraw)
            }
            Err(err) => {
                warn!("Navigation failed: {}", err);
                app.not_found = Some(route_key);
                app.status_message = err.to_string();
                Err(err)
            }
        },
        Action::SelectTab(index) => match app.catalog.select_tab(index) {
            Ok(()) => {
                app.status_message = selected_label(app);
                Ok(Effect::Redraw)
            }
            Err(err) => {
                warn!("Tab selection failed: {}", err);
                app.status_message = err.to_string();
                Err(err)
            }
        },
        Action::NextTab => cycle_tab(app, true),
        Action::PreviousTab => cycle_tab(app, false),
        Action::Quit => Ok(Effect::Quit),
    }
}

fn cycle_tab(app: &mut App, forward: bool) -> Result<Effect, CatalogError> {
    let page = app
        .catalog
        .active_page_mut()
        .ok_or(CatalogError::NoActivePage)?;
    if forward {
        page.next_tab()?;
    } else {
        page.previous_tab()?;
    }
    app.status_message = selected_label(app);
    Ok(Effect::Redraw)
}

fn selected_label(app: &App) -> String {
    app.catalog
        .active_page()
        .map(|p| format!("{} › {}", p.title(), p.selected_tab().label))
        .unwrap_or_default()
}

//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! ```text
//! TuiEvent ─┬─ Quit / ForceQuit ───────────────► Action::Quit
//!           ├─ NextTab / PreviousTab / 1-9 ────► Action::{NextTab, PreviousTab, SelectTab}
//!           ├─ CursorUp/Down, Activate ─► NavMenuState ─► Action::Navigate
//!           └─ Scroll* ─────────────────► PanelViewState (TUI-local)
//! ```
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms in `poll` and only
//! redraws after an event (key, mouse, or resize) arrived.

mod component;
mod components;
mod event;
pub mod markdown;
mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{NavMenuEvent, NavMenuState, PanelViewState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub nav_menu: NavMenuState,
    pub panel: PanelViewState,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let mut nav_menu = NavMenuState::new(app.nav.len());
        if let Some(active) = app.nav.active_index(&app.catalog) {
            nav_menu.place_cursor(active);
        }
        Self {
            nav_menu,
            panel: PanelViewState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Translate one event into an action, letting TUI-local state consume
/// what it owns.
fn route_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::NextTab => Some(Action::NextTab),
        TuiEvent::PreviousTab => Some(Action::PreviousTab),
        TuiEvent::SelectTab(index) => Some(Action::SelectTab(index)),
        TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Activate => {
            match tui.nav_menu.handle_event(&event)? {
                NavMenuEvent::Activate(index) => app
                    .nav
                    .entry(index)
                    .map(|entry| Action::Navigate(entry.route_key.clone())),
            }
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown
        | TuiEvent::ScrollToTop => {
            tui.panel.handle_event(&event);
            None
        }
        TuiEvent::Resize => None,
    }
}

/// Apply an action. Returns true when the loop should exit.
fn apply(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    let resets_scroll = !matches!(action, Action::Quit);
    match update(app, action) {
        Ok(Effect::Quit) => return true,
        Ok(Effect::Redraw) if resets_scroll => tui.panel.reset(),
        Ok(_) => {}
        // Already logged and shown in the status line by update()
        Err(err) => debug!("Action rejected: {}", err),
    }
    false
}

pub fn run(mut app: App) -> io::Result<()> {
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => guard,
        Err(err) => {
            ratatui::restore();
            return Err(err);
        }
    };

    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if needs_redraw {
            if let Err(err) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(err);
            }
            needs_redraw = false;
        }

        let first_event = match poll_event_timeout(IDLE_POLL) {
            Ok(event) => event,
            Err(err) => break Err(err),
        };
        let Some(first_event) = first_event else {
            continue;
        };
        needs_redraw = true;

        // Drain everything pending before the next draw
        let mut should_quit = false;
        let mut next = Some(first_event);
        while let Some(event) = next {
            if let Some(action) = route_event(&app, &mut tui, event) {
                debug!("Dispatching {:?}", action);
                if apply(&mut app, &mut tui, action) {
                    should_quit = true;
                    break;
                }
            }
            next = match poll_event_immediate() {
                Ok(event) => event,
                Err(err) => {
                    warn!("Failed to read terminal event: {}", err);
                    None
                }
            };
        }

        if should_quit {
            break Ok(());
        }
    };

    ratatui::restore();
    info!("Terminal restored");
    result
}

//! # NavMenu Component
//!
//! Left-hand menu listing every `NavEntry`. The cursor moves freely with
//! Up/Down; Enter activates the entry under it. The entry whose page is on
//! screen is marked with `▶` regardless of where the cursor sits.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `NavMenuState` lives in `TuiState`
//! - `NavMenu` is created each frame with borrowed state and the entries

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::nav::NavEntry;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Events emitted by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMenuEvent {
    /// Navigate to the entry at this index.
    Activate(usize),
}

pub struct NavMenuState {
    pub cursor: usize,
    pub entry_count: usize,
    pub list_state: ListState,
}

impl NavMenuState {
    pub fn new(entry_count: usize) -> Self {
        let mut list_state = ListState::default();
        if entry_count > 0 {
            list_state.select(Some(0));
        }
        Self {
            cursor: 0,
            entry_count,
            list_state,
        }
    }

    /// Move the cursor onto `index`, e.g. to follow the page shown at startup.
    pub fn place_cursor(&mut self, index: usize) {
        if index < self.entry_count {
            self.cursor = index;
            self.list_state.select(Some(index));
        }
    }
}

impl EventHandler for NavMenuState {
    type Event = NavMenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<NavMenuEvent> {
        if self.entry_count == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.place_cursor(self.cursor.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.place_cursor((self.cursor + 1).min(self.entry_count - 1));
                None
            }
            TuiEvent::Activate => Some(NavMenuEvent::Activate(self.cursor)),
            _ => None,
        }
    }
}

pub struct NavMenu<'a> {
    pub entries: &'a [NavEntry],
    /// Index of the entry whose page is on screen
    pub active: Option<usize>,
    state: &'a mut NavMenuState,
}

impl<'a> NavMenu<'a> {
    pub fn new(entries: &'a [NavEntry], active: Option<usize>, state: &'a mut NavMenuState) -> Self {
        Self {
            entries,
            active,
            state,
        }
    }
}

impl Component for NavMenu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Borders plus the two-column marker
        let label_width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let is_active = self.active == Some(i);
                let marker = if is_active { "▶ " } else { "  " };
                let style = if is_active {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(truncate_label(&entry.label, label_width), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Patterns "),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Cut `label` to at most `max_width` display columns, ending in `…` when cut.
fn truncate_label(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    if max_width > 0 {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn entries() -> Vec<NavEntry> {
        vec![
            NavEntry::new("strategy", "Strategy Pattern"),
            NavEntry::new("observer", "Observer Pattern"),
            NavEntry::new("factory", "Factory Pattern"),
        ]
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = NavMenuState::new(3);
        assert!(state.handle_event(&TuiEvent::CursorUp).is_none());
        assert_eq!(state.cursor, 0);

        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.cursor, 2);
        assert_eq!(state.list_state.selected(), Some(2));
    }

    #[test]
    fn test_activate_emits_cursor_index() {
        let mut state = NavMenuState::new(3);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Activate),
            Some(NavMenuEvent::Activate(1))
        );
    }

    #[test]
    fn test_empty_menu_ignores_events() {
        let mut state = NavMenuState::new(0);
        assert!(state.handle_event(&TuiEvent::Activate).is_none());
        assert!(state.handle_event(&TuiEvent::CursorDown).is_none());
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_place_cursor_ignores_out_of_range() {
        let mut state = NavMenuState::new(3);
        state.place_cursor(7);
        assert_eq!(state.cursor, 0);
        state.place_cursor(2);
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Strategy Pattern", 20), "Strategy Pattern");
        assert_eq!(truncate_label("Template Method Pattern", 10), "Template …");
        assert_eq!(truncate_label("Pattern", 0), "");
    }

    #[test]
    fn test_render_marks_active_entry() {
        let entries = entries();
        let mut state = NavMenuState::new(entries.len());
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();
        terminal
            .draw(|f| NavMenu::new(&entries, Some(1), &mut state).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..30).map(|x| buffer[(x, y)].symbol().to_string()).collect()
        };
        assert!(row(1).contains("Strategy Pattern"));
        assert!(!row(1).contains('▶'));
        assert!(row(2).contains("▶ Observer Pattern"));
    }
}

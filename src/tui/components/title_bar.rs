//! # TitleBar Component
//!
//! Single-line bar at the top of the screen.
//!
//! The text degrades with the available information:
//!
//! 1. **Page and status**: `"Patternbook | Strategy Pattern | Strategy Pattern › Payment"`
//! 2. **Status only**: `"Patternbook | Welcome to Patternbook!"`
//! 3. **Nothing**: `"Patternbook"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    /// Title of the page on screen, if any
    pub page_title: Option<&'a str>,
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(page_title: Option<&'a str>, status_message: &'a str) -> Self {
        Self {
            page_title,
            status_message,
        }
    }

    pub fn text(&self) -> String {
        let mut parts = vec!["Patternbook"];
        if let Some(title) = self.page_title {
            parts.push(title);
        }
        if !self.status_message.is_empty() {
            parts.push(self.status_message);
        }
        parts.join(" | ")
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|f| title_bar.render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_page_and_status() {
        let mut bar = TitleBar::new(Some("Strategy Pattern"), "Strategy Pattern › Payment");
        let text = rendered(&mut bar);
        assert!(text.contains("Patternbook | Strategy Pattern | Strategy Pattern › Payment"));
    }

    #[test]
    fn test_title_bar_status_only() {
        let bar = TitleBar::new(None, "Welcome to Patternbook!");
        assert_eq!(bar.text(), "Patternbook | Welcome to Patternbook!");
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut bar = TitleBar::new(None, "");
        let text = rendered(&mut bar);
        assert!(text.contains("Patternbook"));
        assert!(!text.contains('|'));
    }
}

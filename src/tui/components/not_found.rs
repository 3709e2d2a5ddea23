//! # NotFound Component
//!
//! Shown in place of the page area after navigating to an unknown route.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::component::Component;

pub struct NotFound<'a> {
    pub route_key: &'a str,
}

impl<'a> NotFound<'a> {
    pub fn new(route_key: &'a str) -> Self {
        Self { route_key }
    }
}

impl Component for NotFound<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Page not found",
                Style::default().fg(Color::Red),
            )),
            Line::default(),
            Line::from(format!("No page is registered under '{}'.", self.route_key)),
            Line::from("Pick an entry from the menu to continue."),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" 404 "),
            );
        frame.render_widget(paragraph, area);
    }
}

//! # TabStrip Component
//!
//! One-line row of tab labels for the active page, selected label highlighted.
//! Labels are numbered since the digit keys jump straight to a tab.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Tabs;

use crate::tui::component::Component;

pub struct TabStrip<'a> {
    pub labels: &'a [&'a str],
    pub selected: usize,
}

impl<'a> TabStrip<'a> {
    pub fn new(labels: &'a [&'a str], selected: usize) -> Self {
        Self { labels, selected }
    }
}

impl Component for TabStrip<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = self.labels.iter().enumerate().map(|(i, label)| {
            if i < 9 {
                Line::from(format!("{} {}", i + 1, label))
            } else {
                Line::from(label.to_string())
            }
        });

        let tabs = Tabs::new(titles)
            .select(self.selected)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("│");

        frame.render_widget(tabs, area);
    }
}

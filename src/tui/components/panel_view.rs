//! # PanelView Component
//!
//! Scrollable body of the selected tab.
//!
//! ## Architecture
//!
//! `PanelView` is a transient component (created each frame) that wraps
//! `&'a mut PanelViewState` (persistent scroll state) and the rendered
//! blocks of the current panel (props). Every frame re-derives the text from
//! the blocks; nothing about the panel content is cached.
//!
//! Block styling:
//! - **Title**: bold yellow heading
//! - **Description**: markdown
//! - **Example**: framed live output, captioned with the example's name
//! - **Source**: syntax-highlighted listing (hidden when `show_source` is off)

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::render::RenderedBlock;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::markdown;

/// Scroll state for the panel body. Lives in `TuiState`.
#[derive(Default)]
pub struct PanelViewState {
    pub scroll_state: ScrollViewState,
    /// Content height measured on the last render (for scroll clamping)
    pub content_height: u16,
    /// Viewport height measured on the last render
    pub viewport_height: u16,
}

impl PanelViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, e.g. after switching tab or page.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    /// Keep the offset within the content measured on the last frame.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for PanelViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::ScrollToTop => self.scroll_state.scroll_to_top(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

pub struct PanelView<'a> {
    pub blocks: &'a [RenderedBlock<'a>],
    pub show_source: bool,
    state: &'a mut PanelViewState,
}

impl<'a> PanelView<'a> {
    pub fn new(
        blocks: &'a [RenderedBlock<'a>],
        show_source: bool,
        state: &'a mut PanelViewState,
    ) -> Self {
        Self {
            blocks,
            show_source,
            state,
        }
    }
}

/// Build the styled text for a panel.
pub fn panel_text(blocks: &[RenderedBlock<'_>], show_source: bool) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    for block in blocks {
        match block {
            RenderedBlock::Title(title) => {
                if !lines.is_empty() {
                    lines.push(Line::default());
                }
                lines.push(Line::from(Span::styled(
                    title.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            RenderedBlock::Description(text) => {
                let rendered = markdown::render(&markdown::dedent(text), Color::Gray);
                lines.extend(rendered.lines);
            }
            RenderedBlock::Example(example) => {
                let frame = Style::default().fg(Color::Cyan);
                lines.push(Line::default());
                lines.push(Line::from(vec![
                    Span::styled("┌─ example: ", frame),
                    Span::styled(example.name().to_string(), frame.add_modifier(Modifier::BOLD)),
                ]));
                for output in example.render() {
                    lines.push(Line::from(vec![
                        Span::styled("│ ", frame),
                        Span::styled(output, Style::default().fg(Color::White)),
                    ]));
                }
                lines.push(Line::from(Span::styled("└─", frame)));
            }
            RenderedBlock::Source { language, text } => {
                if !show_source {
                    continue;
                }
                lines.push(Line::default());
                lines.extend(markdown::render_source(text, *language).lines);
            }
        }
    }

    Text::from(lines)
}

impl<'a> Component for PanelView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // One column reserved for the scrollbar
        let content_width = area.width.saturating_sub(1);

        let paragraph =
            Paragraph::new(panel_text(self.blocks, self.show_source)).wrap(Wrap { trim: false });
        let height = paragraph.line_count(content_width).min(u16::MAX as usize) as u16;

        self.state.content_height = height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

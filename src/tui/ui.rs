use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{NavMenu, NotFound, PanelView, TabStrip, TitleBar};

const MENU_WIDTH: u16 = 30;

const HELP_TEXT: &str =
    " ↑↓ move  Enter open  Tab/←→ switch tab  1-9 jump  PgUp/PgDn scroll  q quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [menu_area, page_area] =
        Layout::horizontal([Length(MENU_WIDTH), Min(0)]).areas(main_area);

    let view = app.current_view();

    TitleBar::new(view.as_ref().map(|v| v.title), &app.status_message).render(frame, title_area);

    let active = app.nav.active_index(&app.catalog);
    NavMenu::new(app.nav.entries(), active, &mut tui.nav_menu).render(frame, menu_area);

    match (&app.not_found, view) {
        (Some(route_key), _) => NotFound::new(route_key).render(frame, page_area),
        (None, Some(view)) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ", view.title));
            let inner = block.inner(page_area);
            frame.render_widget(block, page_area);

            let [tabs_area, _, panel_area] =
                Layout::vertical([Length(1), Length(1), Min(0)]).areas(inner);
            TabStrip::new(&view.tab_labels, view.selected).render(frame, tabs_area);
            PanelView::new(&view.blocks, app.show_source, &mut tui.panel)
                .render(frame, panel_area);
        }
        (None, None) => draw_empty(frame, page_area),
    }

    frame.render_widget(
        Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray))),
        help_area,
    );
}

/// Nothing navigated and no default route.
fn draw_empty(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Select a pattern from the menu.")
        .style(Style::default().fg(Color::DarkGray))
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App) -> String {
        let mut tui = TuiState::new(app);
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| draw_ui(f, app, &mut tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draws_active_page() {
        let mut app = test_app();
        app.catalog.navigate("observer").unwrap();
        let text = draw(&app);
        assert!(text.contains("▶ Observer Pattern"));
        assert!(text.contains("2 Shopping Cart"));
        assert!(text.contains("Definition title"));
    }

    #[test]
    fn test_draws_not_found_instead_of_page() {
        let mut app = test_app();
        app.catalog.navigate("strategy").unwrap();
        app.not_found = Some("visitor".to_string());
        let text = draw(&app);
        assert!(text.contains("Page not found"));
        assert!(!text.contains("Definition title"));
    }

    #[test]
    fn test_draws_placeholder_without_page() {
        let text = draw(&test_app());
        assert!(text.contains("Select a pattern from the menu."));
    }
}

//! # Rendering Boundary
//!
//! Pure functions that turn the engine's data into plain read-only
//! structures for a renderer. Nothing here is cached: every call re-derives
//! the output from the current page and panel.
//!
//! ```text
//! Page ──page_view()──► PageView { tab_labels, selected, blocks }
//!                                                      │
//! Panel ──render_panel()──► [Title, Description, Example?, Source?, ...]
//! ```

use crate::core::content::{Panel, Renderable};
use crate::core::page::Page;

/// One visual block of a panel, in display order.
#[derive(Debug, Clone)]
pub enum RenderedBlock<'a> {
    Title(&'a str),
    Description(&'a str),
    Example(&'a Renderable),
    Source {
        language: Option<&'a str>,
        text: &'a str,
    },
}

/// What a renderer needs to draw the active page.
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    pub route_key: &'a str,
    pub title: &'a str,
    pub tab_labels: Vec<&'a str>,
    pub selected: usize,
    pub blocks: Vec<RenderedBlock<'a>>,
}

/// Flatten a panel into blocks. Units without an example or source simply
/// produce fewer blocks.
pub fn render_panel(panel: &Panel) -> Vec<RenderedBlock<'_>> {
    let mut blocks = Vec::with_capacity(panel.units().len() * 4);
    for unit in panel.units() {
        blocks.push(RenderedBlock::Title(&unit.title));
        blocks.push(RenderedBlock::Description(&unit.description));
        if let Some(example) = &unit.example {
            blocks.push(RenderedBlock::Example(example));
        }
        if let Some(source) = &unit.source {
            blocks.push(RenderedBlock::Source {
                language: unit.language.as_deref(),
                text: source,
            });
        }
    }
    blocks
}

pub fn page_view(page: &Page) -> PageView<'_> {
    PageView {
        route_key: page.route_key(),
        title: page.title(),
        tab_labels: page.tab_labels(),
        selected: page.selected_index(),
        blocks: render_panel(&page.selected_tab().panel),
    }
}

/// Render every tab of a page as wrapped plain text, in tab order.
pub fn page_to_plain_text(page: &Page, width: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} [{}]\n", page.title(), page.route_key()));
    out.push_str(&"=".repeat(width.min(page.title().len() + page.route_key().len() + 3)));
    out.push('\n');

    for (index, tab) in page.tabs().iter().enumerate() {
        out.push_str(&format!("\n## {}. {}\n", index + 1, tab.label));
        out.push_str(&blocks_to_plain_text(&render_panel(&tab.panel), width));
    }
    out
}

/// Plain-text form of a block list. Descriptions are wrapped to `width`;
/// source listings and example output are indented and left as-is.
pub fn blocks_to_plain_text(blocks: &[RenderedBlock<'_>], width: usize) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            RenderedBlock::Title(title) => {
                out.push('\n');
                out.push_str(title);
                out.push('\n');
            }
            RenderedBlock::Description(text) => {
                for paragraph in text.split("\n\n") {
                    let flat = paragraph.split_whitespace().collect::<Vec<_>>().join(" ");
                    if flat.is_empty() {
                        continue;
                    }
                    for line in textwrap::wrap(&flat, width.max(20)) {
                        out.push_str(&line);
                        out.push('\n');
                    }
                    out.push('\n');
                }
            }
            RenderedBlock::Example(example) => {
                out.push_str(&format!("  [example: {}]\n", example.name()));
                for line in example.render() {
                    out.push_str("  | ");
                    out.push_str(&line);
                    out.push('\n');
                }
                out.push('\n');
            }
            RenderedBlock::Source { text, .. } => {
                for line in text.lines() {
                    out.push_str("    ");
                    out.push_str(line);
                    out.push('\n');
                }
                out.push('\n');
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::{ContentUnit, Example};
    use crate::core::page::Tab;

    struct Counter;

    impl Example for Counter {
        fn name(&self) -> &str {
            "counter"
        }

        fn render(&self) -> Vec<String> {
            vec!["count = 3".to_string()]
        }
    }

    fn kinds(blocks: &[RenderedBlock<'_>]) -> Vec<&'static str> {
        blocks
            .iter()
            .map(|b| match b {
                RenderedBlock::Title(_) => "title",
                RenderedBlock::Description(_) => "description",
                RenderedBlock::Example(_) => "example",
                RenderedBlock::Source { .. } => "source",
            })
            .collect()
    }

    #[test]
    fn test_unit_without_example_has_no_example_block() {
        let panel = Panel::new(vec![
            ContentUnit::new("Payment Processing", "Different strategies.")
                .with_source("js", "const pay = () => {};"),
        ]);
        let blocks = render_panel(&panel);
        assert_eq!(kinds(&blocks), ["title", "description", "source"]);

        let text = blocks_to_plain_text(&blocks, 80);
        assert!(text.contains("Payment Processing"));
        assert!(text.contains("Different strategies."));
        assert!(text.contains("const pay"));
        assert!(!text.contains("[example"));
    }

    #[test]
    fn test_full_unit_block_order() {
        let panel = Panel::new(vec![
            ContentUnit::new("A", "a")
                .with_example(Renderable::new(Counter))
                .with_source("js", "x"),
            ContentUnit::new("B", "b"),
        ]);
        assert_eq!(
            kinds(&render_panel(&panel)),
            ["title", "description", "example", "source", "title", "description"]
        );
    }

    #[test]
    fn test_empty_panel_renders_nothing() {
        assert!(render_panel(&Panel::default()).is_empty());
    }

    #[test]
    fn test_page_view_tracks_selection() {
        let mut page = Page::new(
            "strategy",
            "Strategy Pattern",
            vec![
                Tab::new("Definition", vec![ContentUnit::new("What", "w")]),
                Tab::new("Payment", vec![ContentUnit::new("Pay", "p")]),
            ],
        )
        .unwrap();

        page.select_tab(1).unwrap();
        let view = page_view(&page);
        assert_eq!(view.tab_labels, ["Definition", "Payment"]);
        assert_eq!(view.selected, 1);
        assert!(matches!(view.blocks[0], RenderedBlock::Title("Pay")));
    }

    #[test]
    fn test_example_output_in_plain_text() {
        let panel = Panel::new(vec![
            ContentUnit::new("A", "a").with_example(Renderable::new(Counter)),
        ]);
        let text = blocks_to_plain_text(&render_panel(&panel), 80);
        assert!(text.contains("[example: counter]"));
        assert!(text.contains("| count = 3"));
    }

    #[test]
    fn test_page_plain_text_lists_every_tab() {
        let page = Page::new(
            "p",
            "Page",
            vec![
                Tab::new("One", vec![ContentUnit::new("first", "")]),
                Tab::new("Two", vec![ContentUnit::new("second", "")]),
            ],
        )
        .unwrap();
        let text = page_to_plain_text(&page, 60);
        assert!(text.starts_with("Page [p]"));
        assert!(text.contains("## 1. One"));
        assert!(text.contains("## 2. Two"));
        assert!(text.contains("second"));
    }
}

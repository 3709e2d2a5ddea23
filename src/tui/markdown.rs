//! Markdown and source listings → ratatui `Text`.
//!
//! Descriptions are authored as light markdown (headings, bold, italic,
//! inline code, lists, rules). Source listings are plain code, highlighted
//! with syntect when the language tag is known.

use std::sync::LazyLock;

use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const CODE_THEME: &str = "base16-ocean.dark";

/// Parse a description into styled `Text`.
pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut w = Writer::new(base_fg);
    for event in Parser::new_ext(content, opts) {
        w.handle(event);
    }
    w.text
}

/// Render a source listing inside a `╭── lang` / `╰──` frame.
///
/// Leading indentation shared by every non-blank line is stripped first, so
/// listings can be written indented inside Rust string literals.
pub fn render_source(source: &str, language: Option<&str>) -> Text<'static> {
    let border = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    lines.push(match language {
        Some(lang) if !lang.is_empty() => Line::from(vec![
            Span::styled("╭── ", border),
            Span::styled(lang.to_owned(), border.add_modifier(Modifier::BOLD)),
            Span::styled(" ──", border),
        ]),
        _ => Line::from(Span::styled("╭──", border)),
    });

    let code = dedent(source);
    for mut line in highlight(&code, language) {
        line.spans.insert(0, Span::styled("│ ", border));
        lines.push(line);
    }

    lines.push(Line::from(Span::styled("╰──", border)));
    Text::from(lines)
}

/// Highlight `code` line by line. Unknown languages come back as plain white.
fn highlight(code: &str, language: Option<&str>) -> Vec<Line<'static>> {
    let syntax = language.and_then(|lang| SYNTAX_SET.find_syntax_by_token(lang));
    let (Some(syntax), Some(theme)) = (syntax, THEME_SET.themes.get(CODE_THEME)) else {
        let plain = Style::default().fg(Color::White);
        return code
            .lines()
            .map(|l| Line::from(Span::styled(expand_tabs(l), plain)))
            .collect();
    };

    let mut hl = HighlightLines::new(syntax, theme);
    let mut out = Vec::new();
    for line in LinesWithEndings::from(code) {
        let spans: Vec<Span<'static>> = match hl.highlight_line(line, &SYNTAX_SET) {
            Ok(ranges) => ranges
                .into_iter()
                .filter_map(|(hl_style, frag)| {
                    let content = expand_tabs(frag.trim_end_matches('\n'));
                    if content.is_empty() {
                        return None;
                    }
                    let fg = Color::Rgb(
                        hl_style.foreground.r,
                        hl_style.foreground.g,
                        hl_style.foreground.b,
                    );
                    Some(Span::styled(content, Style::default().fg(fg)))
                })
                .collect(),
            Err(_) => vec![Span::raw(expand_tabs(line.trim_end_matches('\n')))],
        };
        out.push(Line::from(spans));
    }
    out
}

/// Ratatui renders `\t` as zero-width.
fn expand_tabs(s: &str) -> String {
    s.replace('\t', "    ")
}

/// Strip the indentation common to all non-blank lines, and drop leading
/// and trailing blank lines.
pub fn dedent(source: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let start = lines.iter().position(|l| !l.trim().is_empty()).unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(start, |i| i + 1);
    let body = &lines[start..end];

    // Counted in chars: leading whitespace may be multi-byte
    let indent = body
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    body.iter()
        .map(|l| {
            let cut = l
                .char_indices()
                .take_while(|(_, c)| c.is_whitespace())
                .take(indent)
                .last()
                .map_or(0, |(i, c)| i + c.len_utf8());
            &l[cut..]
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Writer ──────────────────────────────────────────────────────────────────

struct Writer {
    text: Text<'static>,
    base_fg: Color,
    /// Inline style stack. Styles compose via `patch` so bold+italic works.
    styles: Vec<Style>,
    /// List nesting: None = unordered, Some(n) = ordered at index n.
    list_indices: Vec<Option<u64>>,
    /// Code block text is buffered and highlighted on close.
    code_block: Option<(String, String)>,
    needs_newline: bool,
}

impl Writer {
    fn new(base_fg: Color) -> Self {
        Self {
            text: Text::default(),
            base_fg,
            styles: vec![],
            list_indices: vec![],
            code_block: None,
            needs_newline: false,
        }
    }

    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base_fg))
    }

    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    fn push_line(&mut self, line: Line<'static>) {
        self.text.lines.push(line);
    }

    fn push_span(&mut self, span: Span<'static>) {
        match self.text.lines.last_mut() {
            Some(line) => line.push_span(span),
            None => self.push_line(Line::from(vec![span])),
        }
    }

    fn blank_line_if_needed(&mut self) {
        if self.needs_newline {
            self.push_line(Line::default());
            self.needs_newline = false;
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => self.text(t),
            Event::Code(c) => {
                let style = Style::default().fg(Color::White).bg(Color::DarkGray);
                self.push_span(Span::styled(c.to_string(), style));
            }
            Event::SoftBreak => self.push_span(Span::raw(" ")),
            Event::HardBreak => self.push_line(Line::default()),
            Event::Rule => {
                self.blank_line_if_needed();
                self.push_line(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(Color::DarkGray),
                )));
                self.needs_newline = true;
            }
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
            }
            Tag::Heading { level, .. } => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
                self.push_style(heading_style(self.base_fg, level));
            }
            Tag::CodeBlock(kind) => {
                self.blank_line_if_needed();
                let lang = match kind {
                    pulldown_cmark::CodeBlockKind::Fenced(l) => l.to_string(),
                    pulldown_cmark::CodeBlockKind::Indented => String::new(),
                };
                self.code_block = Some((lang, String::new()));
            }
            Tag::List(start) => {
                if self.list_indices.is_empty() {
                    self.blank_line_if_needed();
                }
                self.list_indices.push(start);
            }
            Tag::Item => {
                self.push_line(Line::default());
                let indent = "  ".repeat(self.list_indices.len().saturating_sub(1));
                if let Some(idx) = self.list_indices.last_mut() {
                    let marker = match idx {
                        None => format!("{indent}• "),
                        Some(n) => {
                            let s = format!("{indent}{n}. ");
                            *n += 1;
                            s
                        }
                    };
                    self.push_span(Span::styled(marker, Style::default().fg(Color::DarkGray)));
                }
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            _ => {}
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.needs_newline = true,
            TagEnd::Heading(_) => {
                self.pop_style();
                self.needs_newline = true;
            }
            TagEnd::CodeBlock => {
                if let Some((lang, code)) = self.code_block.take() {
                    let lang = (!lang.is_empty()).then_some(lang.as_str());
                    for line in render_source(&code, lang).lines {
                        self.push_line(line);
                    }
                }
                self.needs_newline = true;
            }
            TagEnd::List(_) => {
                self.list_indices.pop();
                self.needs_newline = true;
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            _ => {}
        }
    }

    fn text(&mut self, cow: CowStr<'_>) {
        if let Some((_, code)) = self.code_block.as_mut() {
            code.push_str(&cow);
            return;
        }
        let style = self.style();
        self.push_span(Span::styled(expand_tabs(&cow), style));
    }
}

fn heading_style(base_fg: Color, level: HeadingLevel) -> Style {
    match level {
        HeadingLevel::H1 => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        HeadingLevel::H2 => Style::default().fg(base_fg).add_modifier(Modifier::BOLD),
        _ => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &Text<'_>) -> Vec<String> {
        text.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_bold_text_is_bold() {
        let text = render("Some **bold** text", Color::Blue);
        let bold_span = text.lines[0]
            .spans
            .iter()
            .find(|s| s.content == "bold")
            .unwrap();
        assert!(bold_span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_heading_is_bold() {
        let text = render("## What is it", Color::Green);
        let span = &text.lines[0].spans[0];
        assert_eq!(span.content, "What is it");
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(span.style.fg, Some(Color::Green));
    }

    #[test]
    fn test_plain_text_uses_base_color() {
        let text = render("hello", Color::Green);
        assert_eq!(text.lines[0].spans[0].style.fg, Some(Color::Green));
    }

    #[test]
    fn test_bullets() {
        let lines = plain(&render("- one\n- two", Color::White));
        assert!(lines.iter().any(|l| l == "• one"));
        assert!(lines.iter().any(|l| l == "• two"));
    }

    #[test]
    fn test_source_has_border_structure() {
        let lines = plain(&render_source("line1\nline2", None));
        assert_eq!(lines[0], "╭──");
        assert_eq!(lines[1], "│ line1");
        assert_eq!(lines[2], "│ line2");
        assert_eq!(lines.last().unwrap(), "╰──");
    }

    #[test]
    fn test_source_language_label_and_highlighting() {
        let text = render_source("const x = 1;", Some("js"));
        let lines = plain(&text);
        assert!(lines[0].contains("js"));
        assert!(lines[1].contains("const x = 1;"));
        // Highlighted code uses RGB colors from the syntect theme
        let has_rgb = text.lines[1]
            .spans
            .iter()
            .any(|s| matches!(s.style.fg, Some(Color::Rgb(..))));
        assert!(has_rgb);
    }

    #[test]
    fn test_fenced_block_in_description_is_framed() {
        let lines = plain(&render("Intro\n\n```\ncode\n```", Color::White));
        assert!(lines.iter().any(|l| l == "│ code"));
        assert!(lines.iter().any(|l| l == "╰──"));
    }

    #[test]
    fn test_dedent_strips_common_indent() {
        let src = "\n        const a = 1;\n          nested();\n\n        done();\n    ";
        assert_eq!(dedent(src), "const a = 1;\n  nested();\n\ndone();");
    }

    #[test]
    fn test_dedent_multibyte_indent() {
        assert_eq!(dedent(" a\n\u{3000}b"), "a\nb");
        assert_eq!(dedent("  x\n\u{a0}  y"), "x\n y");
        assert_eq!(dedent("\u{3000}\u{3000}one\n\u{3000}two"), "\u{3000}one\ntwo");
    }

    #[test]
    fn test_tabs_expanded() {
        let lines = plain(&render_source("top\n\tindented", None));
        assert_eq!(lines[2], "│     indented");
    }
}

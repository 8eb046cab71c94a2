//! Markup → ratatui `Text` renderer.
//!
//! Feeds `pulldown_cmark` events into a `Writer` that builds styled
//! `Line`/`Span` values: headings, bold, italic, strikethrough, inline code,
//! fenced code blocks (with syntect highlighting), task lists, lists,
//! blockquotes, and links. Syntax the parser doesn't recognize arrives as
//! plain text events, so nothing is ever dropped or rejected.

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const CODE_THEME: &str = "base16-ocean.dark";

/// Render a summary into styled `Text` using the response pane's colors.
///
/// The result owns its strings, so it outlives `content`.
pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);

    let mut w = Writer::new(base_fg);
    for event in Parser::new_ext(content, opts) {
        w.handle(event);
    }
    w.text
}

// Writer

/// An open link: its target and the label text seen so far.
struct OpenLink {
    url: String,
    label: String,
}

struct Writer {
    text: Text<'static>,
    base_fg: Color,
    /// Inline style stack. Styles compose via `patch` so nested bold+italic works.
    styles: Vec<Style>,
    /// Per-line prefix spans (blockquote `│`, code block border, list indent).
    prefixes: Vec<Span<'static>>,
    /// Set after a block closes; the next block opens with a blank line.
    pending_blank: bool,
    /// One entry per open list: `None` for bullets, `Some(next)` when ordered.
    lists: Vec<Option<u64>>,
    /// The last line is a list marker with no content yet, so the item's
    /// first block continues it instead of starting a new line.
    marker_open: bool,
    highlighter: Option<HighlightLines<'static>>,
    in_code: bool,
    link: Option<OpenLink>,
}

impl Writer {
    fn new(base_fg: Color) -> Self {
        Self {
            text: Text::default(),
            base_fg,
            styles: vec![],
            prefixes: vec![],
            pending_blank: false,
            lists: vec![],
            marker_open: false,
            highlighter: None,
            in_code: false,
            link: None,
        }
    }

    // Style stack

    /// Top of the stack, or the base foreground when empty.
    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base_fg))
    }

    fn enter_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn leave_style(&mut self) {
        self.styles.pop();
    }

    // Output lines

    fn push_line(&mut self, line: Line<'static>) {
        let mut out = line;
        for pfx in self.prefixes.iter().rev().cloned() {
            out.spans.insert(0, pfx);
        }
        self.text.lines.push(out);
        self.marker_open = false;
    }

    fn push_span(&mut self, span: Span<'static>) {
        if let Some(line) = self.text.lines.last_mut() {
            line.push_span(span);
        } else {
            self.push_line(Line::from(vec![span]));
        }
        self.marker_open = false;
    }

    fn open_block(&mut self) {
        if self.pending_blank {
            self.push_line(Line::default());
            self.pending_blank = false;
        }
    }

    /// Starts the line a paragraph or heading writes into.
    fn begin_line(&mut self) {
        if self.marker_open {
            self.marker_open = false;
        } else {
            self.push_line(Line::default());
        }
    }

    // ── Events ──────────────────────────────────────────────────────────

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => self.text(t),
            Event::Code(c) => self.inline_code(c),
            Event::SoftBreak => self.push_span(Span::raw(" ")),
            Event::HardBreak => self.push_line(Line::default()),
            Event::Rule => {
                self.open_block();
                self.push_line(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(Color::DarkGray),
                )));
                self.pending_blank = true;
            }
            Event::TaskListMarker(done) => {
                let style = Style::default().fg(Color::DarkGray);
                self.push_span(Span::styled(if done { "[x] " } else { "[ ] " }, style));
            }
            // Raw HTML is shown as written.
            Event::Html(raw) => {
                let style = self.style();
                for line in raw.lines() {
                    self.push_line(Line::from(Span::styled(line.to_owned(), style)));
                }
            }
            Event::InlineHtml(raw) => self.text(raw),
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                self.open_block();
                self.begin_line();
            }
            Tag::Heading { level, .. } => {
                self.open_block();
                self.begin_line();
                let hs = heading_style(self.base_fg, level as usize);
                self.push_span(Span::styled(format!("{} ", "#".repeat(level as usize)), hs));
                self.enter_style(hs);
            }
            Tag::HtmlBlock => self.open_block(),
            Tag::BlockQuote(_) => {
                self.open_block();
                self.prefixes
                    .push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));
                self.enter_style(
                    Style::default()
                        .fg(self.base_fg)
                        .add_modifier(Modifier::DIM | Modifier::ITALIC),
                );
            }
            Tag::CodeBlock(kind) => {
                self.open_block();
                let lang = match &kind {
                    CodeBlockKind::Fenced(info) => info.split_whitespace().next().unwrap_or(""),
                    CodeBlockKind::Indented => "",
                };
                self.open_code_block(lang);
            }
            Tag::List(start) => {
                // A sublist hangs directly under its parent item's text.
                if self.lists.is_empty() {
                    self.open_block();
                } else {
                    self.pending_blank = false;
                }
                self.lists.push(start);
            }
            Tag::Item => {
                // Items are tight: no blank lines between them.
                self.pending_blank = false;
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let m = format!("{n}. ");
                        *n = n.saturating_add(1);
                        m
                    }
                    _ => "- ".to_string(),
                };
                let width = marker.chars().count();
                self.push_line(Line::from(Span::styled(
                    marker,
                    Style::default().fg(Color::DarkGray),
                )));
                // Continuation lines line up with the text after the marker.
                self.prefixes.push(Span::raw(" ".repeat(width)));
                self.marker_open = true;
            }
            Tag::Emphasis => self.enter_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.enter_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.enter_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { dest_url, .. } => {
                self.link = Some(OpenLink {
                    url: dest_url.to_string(),
                    label: String::new(),
                });
                self.enter_style(link_style());
            }
            _ => {}
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph | TagEnd::HtmlBlock => self.pending_blank = true,
            TagEnd::Heading(_) => {
                self.leave_style();
                self.pending_blank = true;
            }
            TagEnd::BlockQuote(_) => {
                self.prefixes.pop();
                self.leave_style();
                self.pending_blank = true;
            }
            TagEnd::CodeBlock => {
                self.highlighter = None;
                self.in_code = false;
                self.prefixes.pop();
                self.push_line(Line::from(Span::styled(
                    "╰──",
                    Style::default().fg(Color::DarkGray),
                )));
                self.pending_blank = true;
            }
            TagEnd::List(_) => {
                self.lists.pop();
                self.pending_blank = true;
            }
            TagEnd::Item => {
                self.prefixes.pop();
                self.marker_open = false;
                self.pending_blank = false;
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.leave_style(),
            TagEnd::Link => {
                self.leave_style();
                if let Some(link) = self.link.take() {
                    if link.label.is_empty() {
                        let style = self.style().patch(link_style());
                        self.push_span(Span::styled(link.url, style));
                    } else if link.label != link.url {
                        self.push_span(Span::raw(" ("));
                        self.push_span(Span::styled(link.url, link_style()));
                        self.push_span(Span::raw(")"));
                    }
                }
            }
            _ => {}
        }
    }

    fn open_code_block(&mut self, lang: &str) {
        let bs = Style::default().fg(Color::DarkGray);
        let top = if lang.is_empty() {
            Line::from(Span::styled("╭──", bs))
        } else {
            Line::from(vec![
                Span::styled("╭── ", bs),
                Span::styled(lang.to_owned(), bs.add_modifier(Modifier::BOLD)),
                Span::styled(" ──", bs),
            ])
        };
        self.push_line(top);
        self.prefixes.push(Span::styled("│ ", bs));

        let syntax = (!lang.is_empty())
            .then(|| SYNTAX_SET.find_syntax_by_token(lang))
            .flatten();
        self.highlighter = match (syntax, THEME_SET.themes.get(CODE_THEME)) {
            (Some(syn), Some(theme)) => Some(HighlightLines::new(syn, theme)),
            _ => None,
        };
        self.in_code = true;
    }

    // ── Content ─────────────────────────────────────────────────────────

    fn text(&mut self, cow: CowStr<'_>) {
        // ratatui renders \t as zero-width
        let text = cow.replace('\t', "    ");

        if self.in_code {
            self.code_text(&text);
            return;
        }

        if let Some(link) = self.link.as_mut() {
            link.label.push_str(&text);
        }
        let style = self.style();
        self.push_span(Span::styled(text, style));
    }

    fn code_text(&mut self, text: &str) {
        // Taken out so highlighting can run while lines are pushed.
        if let Some(mut hl) = self.highlighter.take() {
            for line in LinesWithEndings::from(text) {
                let spans: Vec<Span<'static>> = match hl.highlight_line(line, &SYNTAX_SET) {
                    Ok(ranges) => ranges
                        .into_iter()
                        .filter_map(|(hl_style, frag)| {
                            let content = frag.trim_end_matches('\n').to_string();
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
                    Err(_) => vec![Span::raw(line.trim_end_matches('\n').to_string())],
                };
                self.push_line(Line::from(spans));
            }
            self.highlighter = Some(hl);
        } else {
            let code_style = Style::default().fg(Color::White);
            for line in text.lines() {
                self.push_line(Line::from(Span::styled(line.to_owned(), code_style)));
            }
        }
    }

    fn inline_code(&mut self, cow: CowStr<'_>) {
        if let Some(link) = self.link.as_mut() {
            link.label.push_str(&cow);
        }
        let style = Style::default().fg(Color::White).bg(Color::DarkGray);
        self.push_span(Span::styled(cow.to_string(), style));
    }
}

// Styling

fn heading_style(base_fg: Color, depth: usize) -> Style {
    match depth {
        1 => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        2 => Style::default().fg(base_fg).add_modifier(Modifier::BOLD),
        _ => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    }
}

fn link_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED)
}

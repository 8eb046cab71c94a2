//! # Header Component
//!
//! Product name and tagline above the input box.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::components::title_bar::APP_NAME;

pub const TAGLINE: &str = "Scrape websites & YouTube videos effortlessly. \
Extract key insights, summaries, and data in seconds.";

pub struct Header;

impl Header {
    fn lines() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::styled(
                    APP_NAME,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" v{}", env!("CARGO_PKG_VERSION")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::default(),
            Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
        ]
    }

    fn paragraph() -> Paragraph<'static> {
        Paragraph::new(Self::lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }

    /// Rows the header occupies once the tagline wraps at `width`.
    pub fn required_height(width: u16) -> u16 {
        Self::paragraph().line_count(width) as u16
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Self::paragraph(), area);
    }
}

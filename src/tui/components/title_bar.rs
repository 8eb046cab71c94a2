//! # TitleBar Component
//!
//! One-line status strip at the top of the screen:
//!
//! ```text
//! WebScrap AI | http://localhost:5000 | Processing...
//! ```
//!
//! Stateless and props-only. The backend URL comes from the resolved config,
//! the status from `App::status_message`. An empty status drops its segment
//! so no dangling separator is drawn.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const APP_NAME: &str = "WebScrap AI";

pub struct TitleBar {
    pub backend_url: String,
    pub status_message: String,
    pub is_loading: bool,
}

impl TitleBar {
    pub fn new(backend_url: String, status_message: String, is_loading: bool) -> Self {
        Self {
            backend_url,
            status_message,
            is_loading,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let separator = Span::styled(" | ", Style::default().fg(Color::DarkGray));
        let mut spans = vec![
            Span::styled(APP_NAME, Style::default().add_modifier(Modifier::BOLD)),
            separator.clone(),
            Span::styled(self.backend_url.clone(), Style::default().fg(Color::DarkGray)),
        ];

        if !self.status_message.is_empty() {
            let status_style = if self.is_loading {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            spans.push(separator);
            spans.push(Span::styled(self.status_message.clone(), status_style));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

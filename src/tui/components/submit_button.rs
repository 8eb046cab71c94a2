//! # SubmitButton Component
//!
//! Reads `Submit` while idle and `Processing...` with a braille spinner
//! while a request is outstanding. The label is greyed out whenever Enter
//! would be rejected (blank input or loading).

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Bordered, one label row.
pub const BUTTON_HEIGHT: u16 = 3;

pub struct SubmitButton {
    pub loading: bool,
    pub enabled: bool,
    pub spinner_frame: usize,
}

impl SubmitButton {
    pub fn label(&self) -> String {
        if self.loading {
            let frame = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            format!("{frame} Processing...")
        } else {
            "Submit".to_string()
        }
    }
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.loading {
            Style::default().fg(Color::Yellow)
        } else if self.enabled {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let button = Paragraph::new(self.label())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(button, area);
    }
}

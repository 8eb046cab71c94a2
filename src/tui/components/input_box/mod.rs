//! # InputBox Component
//!
//! Multi-line text entry for the URL, keywords or free text to summarize.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, bracketed paste, Ctrl+J newlines)
//! - Handle editing (backspace, delete, char/word/row cursor motion)
//! - Report submission (Enter) without clearing the buffer
//! - Show a placeholder while empty and the detected input kind in the title
//!
//! ## State Management
//!
//! The buffer is internal state; the event loop mirrors it into
//! `App::input_text` on every `InputEvent::Changed`. `loading` and `kind`
//! are props from the application state.

mod cursor;
mod layout;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::input::InputKind;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use layout::{
    MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, next_char_boundary, next_word_boundary,
    prev_char_boundary, prev_word_boundary, wrap_rows,
};

pub const PLACEHOLDER: &str = "Enter text, URL, or keywords...";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Buffer contents changed.
    Changed,
    /// Only the cursor moved.
    Moved,
    /// Enter pressed. Whether anything is sent is the controller's call.
    Submit,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// A submission is outstanding (Prop)
    pub loading: bool,
    /// Detected kind of the current text (Prop)
    pub kind: Option<InputKind>,
    cursor: CursorState,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            loading: false,
            kind: None,
            cursor: CursorState::new(),
        }
    }

    /// Height needed for the current buffer at `area_width`, between
    /// one and `MAX_VISIBLE_LINES` rows plus borders.
    pub fn calculate_height(&self, area_width: u16) -> u16 {
        let rows = wrap_rows(&self.buffer, inner_width(area_width)).len() as u16;
        rows.clamp(1, MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    fn title(&self) -> String {
        match self.kind {
            Some(kind) => format!("Input · {}", kind.label()),
            None => "Input".to_string(),
        }
    }

    fn visible_lines(&self, area_width: u16) -> Vec<Line<'static>> {
        wrap_rows(&self.buffer, inner_width(area_width))
            .into_iter()
            .skip(self.cursor.scroll_offset as usize)
            .take(MAX_VISIBLE_LINES as usize)
            .map(|row| Line::raw(self.buffer[row.start..row.end].to_string()))
            .collect()
    }

    fn render_scrollbar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

        let total = wrap_rows(&self.buffer, inner_width(area.width)).len();
        if total <= MAX_VISIBLE_LINES as usize {
            return;
        }

        let mut state = ScrollbarState::default()
            .content_length(total - MAX_VISIBLE_LINES as usize)
            .position(self.cursor.scroll_offset as usize);
        let track = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            track,
            &mut state,
        );
    }

    fn insert(&mut self, text: &str) -> Option<InputEvent> {
        if text.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
        Some(InputEvent::Changed)
    }

    fn move_to(&mut self, pos: usize) -> Option<InputEvent> {
        (pos != self.cursor.pos).then(|| {
            self.cursor.pos = pos;
            InputEvent::Moved
        })
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_area_width = area.width;
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let text_style = if self.loading {
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Green)
        };
        let border_style = if self.loading {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .title(self.title());

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(self.visible_lines(area.width)).style(text_style)
        };

        frame.render_widget(paragraph.block(block), area);
        self.render_scrollbar(frame, area);

        frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let pos = self.cursor.pos;
        match event {
            TuiEvent::InputChar(c) => self.insert(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => {
                // Some terminals deliver pasted line breaks as CR.
                let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
                self.insert(&normalized)
            }
            TuiEvent::Backspace => (pos > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, pos);
                self.buffer.drain(prev..pos);
                self.cursor.pos = prev;
                InputEvent::Changed
            }),
            TuiEvent::Delete => (pos < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, pos);
                self.buffer.drain(pos..next);
                InputEvent::Changed
            }),
            TuiEvent::CursorLeft => self.move_to(prev_char_boundary(&self.buffer, pos)),
            TuiEvent::CursorRight => self.move_to(next_char_boundary(&self.buffer, pos)),
            TuiEvent::WordLeft => self.move_to(prev_word_boundary(&self.buffer, pos)),
            TuiEvent::WordRight => self.move_to(next_word_boundary(&self.buffer, pos)),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..pos].rfind('\n').map_or(0, |i| i + 1);
                self.move_to(line_start)
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[pos..]
                    .find('\n')
                    .map_or(self.buffer.len(), |i| pos + i);
                self.move_to(line_end)
            }
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(&self.buffer, -1)
                .then_some(InputEvent::Moved),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(&self.buffer, 1)
                .then_some(InputEvent::Moved),
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}

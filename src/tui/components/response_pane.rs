//! # ResponsePane Component
//!
//! Scrollable "Response:" panel holding the rendered summary (or the fixed
//! error message).
//!
//! ## Architecture
//!
//! Same split as the other stateful views: `ResponsePaneState` lives in
//! `TuiState` across frames (scroll offset, parsed text cache) and
//! `ResponsePane` is built each frame around a `&mut` to it plus the
//! current `App::response_text`.
//!
//! Markup is rendered once per completed submission, keyed on
//! `App::completions`. Each completion also resets the scroll to the top,
//! even when the text is identical to the previous one.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::markdown;

pub const RESPONSE_TITLE: &str = "Response:";
const BASE_FG: Color = Color::Blue;

pub struct ResponsePaneState {
    pub scroll_state: ScrollViewState,
    /// Completion count the cached `text` was rendered for.
    rendered_for: Option<u64>,
    text: Text<'static>,
    /// Wrapped height and viewport height from the last render.
    content_height: u16,
    viewport_height: u16,
}

impl Default for ResponsePaneState {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponsePaneState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            rendered_for: None,
            text: Text::default(),
            content_height: 0,
            viewport_height: 0,
        }
    }

    /// Re-renders `source` if `completion` hasn't been rendered yet.
    /// Returns whether it did.
    pub fn sync(&mut self, source: &str, completion: u64) -> bool {
        if self.rendered_for == Some(completion) {
            return false;
        }
        self.text = markdown::render(source, BASE_FG);
        self.rendered_for = Some(completion);
        self.scroll_state.scroll_to_top();
        true
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Pages by the viewport height measured on the last render.
    fn scroll_by_page(&mut self, down: bool) {
        let page = self.viewport_height.max(1);
        let y = self.scroll_state.offset().y;
        let y = if down {
            y.saturating_add(page)
        } else {
            y.saturating_sub(page)
        };
        self.scroll_state.set_offset(Position { x: 0, y });
    }

    fn clamp_scroll(&mut self) {
        let current = self.scroll_state.offset();
        let max_y = self.max_offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
        }
    }
}

pub struct ResponsePane<'a> {
    pub state: &'a mut ResponsePaneState,
    pub response_text: &'a str,
    pub completion: u64,
}

impl<'a> ResponsePane<'a> {
    pub fn new(state: &'a mut ResponsePaneState, response_text: &'a str, completion: u64) -> Self {
        Self {
            state,
            response_text,
            completion,
        }
    }
}

impl Component for ResponsePane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.response_text, self.completion);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BASE_FG))
            .title(RESPONSE_TITLE)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Last column is reserved for the scrollbar.
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.state.text.clone()).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width).min(u16::MAX as usize) as u16;

        self.state.content_height = content_height;
        self.state.viewport_height = inner.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

/// Scrolling mutates persistent state, so the handler lives on the state.
impl EventHandler for ResponsePaneState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_by_page(false),
            TuiEvent::ScrollPageDown => self.scroll_by_page(true),
            _ => return None,
        }
        self.clamp_scroll();
        Some(())
    }
}

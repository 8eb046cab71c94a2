//! Cursor position and internal scroll for the InputBox.
//!
//! `CursorState` never owns text. Every method takes the buffer explicitly
//! and works from the rows produced by [`wrap_rows`].

use super::layout::{
    MAX_VISIBLE_LINES, Row, TEXT_X_OFFSET, TEXT_Y_OFFSET, inner_width, row_of, wrap_rows,
};
use ratatui::layout::Rect;

pub(super) struct CursorState {
    /// Byte offset into the buffer, always on a char boundary.
    pub pos: usize,
    /// First visible row when the text is taller than the box.
    pub scroll_offset: u16,
    /// Area width from the last render; vertical motion wraps against it.
    pub last_area_width: u16,
}

/// Chars between `row.start` and `pos`, clamped to the row's visible span.
fn column_in_row(buffer: &str, row: &Row, pos: usize) -> usize {
    let end = pos.clamp(row.start, row.end);
    buffer[row.start..end].chars().count()
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_area_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Moves one visual row up (`-1`) or down (`1`), keeping the column
    /// where the target row is long enough. Returns `false` at the edges.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16) -> bool {
        let rows = wrap_rows(buffer, inner_width(self.last_area_width));
        let current = row_of(&rows, self.pos);
        let target = if direction < 0 {
            match current.checked_sub(1) {
                Some(t) => t,
                None => return false,
            }
        } else if current + 1 < rows.len() {
            current + 1
        } else {
            return false;
        };

        let column = column_in_row(buffer, &rows[current], self.pos);
        let row = rows[target];
        self.pos = buffer[row.start..row.end]
            .char_indices()
            .nth(column)
            .map(|(i, _)| row.start + i)
            .unwrap_or(row.end);
        true
    }

    /// Keeps the cursor row inside the visible window.
    pub fn update_scroll_offset(&mut self, buffer: &str, area_width: u16) {
        let rows = wrap_rows(buffer, inner_width(area_width));
        if rows.len() <= MAX_VISIBLE_LINES as usize {
            self.scroll_offset = 0;
            return;
        }

        let cursor_row = row_of(&rows, self.pos) as u16;
        if cursor_row < self.scroll_offset {
            self.scroll_offset = cursor_row;
        } else if cursor_row >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = cursor_row + 1 - MAX_VISIBLE_LINES;
        }
        let max_offset = rows.len() as u16 - MAX_VISIBLE_LINES;
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    /// Terminal (column, row) of the cursor inside `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        let rows = wrap_rows(buffer, width);
        let index = row_of(&rows, self.pos);
        let column = (column_in_row(buffer, &rows[index], self.pos) as u16).min(width);
        let visible_row = (index as u16).saturating_sub(self.scroll_offset);
        (
            area.x + TEXT_X_OFFSET + column,
            area.y + TEXT_Y_OFFSET + visible_row,
        )
    }
}

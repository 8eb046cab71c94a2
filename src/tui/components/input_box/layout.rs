//! Wrapped-row geometry for the input box.
//!
//! The buffer is split on `\n` into logical lines and each is soft-wrapped
//! with `textwrap`. Every visual row keeps its byte range in the buffer so
//! the cursor can be mapped to a (row, column) pair and back without
//! re-wrapping fragments.

/// Border (2) + horizontal padding (2).
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders.
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Rows shown before the box scrolls internally.
pub(super) const MAX_VISIBLE_LINES: u16 = 5;
/// Left border + left padding.
pub(super) const TEXT_X_OFFSET: u16 = 2;
pub(super) const TEXT_Y_OFFSET: u16 = 1;

/// Byte range `start..end` of one visual row. Excludes the newline and the
/// whitespace textwrap drops at a soft break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Row {
    pub start: usize,
    pub end: usize,
}

pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Splits `buffer` into visual rows at `width` columns. Always returns at
/// least one row; a trailing newline yields a final empty row.
pub(super) fn wrap_rows(buffer: &str, width: u16) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut line_start = 0;

    for line in buffer.split('\n') {
        if width == 0 || line.is_empty() {
            rows.push(Row {
                start: line_start,
                end: line_start + line.len(),
            });
        } else {
            let first = rows.len();
            let mut offset = 0;
            for segment in textwrap::wrap(line, wrap_options(width)) {
                let found = line[offset..].find(segment.as_ref()).unwrap_or(0);
                let start = offset + found;
                let end = (start + segment.len()).min(line.len());
                rows.push(Row {
                    start: line_start + start,
                    end: line_start + end,
                });
                offset = end;
            }
            // Trailing spaces stay on the line's last row so the cursor can
            // sit after them.
            if rows.len() == first {
                rows.push(Row {
                    start: line_start,
                    end: line_start,
                });
            }
            if let Some(last) = rows.last_mut() {
                last.end = line_start + line.len();
            }
        }
        line_start += line.len() + 1;
    }

    rows
}

/// Index of the row holding byte position `pos`: the last row starting at
/// or before it.
pub(super) fn row_of(rows: &[Row], pos: usize) -> usize {
    rows.iter()
        .rposition(|row| row.start <= pos)
        .unwrap_or(0)
}

pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    let mut p = pos.saturating_sub(1);
    while p > 0 && !text.is_char_boundary(p) {
        p -= 1;
    }
    p
}

pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    let mut p = (pos + 1).min(text.len());
    while p < text.len() && !text.is_char_boundary(p) {
        p += 1;
    }
    p
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start of the word before `pos`, skipping any separators first
/// (readline `backward-word`).
pub(super) fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let mut start = pos;
    let mut in_word = false;
    for (i, c) in text[..pos].char_indices().rev() {
        if is_word_char(c) {
            in_word = true;
        } else if in_word {
            break;
        }
        start = i;
    }
    start
}

/// End of the word after `pos`, skipping any separators first
/// (readline `forward-word`).
pub(super) fn next_word_boundary(text: &str, pos: usize) -> usize {
    let mut in_word = false;
    for (i, c) in text[pos..].char_indices() {
        if is_word_char(c) {
            in_word = true;
        } else if in_word {
            return pos + i;
        }
    }
    text.len()
}

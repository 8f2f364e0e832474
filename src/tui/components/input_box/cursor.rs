//! Cursor position tracking and navigation for the task editor.
//!
//! `CursorState` owns the cursor byte offset, the scroll offset, and the
//! area size seen at the last render. All methods take `buffer: &str`
//! explicitly; the text itself belongs to `InputBox`.

use super::text_wrap::{
    LEFT_OFFSET, TOP_OFFSET, inner_height, inner_width, row_starts, wrap_line_count,
};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Cursor and scroll state, separated from the text buffer.
pub(super) struct CursorState {
    /// Byte offset in the buffer (0..=buffer.len()), always on a char boundary
    pub pos: usize,
    /// First visual row shown (0 when everything fits)
    pub scroll_offset: u16,
    /// Area width from the last render
    pub last_width: u16,
    /// Area height from the last render
    pub last_height: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 60;
    const DEFAULT_HEIGHT: u16 = 12;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_width: Self::DEFAULT_WIDTH,
            last_height: Self::DEFAULT_HEIGHT,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Visual (row, column) of byte offset `pos` when wrapped to `area_width`.
    ///
    /// Rows are counted over the whole buffer as displayed, so a word that
    /// moves to the next row carries the cursor with it.
    pub fn locate(buffer: &str, pos: usize, area_width: u16) -> (u16, u16) {
        let width = inner_width(area_width);
        if width == 0 {
            return (0, 0);
        }

        let line_start = buffer[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let line_end = buffer[pos..]
            .find('\n')
            .map(|i| pos + i)
            .unwrap_or(buffer.len());

        let rows_above: usize = if line_start == 0 {
            0
        } else {
            buffer[..line_start - 1]
                .split('\n')
                .map(|line| row_starts(line, width).len())
                .sum()
        };

        let line = &buffer[line_start..line_end];
        let offset = pos - line_start;
        let starts = row_starts(line, width);
        let row = starts.iter().rposition(|&s| s <= offset).unwrap_or(0);

        // Measure the raw slice: typed spaces textwrap would trim still move
        // the cursor right
        let col = (line[starts[row]..offset].width() as u16).min(width);

        ((rows_above + row) as u16, col)
    }

    /// The cursor's own visual (row, column).
    pub fn row_col(&self, buffer: &str) -> (u16, u16) {
        Self::locate(buffer, self.pos, self.last_width)
    }

    /// Move one visual row up (`direction < 0`) or down, keeping the column
    /// where the target row is long enough.
    ///
    /// Returns `true` if the cursor moved.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16) -> bool {
        let (row, col) = self.row_col(buffer);
        let target_row = if direction < 0 {
            match row.checked_sub(1) {
                Some(r) => r,
                None => return false,
            }
        } else {
            row + 1
        };

        // Best position on the target row: rightmost column not past `col`
        let mut best: Option<(usize, u16)> = None;
        let boundaries = buffer
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(buffer.len()));
        for candidate in boundaries {
            let (r, c) = Self::locate(buffer, candidate, self.last_width);
            if r < target_row {
                continue;
            }
            if r > target_row {
                break;
            }
            match best {
                None => best = Some((candidate, c)),
                Some(_) if c <= col => best = Some((candidate, c)),
                Some(_) => {}
            }
        }

        match best {
            Some((candidate, _)) if candidate != self.pos => {
                self.pos = candidate;
                true
            }
            _ => false,
        }
    }

    /// Keep the cursor row inside the visible window.
    pub fn update_scroll_offset(&mut self, buffer: &str) {
        let width = inner_width(self.last_width);
        let visible = inner_height(self.last_height);
        let total = wrap_line_count(buffer, width);

        if total <= visible {
            self.scroll_offset = 0;
            return;
        }

        let (row, _) = self.row_col(buffer);
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + visible {
            self.scroll_offset = row + 1 - visible;
        }
        self.scroll_offset = self.scroll_offset.min(total - visible);
    }

    /// Terminal (column, row) for the cursor inside `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let (row, col) = Self::locate(buffer, self.pos, area.width);
        let visible_row = row.saturating_sub(self.scroll_offset);
        (
            area.x + LEFT_OFFSET + col,
            area.y + TOP_OFFSET + visible_row,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 24 wide → 20 text columns
    const WIDTH: u16 = 24;

    fn cursor_at(pos: usize) -> CursorState {
        let mut cursor = CursorState::new();
        cursor.pos = pos;
        cursor.last_width = WIDTH;
        cursor
    }

    #[test]
    fn locate_start_and_end_of_lines() {
        let buffer = "Buy milk\nCall";
        assert_eq!(CursorState::locate(buffer, 0, WIDTH), (0, 0));
        assert_eq!(CursorState::locate(buffer, 8, WIDTH), (0, 8));
        assert_eq!(CursorState::locate(buffer, 9, WIDTH), (1, 0));
        assert_eq!(CursorState::locate(buffer, buffer.len(), WIDTH), (1, 4));
    }

    #[test]
    fn locate_counts_trailing_spaces() {
        assert_eq!(CursorState::locate("ab  ", 4, WIDTH), (0, 4));
    }

    #[test]
    fn locate_after_trailing_newline() {
        assert_eq!(CursorState::locate("A\n", 2, WIDTH), (1, 0));
    }

    #[test]
    fn locate_uses_display_width() {
        // Wide glyph takes two columns
        assert_eq!(CursorState::locate("日x", "日x".len(), WIDTH), (0, 3));
    }

    #[test]
    fn locate_after_soft_break_ignores_dropped_space() {
        // 9 wide → 5 text columns: "aaaa" / "bbbb"
        let buffer = "aaaa bbbb";
        assert_eq!(CursorState::locate(buffer, 4, 9), (0, 4));
        assert_eq!(CursorState::locate(buffer, 5, 9), (1, 0));
        assert_eq!(CursorState::locate(buffer, buffer.len(), 9), (1, 4));
    }

    #[test]
    fn locate_mid_word_follows_displayed_wrap() {
        // 10 wide → 6 text columns: "aaa" / "bbbbbb"
        let buffer = "aaa bbbbbb";
        assert_eq!(CursorState::locate(buffer, 5, 10), (1, 1));
    }

    #[test]
    fn locate_counts_wrapped_rows_of_earlier_lines() {
        let buffer = "aaaa bbbb\ncc";
        assert_eq!(CursorState::locate(buffer, buffer.len(), 9), (2, 2));
    }

    #[test]
    fn move_down_within_wrapped_line() {
        let buffer = "aaaa bbbb";
        let mut cursor = cursor_at(2);
        cursor.last_width = 9;
        assert!(cursor.move_vertically(buffer, 1));
        assert_eq!(cursor.pos, 7); // "bb|bb"
    }

    #[test]
    fn screen_pos_on_wrapped_row() {
        let buffer = "aaaa bbbb";
        let cursor = cursor_at(buffer.len());
        let area = Rect::new(0, 0, 9, 6);
        assert_eq!(cursor.screen_pos(buffer, area), (2 + 4, 1 + 1));
    }

    #[test]
    fn move_down_keeps_column() {
        let buffer = "Buy milk\nCall dentist";
        let mut cursor = cursor_at(3);
        assert!(cursor.move_vertically(buffer, 1));
        assert_eq!(cursor.pos, 12); // "Cal|l"
    }

    #[test]
    fn move_down_clamps_to_short_line() {
        let buffer = "Call dentist\nA";
        let mut cursor = cursor_at(10);
        assert!(cursor.move_vertically(buffer, 1));
        assert_eq!(cursor.pos, buffer.len());
    }

    #[test]
    fn move_up_from_first_row_fails() {
        let mut cursor = cursor_at(2);
        assert!(!cursor.move_vertically("abc\ndef", -1));
        assert_eq!(cursor.pos, 2);
    }

    #[test]
    fn move_down_from_last_row_fails() {
        let mut cursor = cursor_at(5);
        assert!(!cursor.move_vertically("abc\ndef", 1));
    }

    #[test]
    fn move_up_onto_empty_row() {
        let buffer = "A\n\nB";
        let mut cursor = cursor_at(buffer.len());
        assert!(cursor.move_vertically(buffer, -1));
        assert_eq!(cursor.pos, 2);
    }

    #[test]
    fn scroll_follows_cursor() {
        let buffer = "1\n2\n3\n4\n5\n6";
        let mut cursor = cursor_at(buffer.len());
        cursor.last_height = 5; // 3 visible rows
        cursor.update_scroll_offset(buffer);
        assert_eq!(cursor.scroll_offset, 3);

        cursor.pos = 0;
        cursor.update_scroll_offset(buffer);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn screen_pos_offsets_border_and_padding() {
        let buffer = "ab\ncd";
        let cursor = cursor_at(buffer.len());
        let area = Rect::new(10, 5, WIDTH, 6);
        assert_eq!(cursor.screen_pos(buffer, area), (10 + 2 + 2, 5 + 1 + 1));
    }
}

//! # InputBox Component
//!
//! The multi-line task editor: one task per line.
//!
//! ## Responsibilities
//!
//! - Capture text input, including newlines (Enter) and bracketed paste
//! - Handle editing (backspace, delete, cursor and word movement)
//! - Scroll internally once the list outgrows the box
//!
//! ## State Management
//!
//! The buffer is internal state. `focused` is a prop from `TuiState`.
//! Cursor position and scroll state are encapsulated in `CursorState`.
//! Saving is not the editor's business; the dialog reads `buffer` when
//! the user confirms.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    inner_height, inner_width, next_char_boundary, next_word_boundary, prev_char_boundary,
    prev_word_boundary, wrap_line_count, wrapped_lines,
};

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The text changed
    ContentChanged,
    /// Only the cursor moved
    CursorMoved,
}

/// Multi-line text editor.
///
/// # Props
///
/// - `focused`: whether keystrokes go here (draws the border highlighted
///   and shows the terminal cursor)
///
/// # State
///
/// - `buffer`: the text being edited
/// - `cursor`: cursor position, scroll offset, and cached size (see `CursorState`)
pub struct InputBox {
    pub buffer: String,
    pub focused: bool,
    cursor: CursorState,
}

impl InputBox {
    pub fn new() -> Self {
        Self::with_text(String::new())
    }

    /// Start with `text` and the cursor at its end.
    pub fn with_text(text: String) -> Self {
        let mut cursor = CursorState::new();
        cursor.pos = text.len();
        Self {
            buffer: text,
            focused: true,
            cursor,
        }
    }

    /// Empty the editor.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor.reset();
    }

    fn visible_text(&self, area: Rect) -> String {
        let lines = wrapped_lines(&self.buffer, inner_width(area.width));
        let start = (self.cursor.scroll_offset as usize).min(lines.len());
        let end = (start + inner_height(area.height) as usize).min(lines.len());
        lines[start..end].join("\n")
    }

    /// Render scrollbar when content exceeds visible area
    fn render_scrollbar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

        let total_lines = wrap_line_count(&self.buffer, inner_width(area.width));
        let visible = inner_height(area.height);
        if total_lines <= visible {
            return;
        }

        // ScrollbarState content_length is max scrollable position, not total items
        let max_scroll = total_lines - visible;
        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll as usize)
            .position(self.cursor.scroll_offset as usize);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_width = area.width;
        self.cursor.last_height = area.height;
        self.cursor.update_scroll_offset(&self.buffer);

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .title(" Tasks ");

        let text = Paragraph::new(self.visible_text(area)).block(block);

        frame.render_widget(text, area);
        self.render_scrollbar(frame, area);

        if self.focused {
            let (cursor_x, cursor_y) = self.cursor.screen_pos(&self.buffer, area);
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Enter => {
                self.buffer.insert(self.cursor.pos, '\n');
                self.cursor.pos += 1;
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Terminals may paste CRLF; the buffer keeps bare LF
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                self.buffer.insert_str(self.cursor.pos, &text);
                self.cursor.pos += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor.pos > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor.pos < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::CursorMoved
            }),
            TuiEvent::WordLeft => {
                let target = prev_word_boundary(&self.buffer, self.cursor.pos);
                (target != self.cursor.pos).then(|| {
                    self.cursor.pos = target;
                    InputEvent::CursorMoved
                })
            }
            TuiEvent::WordRight => {
                let target = next_word_boundary(&self.buffer, self.cursor.pos);
                (target != self.cursor.pos).then(|| {
                    self.cursor.pos = target;
                    InputEvent::CursorMoved
                })
            }
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor.pos != line_start).then(|| {
                    self.cursor.pos = line_start;
                    InputEvent::CursorMoved
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor.pos != line_end).then(|| {
                    self.cursor.pos = line_end;
                    InputEvent::CursorMoved
                })
            }
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(&self.buffer, -1)
                .then_some(InputEvent::CursorMoved),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(&self.buffer, 1)
                .then_some(InputEvent::CursorMoved),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(input: &mut InputBox, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                input.handle_event(&TuiEvent::Enter);
            } else {
                input.handle_event(&TuiEvent::InputChar(c));
            }
        }
    }

    fn rendered_text(input: &mut InputBox, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_with_text_puts_cursor_at_end() {
        let mut input = InputBox::with_text("A\nB".to_string());
        input.handle_event(&TuiEvent::InputChar('C'));
        assert_eq!(input.buffer, "A\nBC");
    }

    #[test]
    fn test_typing_and_enter() {
        let mut input = InputBox::new();
        type_str(&mut input, "Buy milk\nCall dentist");
        assert_eq!(input.buffer, "Buy milk\nCall dentist");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = InputBox::with_text("abc".to_string());

        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(InputEvent::ContentChanged)
        );
        assert_eq!(input.buffer, "ab");

        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "a");

        // Nothing to delete after the cursor
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_backspace_multibyte() {
        let mut input = InputBox::with_text("café".to_string());
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "caf");
    }

    #[test]
    fn test_paste_normalises_line_endings() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("A\r\nB\rC".to_string()));
        assert_eq!(input.buffer, "A\nB\nC");
        input.handle_event(&TuiEvent::InputChar('!'));
        assert_eq!(input.buffer, "A\nB\nC!");
    }

    #[test]
    fn test_home_end_stay_on_line() {
        let mut input = InputBox::with_text("first\nsecond".to_string());
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::InputChar('>'));
        assert_eq!(input.buffer, "first\n>second");

        input.handle_event(&TuiEvent::CursorEnd);
        input.handle_event(&TuiEvent::InputChar('<'));
        assert_eq!(input.buffer, "first\n>second<");
    }

    #[test]
    fn test_word_movement() {
        let mut input = InputBox::with_text("call the dentist".to_string());
        assert_eq!(
            input.handle_event(&TuiEvent::WordLeft),
            Some(InputEvent::CursorMoved)
        );
        input.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(input.buffer, "call the xdentist");
    }

    #[test]
    fn test_cursor_up_then_type() {
        let mut input = InputBox::with_text("A\nB".to_string());
        input.handle_event(&TuiEvent::CursorUp);
        input.handle_event(&TuiEvent::InputChar('!'));
        assert_eq!(input.buffer, "A!\nB");
    }

    #[test]
    fn test_clear() {
        let mut input = InputBox::with_text("A\nB".to_string());
        input.clear();
        assert!(input.buffer.is_empty());
        input.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(input.buffer, "x");
    }

    #[test]
    fn test_ignores_dialog_events() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Confirm), None);
        assert_eq!(input.handle_event(&TuiEvent::Cancel), None);
        assert_eq!(input.handle_event(&TuiEvent::FocusNext), None);
    }

    #[test]
    fn test_render_shows_lines() {
        let mut input = InputBox::with_text("Buy milk\nCall dentist".to_string());
        let text = rendered_text(&mut input, 30, 6);
        assert!(text.contains("Tasks"));
        assert!(text.contains("Buy milk"));
        assert!(text.contains("Call dentist"));
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let lines: Vec<String> = (1..=10).map(|i| format!("task {i}")).collect();
        let mut input = InputBox::with_text(lines.join("\n"));
        // 3 visible rows, cursor on the last line
        let text = rendered_text(&mut input, 30, 5);
        assert!(text.contains("task 10"));
        assert!(!text.contains("task 1 "));
    }
}

//! Wrapping and boundary helpers for the task editor.
//!
//! Stateless. Nothing here knows about `InputBox` or `CursorState`.

/// Border (2) + horizontal padding (2)
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Columns from the area's left edge to the first text column
pub(super) const LEFT_OFFSET: u16 = 2;
/// Rows from the area's top edge to the first text row
pub(super) const TOP_OFFSET: u16 = 1;

pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Text width inside the editor block. 0 when the area is too narrow.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Text rows inside the editor block, at least 1.
pub(super) fn inner_height(area_height: u16) -> u16 {
    area_height.saturating_sub(VERTICAL_OVERHEAD).max(1)
}

/// The buffer as displayed: one entry per visual row.
///
/// A trailing newline always yields a trailing empty row so the cursor
/// has somewhere to sit.
pub(super) fn wrapped_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    let mut lines: Vec<String> = textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        lines.push(String::new());
    }
    lines
}

/// Byte offset where each visual row of one logical `line` starts.
///
/// Rows are contiguous slices of `line`, except that the spaces at each
/// soft break are dropped; those spaces belong to the row before the break.
pub(super) fn row_starts(line: &str, width: u16) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut offset = 0;
    for (i, row) in textwrap::wrap(line, wrap_options(width)).iter().enumerate() {
        let start = if i == 0 {
            0
        } else {
            let rest = &line[offset..];
            offset + rest.len() - rest.trim_start_matches(' ').len()
        };
        starts.push(start);
        offset = (start + row.len()).min(line.len());
    }
    if starts.is_empty() {
        starts.push(0);
    }
    starts
}

pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    wrapped_lines(text, width).len() as u16
}

pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start of the word before `pos` (readline `backward-word`).
pub(super) fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let mut boundary = pos;
    let mut seen_word = false;
    for (i, c) in text[..pos].char_indices().rev() {
        if is_word_char(c) {
            seen_word = true;
        } else if seen_word {
            break;
        }
        boundary = i;
    }
    if seen_word { boundary } else { 0 }
}

/// End of the word after `pos` (readline `forward-word`).
pub(super) fn next_word_boundary(text: &str, pos: usize) -> usize {
    let mut seen_word = false;
    for (i, c) in text[pos..].char_indices() {
        if is_word_char(c) {
            seen_word = true;
        } else if seen_word {
            return pos + i;
        }
    }
    text.len()
}

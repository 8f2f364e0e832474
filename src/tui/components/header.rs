//! # Header Component
//!
//! The dialog's top block: heading, today's date, and the instruction line.
//!
//! Stateless. All three lines arrive as props, so the header does not care
//! whether the heading came from a forced `--view` or a first run:
//!
//! ```text
//!        📝 What's on your plate today?
//!           Friday, October 16, 2026
//!
//!   Add your tasks for today (one per line):
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct Header {
    pub heading: String,
    pub date_label: String,
    pub instructions: String,
}

impl Header {
    /// Rows the header needs.
    pub const HEIGHT: u16 = 4;

    pub fn new(heading: String, date_label: String, instructions: String) -> Self {
        Self {
            heading,
            date_label,
            instructions,
        }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.heading.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                self.date_label.as_str(),
                Style::default().fg(Color::Gray),
            ))
            .alignment(Alignment::Center),
            Line::default(),
            Line::from(self.instructions.as_str()),
        ];

        frame.render_widget(Paragraph::new(lines), area);
    }
}

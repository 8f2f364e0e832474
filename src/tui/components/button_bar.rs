//! # ButtonBar Component
//!
//! The dialog's action row: `[ Save & Close ]  [ Cancel ]  [ Clear All ]`.
//!
//! "Clear All" only appears when the dialog opened with an existing list.
//! The bar remembers where each button was drawn so a mouse click can be
//! mapped back to a button.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Save,
    Cancel,
    ClearAll,
}

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Save => "Save & Close",
            Button::Cancel => "Cancel",
            Button::ClearAll => "Clear All",
        }
    }

    fn style(self, focused: bool) -> Style {
        let base = match self {
            Button::Save => Style::default()
                .fg(Color::White)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Button::Cancel => Style::default(),
            Button::ClearAll => Style::default().fg(Color::Red),
        };
        if focused {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }
}

/// # Props
///
/// - `offers_clear_all`: whether "Clear All" is shown
/// - `focused`: the button holding keyboard focus, if any
///
/// # State
///
/// - `hit_areas`: where each button landed in the last render
pub struct ButtonBar {
    pub offers_clear_all: bool,
    pub focused: Option<Button>,
    hit_areas: Vec<(Button, Rect)>,
}

impl ButtonBar {
    pub const HEIGHT: u16 = 1;
    const GAP: u16 = 2;

    pub fn new(offers_clear_all: bool) -> Self {
        Self {
            offers_clear_all,
            focused: None,
            hit_areas: Vec::new(),
        }
    }

    /// Buttons in display (and Tab) order.
    pub fn buttons(&self) -> Vec<Button> {
        let mut buttons = vec![Button::Save, Button::Cancel];
        if self.offers_clear_all {
            buttons.push(Button::ClearAll);
        }
        buttons
    }

    /// The button under screen cell (`column`, `row`), from the last render.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Button> {
        let point = Position::new(column, row);
        self.hit_areas
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(button, _)| *button)
    }

    fn caption(button: Button) -> String {
        format!("[ {} ]", button.label())
    }
}

impl Component for ButtonBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let buttons = self.buttons();
        let constraints = buttons
            .iter()
            .map(|b| Constraint::Length(Self::caption(*b).width() as u16));
        let cells = Layout::horizontal(constraints)
            .flex(Flex::Center)
            .spacing(Self::GAP)
            .split(area);

        self.hit_areas.clear();
        for (button, cell) in buttons.into_iter().zip(cells.iter()) {
            let focused = self.focused == Some(button);
            let caption = Paragraph::new(Self::caption(button)).style(button.style(focused));
            frame.render_widget(caption, *cell);
            self.hit_areas.push((button, *cell));
        }
    }
}

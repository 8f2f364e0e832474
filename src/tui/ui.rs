use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding};

use crate::core::state::{INSTRUCTIONS, Prompt};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ButtonBar, Header};

/// Largest dialog drawn, in terminal cells.
pub const DIALOG_WIDTH: u16 = 64;
pub const DIALOG_HEIGHT: u16 = 24;

const TITLE: &str = " Daily Todo List ";
// Ctrl+S first: without keyboard enhancement Ctrl+Enter arrives as Ctrl+J
const HINTS: &str = " Ctrl+S / Ctrl+Enter save · Esc cancel · Tab buttons ";

/// Draw the dialog centered on the screen.
pub fn draw_ui(frame: &mut Frame, prompt: &Prompt, tui: &mut TuiState) {
    let dialog = dialog_rect(frame.area());

    // Blank out whatever the terminal showed underneath
    frame.render_widget(Clear, dialog);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .title(TITLE)
        .title_bottom(Line::from(HINTS).centered())
        .padding(Padding::horizontal(1));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let [header_area, editor_area, _, buttons_area] = Layout::vertical([
        Constraint::Length(Header::HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(ButtonBar::HEIGHT),
    ])
    .areas(inner);

    let mut header = Header::new(
        prompt.heading().text().to_string(),
        prompt.date_label(),
        INSTRUCTIONS.to_string(),
    );
    header.render(frame, header_area);

    tui.input_box.render(frame, editor_area);
    tui.button_bar.render(frame, buttons_area);
}

/// The dialog's rect: `DIALOG_WIDTH` × `DIALOG_HEIGHT`, shrunk to fit, centered.
pub fn dialog_rect(area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(DIALOG_HEIGHT.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [dialog] = Layout::horizontal([Constraint::Length(DIALOG_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    dialog
}

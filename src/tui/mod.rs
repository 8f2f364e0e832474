//! # TUI Adapter
//!
//! The ratatui-specific layer. Draws the dialog, and translates keyboard
//! and mouse events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Focus
//!
//! Keystrokes go to the editor by default. Tab / Shift+Tab cycle focus
//! through the editor and the offered buttons; Enter on a focused button
//! presses it. Typing while a button is focused jumps back to the editor.
//! Ctrl+Enter (or Ctrl+S) and Esc work regardless of focus.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event changed
//! something (an edit, a cursor move, a focus change, a resize) and
//! otherwise sleeps in `poll` for up to 500ms at a time.

mod component;
mod components;
mod event;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use log::{debug, info};
use ratatui::DefaultTerminal;

use crate::core::action::{self, Action, Effect, update};
use crate::core::state::Prompt;
use crate::core::store::TodoStore;
use crate::tui::component::EventHandler;
use crate::tui::components::{Button, ButtonBar, InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Editor,
    Button(Button),
}

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub button_bar: ButtonBar,
    pub focus: Focus,
    needs_redraw: bool,
}

impl TuiState {
    pub fn new(prompt: &Prompt) -> Self {
        Self {
            input_box: InputBox::with_text(prompt.initial_text()),
            button_bar: ButtonBar::new(prompt.offers_clear_all()),
            focus: Focus::Editor, // User expects to type immediately
            needs_redraw: true,   // Force first frame
        }
    }

    /// True once after anything visible changed.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Push focus down into the component props.
    fn sync_props(&mut self) {
        self.needs_redraw = true;
        self.input_box.focused = self.focus == Focus::Editor;
        self.button_bar.focused = match self.focus {
            Focus::Button(button) => Some(button),
            Focus::Editor => None,
        };
    }

    /// Focus ring: editor, then each offered button.
    fn focus_ring(&self) -> Vec<Focus> {
        std::iter::once(Focus::Editor)
            .chain(self.button_bar.buttons().into_iter().map(Focus::Button))
            .collect()
    }

    fn cycle_focus(&mut self, step: isize) {
        let ring = self.focus_ring();
        let current = ring.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(ring.len() as isize) as usize;
        self.focus = ring[next];
        self.sync_props();
    }

    /// Turn a button press into an action. "Clear All" empties the editor first.
    fn press(&mut self, button: Button) -> Action {
        self.needs_redraw = true;
        match button {
            Button::Save => Action::Confirm(self.input_box.buffer.clone()),
            Button::Cancel => Action::Cancel,
            Button::ClearAll => {
                self.input_box.clear();
                Action::ClearAll
            }
        }
    }

    /// Route one event. Returns an action when a dialog button fired.
    pub fn dispatch(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Resize => {
                self.needs_redraw = true;
                None
            }
            TuiEvent::Confirm => Some(self.press(Button::Save)),
            TuiEvent::Cancel => Some(self.press(Button::Cancel)),
            TuiEvent::FocusNext => {
                self.cycle_focus(1);
                None
            }
            TuiEvent::FocusPrev => {
                self.cycle_focus(-1);
                None
            }
            TuiEvent::MouseClick(column, row) => {
                let button = self.button_bar.hit_test(*column, *row)?;
                Some(self.press(button))
            }
            _ => match self.focus {
                Focus::Button(button) => match event {
                    TuiEvent::Enter => Some(self.press(button)),
                    // Typing jumps back to the editor and keeps the keystroke
                    TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                        self.focus = Focus::Editor;
                        self.sync_props();
                        self.edit(event);
                        None
                    }
                    _ => None,
                },
                Focus::Editor => {
                    self.edit(event);
                    None
                }
            },
        }
    }

    fn edit(&mut self, event: &TuiEvent) {
        match self.input_box.handle_event(event) {
            Some(InputEvent::ContentChanged) => {
                debug!("Editor now holds {} byte(s)", self.input_box.buffer.len());
                self.needs_redraw = true;
            }
            Some(InputEvent::CursorMoved) => self.needs_redraw = true,
            None => {}
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // DISAMBIGUATE_ESCAPE_CODES lets Ctrl+Enter arrive as itself; terminals
        // without the protocol ignore it and fall back to Ctrl+S
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        debug!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Open the dialog, block until the user closes it, then write the outcome
/// to the store.
///
/// Returns the effect that was applied. Store write failures are returned
/// after the terminal has been restored.
pub fn run(store: &TodoStore, force: bool) -> io::Result<Effect> {
    let prompt = Prompt::open(store, force);
    info!(
        "Opening dialog: {:?} ({} existing todo(s))",
        prompt.heading(),
        prompt.existing.len()
    );

    let mut terminal = ratatui::init();
    let effect = TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, &prompt));
    ratatui::restore();

    let effect = effect?;
    info!("Dialog closed with {:?}", effect);
    action::apply(store, &effect)?;
    Ok(effect)
}

fn event_loop(terminal: &mut DefaultTerminal, prompt: &Prompt) -> io::Result<Effect> {
    let mut tui = TuiState::new(prompt);
    tui.sync_props();

    loop {
        if tui.take_redraw() {
            terminal.draw(|f| ui::draw_ui(f, prompt, &mut tui))?;
        }

        // Process first event + drain everything pending before the next draw
        let mut next = poll_event_timeout(IDLE_POLL)?;
        while let Some(event) = next {
            if let Some(action) = tui.dispatch(&event) {
                debug!("Dialog action: {:?}", action);
                let effect = update(prompt, action);
                if effect.closes() {
                    return Ok(effect);
                }
            }
            next = poll_event_immediate()?;
        }
    }
}

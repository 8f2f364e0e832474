//! # Actions
//!
//! The dialog's three buttons become an `Action`. The `update()` function
//! takes the open-time snapshot and an action, then returns the `Effect`
//! the store should see. No I/O here; `apply()` does the writing.
//!
//! ```text
//! Prompt + Action  →  update()  →  Effect  →  apply(store)
//! ```
//!
//! | Action            | Effect                                   |
//! |-------------------|------------------------------------------|
//! | `Confirm(text)`   | `Save(lines)`, or `Clear` if text blank  |
//! | `Cancel`          | `Close`                                  |
//! | `ClearAll`        | `Clear` (or `None` if nothing to clear)  |

use std::io;

use log::info;

use crate::core::record::parse_lines;
use crate::core::state::Prompt;
use crate::core::store::TodoStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// "Save & Close" with the editor's full contents.
    Confirm(String),
    /// Close without touching the store.
    Cancel,
    /// "Clear All": wipe the editor and the record.
    ClearAll,
}

/// What happens to the store (and the dialog) after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing happens; the dialog stays open.
    None,
    /// Replace the record with these lines, then close.
    Save(Vec<String>),
    /// Delete the record, then close.
    Clear,
    /// Close, store untouched.
    Close,
}

impl Effect {
    /// Whether the dialog should close after this effect.
    pub fn closes(&self) -> bool {
        !matches!(self, Effect::None)
    }
}

pub fn update(prompt: &Prompt, action: Action) -> Effect {
    match action {
        Action::Confirm(content) => {
            if content.trim().is_empty() {
                Effect::Clear
            } else {
                Effect::Save(parse_lines(&content))
            }
        }
        Action::Cancel => Effect::Close,
        Action::ClearAll => {
            if prompt.offers_clear_all() {
                Effect::Clear
            } else {
                Effect::None
            }
        }
    }
}

/// Carry out an effect against the store.
pub fn apply(store: &TodoStore, effect: &Effect) -> io::Result<()> {
    match effect {
        Effect::Save(todos) => store.save(todos),
        Effect::Clear => store.clear(),
        Effect::Close => {
            info!("Dialog cancelled, store untouched");
            Ok(())
        }
        Effect::None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::LoadOutcome;
    use crate::test_support::{fixed_day, store_in, todos};

    fn empty_prompt() -> Prompt {
        Prompt::new(false, Vec::new(), fixed_day())
    }

    fn existing_prompt() -> Prompt {
        Prompt::new(true, todos(&["A", "B"]), fixed_day())
    }

    #[test]
    fn test_confirm_splits_and_trims_lines() {
        let effect = update(&empty_prompt(), Action::Confirm("  a \n\n b\n".into()));
        assert_eq!(effect, Effect::Save(todos(&["a", "b"])));
    }

    #[test]
    fn test_confirm_blank_clears() {
        assert_eq!(
            update(&existing_prompt(), Action::Confirm(" \n\t\n".into())),
            Effect::Clear
        );
        assert_eq!(update(&empty_prompt(), Action::Confirm(String::new())), Effect::Clear);
    }

    #[test]
    fn test_cancel_closes_without_store_change() {
        assert_eq!(update(&existing_prompt(), Action::Cancel), Effect::Close);
    }

    #[test]
    fn test_clear_all_requires_existing_record() {
        assert_eq!(update(&existing_prompt(), Action::ClearAll), Effect::Clear);
        assert_eq!(update(&empty_prompt(), Action::ClearAll), Effect::None);
    }

    #[test]
    fn test_effect_closes() {
        assert!(!Effect::None.closes());
        assert!(Effect::Close.closes());
        assert!(Effect::Clear.closes());
        assert!(Effect::Save(Vec::new()).closes());
    }

    #[test]
    fn test_apply_save_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        apply(&store, &Effect::Save(todos(&["x"]))).unwrap();
        assert_eq!(store.load(), todos(&["x"]));

        apply(&store, &Effect::Clear).unwrap();
        assert_eq!(store.read(), LoadOutcome::Absent);
    }

    #[test]
    fn test_apply_close_leaves_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&todos(&["keep"])).unwrap();

        apply(&store, &Effect::Close).unwrap();
        apply(&store, &Effect::None).unwrap();

        assert_eq!(store.load(), todos(&["keep"]));
    }

    #[test]
    fn test_confirm_blank_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&todos(&["A"])).unwrap();

        let prompt = Prompt::open(&store, false);
        let effect = update(&prompt, Action::Confirm("   ".into()));
        apply(&store, &effect).unwrap();

        assert!(store.load().is_empty());
        assert!(!store.path().exists());
    }
}

//! # Launch Decision
//!
//! Whether a run shows the dialog at all. Run on login/wake without flags,
//! the tool stays quiet once today's list exists; `--view` always opens it.

/// The two states of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// Open the dialog.
    Show,
    /// Exit immediately, no side effects.
    Skip,
}

pub fn decide(force: bool, todos: &[String]) -> Launch {
    if force || todos.is_empty() {
        Launch::Show
    } else {
        Launch::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::todos;

    #[test]
    fn test_quiet_run_with_list_skips() {
        assert_eq!(decide(false, &todos(&["A"])), Launch::Skip);
    }

    #[test]
    fn test_quiet_run_without_list_shows() {
        assert_eq!(decide(false, &[]), Launch::Show);
    }

    #[test]
    fn test_forced_run_always_shows() {
        assert_eq!(decide(true, &[]), Launch::Show);
        assert_eq!(decide(true, &todos(&["A", "B"])), Launch::Show);
    }
}

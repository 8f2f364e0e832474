//! # Core Application Logic
//!
//! Everything that decides what happens to today's list. It knows nothing
//! about terminals.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • TodoStore (disk)     │
//!                    │  • Prompt (snapshot)    │
//!                    │  • Action → Effect      │
//!                    │  • launch decision      │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴─────────────┐
//!                    ▼                         ▼
//!             ┌────────────┐            ┌────────────┐
//!             │    TUI     │            │   tests    │
//!             │  Adapter   │            │ (no window)│
//!             │ (ratatui)  │            │            │
//!             └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`clock`]: where "today" comes from (`SystemClock`, `FixedClock`)
//! - [`record`]: the persisted `DailyRecord` and line parsing
//! - [`store`]: the single JSON record, with daily rollover
//! - [`state`]: the `Prompt` snapshot a dialog opens with
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`launch`]: whether a run shows the dialog or exits quietly
//! - [`config`]: the optional `~/.daily-todo/config.toml`

pub mod action;
pub mod clock;
pub mod config;
pub mod launch;
pub mod record;
pub mod state;
pub mod store;

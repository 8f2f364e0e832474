//! # TUI Components
//!
//! The pieces of the dialog.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `Header`: heading, date, and instruction line
//!
//! ### Stateful Components
//!
//! - `InputBox`: the multi-line task editor (handles events)
//! - `ButtonBar`: the action row (remembers button positions for clicks)
//!
//! Components receive external data as props (struct fields set by the
//! parent before rendering) rather than reaching into `Prompt` themselves.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (heading + date + instructions)
//! ├── button_bar.rs    (Save & Close / Cancel / Clear All)
//! └── input_box/       (multi-line editor)
//! ```

pub mod button_bar;
pub mod header;
pub mod input_box;

pub use button_bar::{Button, ButtonBar};
pub use header::Header;
pub use input_box::{InputBox, InputEvent};

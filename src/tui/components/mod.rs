//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Built fresh each frame from `App` fields:
//! - `TitleBar`: app name, backend URL and status
//! - `Header`: product name and tagline
//! - `SubmitButton`: `Submit` / spinner + `Processing...`
//!
//! ### Stateful Components (Event-Driven)
//!
//! Hold presentation state in `TuiState` and implement `EventHandler`:
//! - `InputBox`: multi-line editor with placeholder and input-kind hint
//! - `ResponsePane` / `ResponsePaneState`: scrollable rendered summary
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (top status line)
//! ├── header.rs         (name + tagline)
//! ├── submit_button.rs  (button with spinner)
//! ├── response_pane.rs  (scrollable markup view)
//! └── input_box/        (editor, cursor, wrapping)
//! ```

mod header;
pub mod input_box;
mod response_pane;
mod submit_button;
mod title_bar;

pub use header::Header;
pub use input_box::{InputBox, InputEvent};
pub use response_pane::{ResponsePane, ResponsePaneState};
pub use submit_button::{BUTTON_HEIGHT, SubmitButton};
pub use title_bar::TitleBar;

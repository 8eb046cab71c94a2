//! # Application State
//!
//! Everything the submission controller owns. No TUI types live here;
//! presentation state (cursor, scroll offsets) belongs to the `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn SummaryBackend>  // outbound collaborator
//! ├── input_text: String                // what the user is composing
//! ├── request_state: RequestState       // Idle | Loading
//! ├── response_text: String             // summary or fixed error message
//! ├── response_visible: bool            // gates the result pane
//! ├── completions: u64                  // submissions resolved so far
//! └── status_message: String            // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::backend::SummaryBackend;

/// Shown for every failed submission, whatever the cause.
pub const FIXED_ERROR_MESSAGE: &str = "Error fetching data.";

/// Whether a submission is outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
}

pub struct App {
    pub backend: Arc<dyn SummaryBackend>,
    pub input_text: String,
    pub request_state: RequestState,
    /// Empty until the first submission completes.
    pub response_text: String,
    pub response_visible: bool,
    /// Bumped on every completion, so views can tell a repeated identical
    /// response from a stale one.
    pub completions: u64,
    pub status_message: String,
}

impl App {
    pub fn new(backend: Arc<dyn SummaryBackend>) -> Self {
        Self {
            backend,
            input_text: String::new(),
            request_state: RequestState::Idle,
            response_text: String::new(),
            response_visible: false,
            completions: 0,
            status_message: String::from("Ready"),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.request_state == RequestState::Loading
    }

    /// The submit guard: whitespace-only input does not count.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.input_text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.input_text.is_empty());
        assert_eq!(app.request_state, RequestState::Idle);
        assert!(app.response_text.is_empty());
        assert!(!app.response_visible);
        assert_eq!(app.completions, 0);
        assert_eq!(app.status_message, "Ready");
    }

    #[test]
    fn can_submit_requires_non_blank_input() {
        let mut app = test_app();
        assert!(!app.can_submit());
        app.input_text = " \n\t ".to_string();
        assert!(!app.can_submit());
        app.input_text = "hello".to_string();
        assert!(app.can_submit());
    }

    #[test]
    fn can_submit_false_while_loading() {
        let mut app = test_app();
        app.input_text = "hello".to_string();
        app.request_state = RequestState::Loading;
        assert!(!app.can_submit());
    }
}

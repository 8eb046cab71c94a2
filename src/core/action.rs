//! # Actions
//!
//! Everything that can happen to the submission controller becomes an
//! `Action`. User edits the input? That's `Action::InputChanged(text)`.
//! Backend answers? That's `Action::SubmissionFinished(result)`.
//!
//! `update()` applies an action to the state and returns an [`Effect`]
//! describing the I/O the caller must perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Transition table
//!
//! ```text
//! Idle    --Submit (non-blank)-->        Loading   hide response, SpawnRequest(text)
//! Idle    --Submit (blank)-->            Idle      no-op
//! Loading --Submit-->                    Loading   no-op
//! Loading --SubmissionFinished(Ok(s))--> Idle      response = s, show
//! Loading --SubmissionFinished(Err)-->   Idle      response = fixed message, show
//! Idle    --SubmissionFinished(_)-->     Idle      ignored
//! ```

use log::{debug, info, warn};

use crate::backend::BackendError;
use crate::core::state::{App, FIXED_ERROR_MESSAGE, RequestState};

#[derive(Debug)]
pub enum Action {
    /// The input box content changed. Carries the full new text.
    InputChanged(String),
    /// The user triggered submission of the current input.
    Submit,
    /// The outstanding request resolved, one way or the other.
    SubmissionFinished(Result<String, BackendError>),
    Quit,
}

/// Side effects requested by `update()`, performed by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Issue exactly one request carrying this text.
    SpawnRequest(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::InputChanged(text) => {
            app.input_text = text;
            Effect::None
        }
        Action::Submit => submit(app),
        Action::SubmissionFinished(result) => {
            finish(app, result);
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested (state={:?})", app.request_state);
            Effect::Quit
        }
    }
}

fn submit(app: &mut App) -> Effect {
    if app.is_loading() {
        debug!("Submit ignored: request already in flight");
        return Effect::None;
    }
    if app.input_text.trim().is_empty() {
        debug!("Submit ignored: empty input");
        return Effect::None;
    }

    app.request_state = RequestState::Loading;
    app.response_visible = false;
    app.status_message = String::from("Processing...");
    info!("Submission accepted (input_len={})", app.input_text.len());

    Effect::SpawnRequest(app.input_text.clone())
}

fn finish(app: &mut App, result: Result<String, BackendError>) {
    if !app.is_loading() {
        warn!("Completion received while idle, ignoring");
        return;
    }

    match result {
        Ok(summary) => {
            info!("Submission succeeded ({} bytes)", summary.len());
            app.response_text = summary;
            app.status_message = String::from("Done");
        }
        Err(e) => {
            warn!("Submission failed: {}", e);
            app.response_text = FIXED_ERROR_MESSAGE.to_string();
            app.status_message = String::from("Request failed");
        }
    }
    app.response_visible = true;
    app.completions += 1;
    app.request_state = RequestState::Idle;
}

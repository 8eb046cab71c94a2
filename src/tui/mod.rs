//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! poll terminal ──► TuiEvent ──► InputBox / ResponsePaneState
//!                                   │
//!                      InputChanged / Submit / Quit
//!                                   ▼
//!                     core::update(&mut App, Action) ──► Effect
//!                                   │
//!                    SpawnRequest ──┴──► submission::spawn ──┐
//!                                                            │
//! mpsc::Receiver<Action> ◄── SubmissionFinished ◄────────────┘
//! ```
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the button spinner turns.
//! - **Idle**: sleeps up to 500ms and only redraws on events, resize, or a
//!   completion arriving on the channel.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! `set_cursor_position` restarts the blink timer on every `draw()`.

mod component;
mod components;
mod event;
pub mod markdown;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::backend::{HttpBackend, SummaryBackend};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::submission;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, ResponsePaneState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_TICK: Duration = Duration::from_millis(80);
const IDLE_TICK: Duration = Duration::from_millis(500);
const SPINNER_FPS: f32 = 12.0;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub response_pane: ResponsePaneState,
    /// Shown in the title bar.
    pub backend_url: String,
}

impl TuiState {
    pub fn new(backend_url: String) -> Self {
        Self {
            input_box: InputBox::new(),
            response_pane: ResponsePaneState::new(),
            backend_url,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Terminals without the Kitty protocol ignore the enhancement flags.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
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

/// What the loop must do after one effect.
enum Flow {
    Continue,
    Quit,
}

/// Carries out an `Effect` returned by `update`.
fn apply_effect(effect: Effect, app: &App, tx: &mpsc::Sender<Action>) -> Flow {
    match effect {
        Effect::None => Flow::Continue,
        Effect::SpawnRequest(text) => {
            submission::spawn(app.backend.clone(), text, tx.clone());
            Flow::Continue
        }
        Effect::Quit => Flow::Quit,
    }
}

/// Routes one terminal event. Returns `Flow::Quit` when the app should exit.
fn handle_event(
    event: TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
) -> Flow {
    match event {
        TuiEvent::Resize => Flow::Continue,
        TuiEvent::Quit => apply_effect(update(app, Action::Quit), app, tx),
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            if app.response_visible {
                tui.response_pane.handle_event(&event);
            }
            Flow::Continue
        }
        _ => match tui.input_box.handle_event(&event) {
            Some(InputEvent::Changed) => {
                let text = tui.input_box.buffer.clone();
                apply_effect(update(app, Action::InputChanged(text)), app, tx)
            }
            Some(InputEvent::Submit) => apply_effect(update(app, Action::Submit), app, tx),
            Some(InputEvent::Moved) | None => Flow::Continue,
        },
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn SummaryBackend> = Arc::new(HttpBackend::new(config.backend_url.clone()));
    let mut app = App::new(backend);
    let mut tui = TuiState::new(config.backend_url.clone());

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        event_loop(&mut terminal, &mut app, &mut tui)
    });
    ratatui::restore();

    info!("Shutting down");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    // Completions from background submission tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true;

    loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * SPINNER_FPS) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_TICK } else { IDLE_TICK };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain everything pending before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Flow::Quit = handle_event(event, app, tui, &tx) {
                return Ok(());
            }
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(app, action);
            if let Flow::Quit = apply_effect(effect, app, &tx) {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::RequestState;
    use crate::test_support::{StaticBackend, test_app};

    fn type_text(text: &str, app: &mut App, tui: &mut TuiState, tx: &mpsc::Sender<Action>) {
        handle_event(TuiEvent::Paste(text.to_string()), app, tui, tx);
    }

    #[test]
    fn typing_mirrors_into_app() {
        let (tx, _rx) = mpsc::channel();
        let mut app = test_app();
        let mut tui = TuiState::new(String::new());
        type_text("abc", &mut app, &mut tui, &tx);
        handle_event(TuiEvent::Backspace, &mut app, &mut tui, &tx);
        assert_eq!(app.input_text, "ab");
    }

    #[test]
    fn cursor_motion_does_not_touch_app() {
        let (tx, _rx) = mpsc::channel();
        let mut app = test_app();
        let mut tui = TuiState::new(String::new());
        type_text("abc", &mut app, &mut tui, &tx);
        app.input_text = "sentinel".to_string();
        handle_event(TuiEvent::CursorLeft, &mut app, &mut tui, &tx);
        assert_eq!(app.input_text, "sentinel");
    }

    #[test]
    fn quit_event_ends_loop() {
        let (tx, _rx) = mpsc::channel();
        let mut app = test_app();
        let mut tui = TuiState::new(String::new());
        assert!(matches!(
            handle_event(TuiEvent::Quit, &mut app, &mut tui, &tx),
            Flow::Quit
        ));
    }

    #[test]
    fn blank_submit_spawns_nothing() {
        let (tx, _rx) = mpsc::channel();
        let mut app = test_app();
        let mut tui = TuiState::new(String::new());
        type_text("   ", &mut app, &mut tui, &tx);
        handle_event(TuiEvent::Submit, &mut app, &mut tui, &tx);
        assert_eq!(app.request_state, RequestState::Idle);
    }

    #[tokio::test]
    async fn submit_round_trips_through_channel() {
        let (tx, rx) = mpsc::channel();
        let backend = Arc::new(StaticBackend::new("# Done"));
        let mut app = App::new(backend.clone());
        let mut tui = TuiState::new(String::new());

        type_text("https://example.com", &mut app, &mut tui, &tx);
        handle_event(TuiEvent::Submit, &mut app, &mut tui, &tx);
        assert!(app.is_loading());
        // A second Enter while loading is rejected.
        handle_event(TuiEvent::Submit, &mut app, &mut tui, &tx);

        let action = tokio::task::spawn_blocking(move || rx.recv())
            .await
            .unwrap()
            .unwrap();
        update(&mut app, action);

        assert_eq!(app.request_state, RequestState::Idle);
        assert!(app.response_visible);
        assert_eq!(app.response_text, "# Done");
        assert_eq!(backend.calls(), vec!["https://example.com".to_string()]);
        // The input is kept for editing and resubmission.
        assert_eq!(tui.input_box.buffer, "https://example.com");
    }

    #[test]
    fn scroll_ignored_while_response_hidden() {
        let (tx, _rx) = mpsc::channel();
        let mut app = test_app();
        let mut tui = TuiState::new(String::new());
        assert!(matches!(
            handle_event(TuiEvent::ScrollDown, &mut app, &mut tui, &tx),
            Flow::Continue
        ));
        assert_eq!(tui.response_pane.scroll_state.offset().y, 0);
    }
}

//! One submission cycle's suspend point.
//!
//! The request is awaited once and its outcome handed back to the reducer as
//! `Action::SubmissionFinished`. The TUI runs this on a tokio task and sends
//! the action over a channel; tests simply `.await` it.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use log::{info, warn};

use crate::backend::SummaryBackend;
use crate::core::action::Action;

/// Runs the outbound request for `text` to completion.
pub async fn run(backend: &dyn SummaryBackend, text: &str) -> Action {
    let result = backend.process(text).await;
    info!(
        "Request to {} backend resolved: {}",
        backend.name(),
        if result.is_ok() { "ok" } else { "error" }
    );
    Action::SubmissionFinished(result)
}

/// Spawns [`run`] on the current tokio runtime and forwards the completion
/// action to `tx`. Nothing is retained to cancel the task.
pub fn spawn(backend: Arc<dyn SummaryBackend>, text: String, tx: Sender<Action>) {
    info!("Spawning submission request");
    tokio::spawn(async move {
        let action = run(backend.as_ref(), &text).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver submission result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendError;
    use crate::test_support::{FailingBackend, StaticBackend};
    use std::sync::mpsc;

    #[tokio::test]
    async fn run_wraps_success() {
        let backend = StaticBackend::new("summary");
        let action = run(&backend, "hello").await;
        assert!(matches!(action, Action::SubmissionFinished(Ok(ref s)) if s == "summary"));
        assert_eq!(backend.calls(), vec!["hello".to_string()]);
    }

    #[tokio::test]
    async fn run_wraps_failure() {
        let backend = FailingBackend;
        let action = run(&backend, "hello").await;
        assert!(matches!(
            action,
            Action::SubmissionFinished(Err(BackendError::Network(_)))
        ));
    }

    #[tokio::test]
    async fn spawn_delivers_exactly_one_action() {
        let backend = Arc::new(StaticBackend::new("done"));
        let (tx, rx) = mpsc::channel();

        spawn(backend.clone(), "hello".to_string(), tx);

        let action = tokio::task::spawn_blocking(move || {
            let first = rx.recv().ok();
            // Sender is dropped once the task finishes, so this returns Err.
            let second = rx.recv().ok();
            (first, second)
        })
        .await
        .unwrap();

        assert!(matches!(action.0, Some(Action::SubmissionFinished(Ok(_)))));
        assert!(action.1.is_none());
        assert_eq!(backend.calls().len(), 1);
    }
}

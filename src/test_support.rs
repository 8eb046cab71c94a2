//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::backend::{BackendError, SummaryBackend};
use crate::core::state::App;

/// A backend that answers every request with an empty summary.
pub struct NoopBackend;

#[async_trait]
impl SummaryBackend for NoopBackend {
    fn name(&self) -> &str {
        "noop"
    }

    async fn process(&self, _text: &str) -> Result<String, BackendError> {
        Ok(String::new())
    }
}

/// Answers with a fixed summary and records every request body.
pub struct StaticBackend {
    summary: String,
    calls: Mutex<Vec<String>>,
}

impl StaticBackend {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Texts received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SummaryBackend for StaticBackend {
    fn name(&self) -> &str {
        "static"
    }

    async fn process(&self, text: &str) -> Result<String, BackendError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(text.to_string());
        }
        Ok(self.summary.clone())
    }
}

/// Fails every request as if the host were unreachable.
pub struct FailingBackend;

#[async_trait]
impl SummaryBackend for FailingBackend {
    fn name(&self) -> &str {
        "failing"
    }

    async fn process(&self, _text: &str) -> Result<String, BackendError> {
        Err(BackendError::Network("connection refused".to_string()))
    }
}

/// Creates a test App with a NoopBackend.
pub fn test_app() -> App {
    App::new(Arc::new(NoopBackend))
}

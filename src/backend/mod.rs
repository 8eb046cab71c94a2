pub mod client;
pub mod http;
pub mod types;

pub use client::{BackendError, SummaryBackend};
pub use http::HttpBackend;
pub use types::{ProcessRequest, ProcessResponse};

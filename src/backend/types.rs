//! Wire types for the `/process` endpoint.
//!
//! ```text
//! POST {base_url}/process
//! → {"text": "https://example.com"}
//! ← {"summary": "# Example\nShort site."}
//! ```

use serde::{Deserialize, Serialize};

/// Request body: the raw text the user submitted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProcessRequest {
    pub text: String,
}

/// Success body. Only `summary` is consumed; unknown fields are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ProcessResponse {
    pub summary: String,
}

//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /quotes/mood/{mood}/random`.
#[derive(Debug, Deserialize)]
pub struct RandomQuoteParams {
    /// Opaque identifier generated and persisted by the browser. When
    /// present, the quote is chosen among those this client has not seen.
    #[serde(rename = "clientId")]
    pub client_id: Option<String>,
}

impl RandomQuoteParams {
    /// The client id, passed through unchanged. An empty or whitespace-only
    /// value counts as absent.
    pub fn client_id(&self) -> Option<&str> {
        self.client_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }
}

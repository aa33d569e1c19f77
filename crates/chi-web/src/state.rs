//! Application state.

use chi_openai::ChatClient;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: ChatClient,
    /// Expected bearer token for `/api` routes; `None` disables the guard.
    pub public_token: Option<String>,
}

impl AppState {
    pub fn new(client: ChatClient, public_token: Option<String>) -> Self {
        Self {
            client,
            public_token,
        }
    }
}

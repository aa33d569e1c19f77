//! Completion client errors.
//!
//! Every variant surfaces to the caller as a single upstream error;
//! the variant's `Display` becomes the `detail` string of the 500
//! response.

use thiserror::Error;

/// Errors from the chat completion client.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

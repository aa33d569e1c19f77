//! # CHI OpenAI
//!
//! HTTP client for the OpenAI-compatible chat completions API.
//!
//! Sends the fixed analysis prompts and hands the reply text back for
//! normalization; model identity and credentials come from the process
//! environment.

pub mod client;
pub mod error;

pub use client::{ChatClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::ClientError;

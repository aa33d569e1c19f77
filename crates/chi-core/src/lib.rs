//! # CHI Core
//!
//! Domain logic for the Culture Heat Index service: the Report model,
//! the normalizer that reshapes untrusted model replies into it, and
//! the prompts sent to the completion API.

pub mod prompt;
pub mod report;

pub use report::model::{Competitor, Report, Source};
pub use report::normalize::normalize_report;

//! Brand report entity and normalization.

pub mod model;
pub mod normalize;

pub use model::{Competitor, Report, Source};
pub use normalize::normalize_report;

//! Report domain models.
//!
//! The wire shape consumed by the card UI. Every field is always
//! serialized; absent numeric scores appear as `null`, never as `0`.

use serde::{Deserialize, Serialize};

/// A normalized brand report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub brand: String,
    pub logo: String,
    pub overall_score: Option<f64>,
    pub momentum_avg: f64,
    pub confidence: String,
    pub summary: String,
    pub sources: Vec<Source>,
    pub competitive: Vec<Competitor>,
}

/// A cited source backing the analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub url: String,
}

/// One competitor in the competitive landscape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competitor {
    pub brand: String,
    pub overall: Option<f64>,
    pub summary: Option<String>,
}

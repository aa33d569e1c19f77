//! Normalizer for upstream model replies.
//!
//! The completion model is asked for strict JSON but treated as
//! untrusted: replies may be valid JSON, JSON buried in prose, or no
//! JSON at all. Every reply is reduced to a schema-stable [`Report`]
//! with typed defaults for anything missing or malformed; normalization
//! never fails.

use serde_json::{Map, Value};
use tracing::debug;

use super::model::{Competitor, Report, Source};

/// Confidence level substituted when the model omits one.
const DEFAULT_CONFIDENCE: &str = "Medium";

/// Normalize a raw model reply into a [`Report`].
///
/// `raw` is the completion content as returned by the upstream model;
/// `requested_brand` is the brand the caller asked about, used as the
/// fallback display name when the reply does not carry one.
pub fn normalize_report(raw: &str, requested_brand: &str) -> Report {
    let data = extract_object(raw);

    let brand = data
        .get("brand")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(requested_brand)
        .to_string();

    let logo = data
        .get("logo")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let confidence = data
        .get("confidence")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_CONFIDENCE)
        .to_string();

    let summary = data
        .get("summary")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let sources = match data.get("sources") {
        Some(Value::Array(items)) => items.iter().map(source_entry).collect(),
        _ => Vec::new(),
    };

    let competitive = match data.get("competitive") {
        Some(Value::Array(items)) => items.iter().map(competitor_entry).collect(),
        _ => Vec::new(),
    };

    Report {
        brand,
        logo,
        overall_score: finite_number(data.get("overallScore")),
        momentum_avg: momentum_average(data.get("momentum")),
        confidence,
        summary,
        sources,
        competitive,
    }
}

/// Extract a JSON object from the reply.
///
/// Decoders are tried in order of strictness:
/// 1. the whole reply parses as a JSON object
/// 2. the substring from the first `{` through the last `}` does
/// 3. neither: an empty object
fn extract_object(raw: &str) -> Map<String, Value> {
    if let Ok(Value::Object(map)) = serde_json::from_str(raw) {
        return map;
    }

    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            if let Ok(Value::Object(map)) = serde_json::from_str(&raw[start..=end]) {
                return map;
            }
        }
    }

    debug!(len = raw.len(), "no parsable object in model reply, using defaults");
    Map::new()
}

/// Average the numeric deltas of the momentum entries, rounded to one
/// decimal place. Absent or non-sequence momentum averages to `0.0`.
fn momentum_average(momentum: Option<&Value>) -> f64 {
    let Some(Value::Array(entries)) = momentum else {
        return 0.0;
    };

    let sum: f64 = entries.iter().map(delta_value).sum();
    let avg = sum / entries.len().max(1) as f64;
    // Halves round toward positive infinity: an average of -1.25
    // rounds to -1.2, not -1.3.
    (avg * 10.0 + 0.5).floor() / 10.0
}

/// Numeric contribution of one momentum entry.
///
/// "Flat" deltas contribute zero, as do deltas with no parsable number
/// in them. A delta carried as a JSON number is read as its decimal
/// text.
fn delta_value(entry: &Value) -> f64 {
    let delta = match entry.get("delta") {
        Some(Value::String(s)) => s.to_lowercase(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };

    if delta.contains("flat") {
        return 0.0;
    }

    first_number(&delta).unwrap_or(0.0)
}

/// First signed or unsigned decimal number in the text, if any.
fn first_number(text: &str) -> Option<f64> {
    regex::Regex::new(r"[+-]?\d+(?:\.\d+)?")
        .ok()?
        .find(text)?
        .as_str()
        .parse()
        .ok()
}

/// Coerce a JSON value to a finite number.
///
/// Numbers pass when finite; strings pass when they trim-parse to a
/// finite float (`"88"` coerces, `"N/A"` does not). Null, booleans,
/// arrays, and objects are absent.
fn finite_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Typed view of one sources entry; anything malformed becomes an
/// empty url so sequence length and order are preserved.
fn source_entry(item: &Value) -> Source {
    Source {
        url: item
            .get("url")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

/// Typed view of one competitive entry.
fn competitor_entry(item: &Value) -> Competitor {
    Competitor {
        brand: item
            .get("brand")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        overall: finite_number(item.get("overall")),
        summary: item.get("summary").and_then(Value::as_str).map(str::to_string),
    }
}

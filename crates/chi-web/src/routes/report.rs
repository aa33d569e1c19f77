//! Brand report route handler.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::{error, info};

use chi_core::prompt;
use chi_core::{normalize_report, Report};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub brand: Option<String>,
}

/// POST /api/chi/report - analyze a brand and return the card payload.
pub async fn create_report(
    State(state): State<AppState>,
    body: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Json<Report>, ApiError> {
    // An unreadable body counts as a missing brand, not a server error.
    let brand = body
        .ok()
        .and_then(|Json(request)| request.brand)
        .map(|brand| brand.trim().to_string())
        .filter(|brand| !brand.is_empty())
        .ok_or(ApiError::BrandRequired)?;

    info!(brand = %brand, "report requested");

    let reply = state
        .client
        .complete(prompt::SYSTEM_PROMPT, &prompt::user_prompt(&brand))
        .await
        .map_err(|err| {
            error!(brand = %brand, error = %err, "completion call failed");
            ApiError::Upstream(err)
        })?;

    Ok(Json(normalize_report(&reply, &brand)))
}

// src/handlers/analytics.rs

use axum::{Json, response::IntoResponse};

use crate::models::analytics::AnalyticsSummary;

/// Returns the admin analytics summary.
/// Currently a static stub; stored feedback is not consulted.
pub async fn get_analytics() -> impl IntoResponse {
    Json(AnalyticsSummary::live())
}

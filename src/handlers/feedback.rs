// src/handlers/feedback.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    models::feedback::{FeedbackRecord, SubmitAck},
    store::FeedbackStore,
};

/// Appends a feedback record to the store.
///
/// The body is stored verbatim; no fields are required. Storage failures are
/// reported as an error status instead of a false acknowledgement.
pub async fn submit_feedback(
    State(store): State<Arc<dyn FeedbackStore>>,
    Json(record): Json<FeedbackRecord>,
) -> Result<impl IntoResponse, AppError> {
    store.append(record).await?;

    Ok(Json(SubmitAck { success: true }))
}

/// Lists every stored feedback record in submission order.
///
/// An unreadable store degrades to an empty list (logged at warn level).
pub async fn list_feedback(State(store): State<Arc<dyn FeedbackStore>>) -> impl IntoResponse {
    let records = store.list_all().await.unwrap_or_else(|e| {
        tracing::warn!("Failed to read feedback, returning empty list: {}", e);
        Vec::new()
    });

    Json(records)
}

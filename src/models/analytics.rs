// src/models/analytics.rs

use serde::{Deserialize, Serialize};

/// Aggregate statistics surfaced to administrators.
///
/// Field names are camelCase on the wire; the client reads them directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub average_rating: f64,
    pub total_responses: u64,
    pub active_forms: u64,
    /// Percentage string, e.g. "78%".
    pub response_rate: String,
}

impl AnalyticsSummary {
    /// The summary served by `GET /api/analytics`.
    /// Static: not derived from stored feedback.
    pub fn live() -> Self {
        Self {
            average_rating: 4.3,
            total_responses: 231,
            active_forms: 8,
            response_rate: "78%".to_string(),
        }
    }

    /// Defaults the admin dashboard shows before (or without) a live summary.
    /// `response_rate` intentionally differs from `live()`.
    pub fn fallback() -> Self {
        Self {
            response_rate: "70%".to_string(),
            ..Self::live()
        }
    }
}

/// An analytics payload as received by the client, where any field may be
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialAnalytics {
    pub average_rating: Option<f64>,
    pub total_responses: Option<u64>,
    pub active_forms: Option<u64>,
    pub response_rate: Option<String>,
}

impl PartialAnalytics {
    /// Fills each missing or empty field (zero, empty string) from
    /// `AnalyticsSummary::fallback()` independently.
    pub fn with_fallbacks(&self) -> AnalyticsSummary {
        let fallback = AnalyticsSummary::fallback();
        AnalyticsSummary {
            average_rating: self
                .average_rating
                .filter(|v| *v != 0.0 && !v.is_nan())
                .unwrap_or(fallback.average_rating),
            total_responses: self
                .total_responses
                .filter(|v| *v != 0)
                .unwrap_or(fallback.total_responses),
            active_forms: self
                .active_forms
                .filter(|v| *v != 0)
                .unwrap_or(fallback.active_forms),
            response_rate: self
                .response_rate
                .clone()
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback.response_rate),
        }
    }
}

impl From<AnalyticsSummary> for PartialAnalytics {
    fn from(summary: AnalyticsSummary) -> Self {
        Self {
            average_rating: Some(summary.average_rating),
            total_responses: Some(summary.total_responses),
            active_forms: Some(summary.active_forms),
            response_rate: Some(summary.response_rate),
        }
    }
}

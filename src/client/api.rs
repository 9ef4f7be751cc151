// src/client/api.rs

use std::fmt;

use crate::{
    client::session::{Session, SessionError},
    models::{
        analytics::{AnalyticsSummary, PartialAnalytics},
        feedback::{FeedbackRecord, SubmitAck},
    },
};

#[derive(Debug)]
pub enum ClientError {
    /// Transport or decoding failure.
    Http(reqwest::Error),

    /// The server answered with a non-success status.
    Status(u16),

    Session(SessionError),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Http(e) => write!(f, "request failed: {}", e),
            ClientError::Status(code) => write!(f, "server responded with status {}", code),
            ClientError::Session(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}

impl From<SessionError> for ClientError {
    fn from(err: SessionError) -> Self {
        ClientError::Session(err)
    }
}

/// Thin HTTP client for the feedback and analytics routes.
///
/// No retries: failures are logged and handed back to the caller.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// `base_url` is the server origin, e.g. `http://127.0.0.1:3001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    pub async fn submit_feedback(&self, record: &FeedbackRecord) -> Result<SubmitAck, ClientError> {
        let response = self
            .http
            .post(self.url("/feedback"))
            .json(record)
            .send()
            .await
            .inspect_err(|e| tracing::error!("Failed to submit feedback: {}", e))?;

        let response = check_status(response)?;
        Ok(response.json().await?)
    }

    pub async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>, ClientError> {
        let response = self
            .http
            .get(self.url("/feedback"))
            .send()
            .await
            .inspect_err(|e| tracing::error!("Failed to list feedback: {}", e))?;

        let response = check_status(response)?;
        Ok(response.json().await?)
    }

    pub async fn fetch_analytics(&self) -> Result<AnalyticsSummary, ClientError> {
        let response = self
            .http
            .get(self.url("/analytics"))
            .send()
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch analytics: {}", e))?;

        let response = check_status(response)?;
        Ok(response.json().await?)
    }

    /// Submits the session's feedback form and sends the record to the server.
    ///
    /// The course is marked completed locally even if the request fails.
    pub async fn submit_course_feedback(
        &self,
        session: &mut Session,
        rating: u8,
        comments: &str,
    ) -> Result<SubmitAck, ClientError> {
        let record = session.submit_feedback(rating, comments)?;
        self.submit_feedback(&record).await
    }

    /// Loads the live summary into an admin session.
    ///
    /// Fields missing from the payload keep their fallback values; on failure
    /// the session keeps showing the fallback values for every field.
    pub async fn refresh_analytics(&self, session: &mut Session) -> Result<(), ClientError> {
        let response = self
            .http
            .get(self.url("/analytics"))
            .send()
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch analytics: {}", e))?;

        let response = check_status(response)?;
        let analytics: PartialAnalytics = response.json().await?;
        session.set_analytics(analytics);
        Ok(())
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if !status.is_success() {
        tracing::error!("Request to {} failed with status {}", response.url(), status);
        return Err(ClientError::Status(status.as_u16()));
    }
    Ok(response)
}

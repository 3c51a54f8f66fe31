//! Typed client for the remote audit service.
//!
//! | Method | Path     | Body           | Response                     |
//! |--------|----------|----------------|------------------------------|
//! | POST   | `/query` | none           | `{"score": .., "audit": ..}` |
//! | POST   | `/ans`   | `{"q": ..}`    | `{"ans": ..}`                |
//!
//! Each call is a single request. Failures are returned to the caller and
//! never retried.

use crate::config::AuditApiConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Result of `POST /query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditResponse {
    /// Free text carrying the overall score, e.g. `"Score: 72 ..."`.
    pub score: String,
    /// Markdown audit report.
    pub audit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub q: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub ans: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AuditApiError {
    #[error("question must not be empty")]
    EmptyQuestion,
    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },
    #[error("{endpoint} returned an unexpected payload: {source}")]
    Deserialization {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone)]
pub struct AuditApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AuditApiClient {
    pub fn new(config: &AuditApiConfig) -> Result<Self, AuditApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|source| AuditApiError::Http {
                endpoint: "client_init",
                source,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Run a fresh compliance audit.
    ///
    /// Calls `POST {base_url}/query`.
    pub async fn run_audit(&self) -> Result<AuditResponse, AuditApiError> {
        let endpoint = "POST /query";
        let url = self.endpoint_url("query");
        info!(%url, "requesting compliance audit");

        let resp = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|source| AuditApiError::Http { endpoint, source })?;

        let audit: AuditResponse = read_json(endpoint, resp).await?;
        debug!(
            score_len = audit.score.len(),
            audit_len = audit.audit.len(),
            "audit response received"
        );
        Ok(audit)
    }

    /// Forward a free-text compliance question.
    ///
    /// Calls `POST {base_url}/ans` with `{"q": question}`.
    pub async fn ask(&self, question: &str) -> Result<String, AuditApiError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AuditApiError::EmptyQuestion);
        }

        let endpoint = "POST /ans";
        let url = self.endpoint_url("ans");
        let payload = QuestionRequest {
            q: question.to_string(),
        };
        info!(%url, question_len = question.len(), "forwarding compliance question");

        let resp = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|source| AuditApiError::Http { endpoint, source })?;

        let answer: AnswerResponse = read_json(endpoint, resp).await?;
        Ok(answer.ans)
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    endpoint: &'static str,
    resp: reqwest::Response,
) -> Result<T, AuditApiError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read response body: {e}>"));
        return Err(AuditApiError::Status {
            endpoint,
            status,
            body,
        });
    }

    resp.json()
        .await
        .map_err(|source| AuditApiError::Deserialization { endpoint, source })
}

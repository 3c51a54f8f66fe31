use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use complysmart::audit::SUGGESTED_QUESTIONS;
use complysmart::dashboard::{DashboardView, COMPLIANCE_SUMMARY};
use complysmart::error::AppError;
use complysmart::scoring::{extract_scores, RankedRate, ScoreTable};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractRequest {
    pub(crate) text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExtractResponse {
    pub(crate) categories: ScoreTable,
    pub(crate) ranked_rates: Vec<RankedRate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) average_rate: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuestionPayload {
    #[serde(default)]
    pub(crate) q: Option<String>,
    #[serde(default)]
    pub(crate) suggestion: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnswerPayload {
    pub(crate) question: String,
    pub(crate) answer: String,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/scores/extract", post(extract_endpoint))
        .route("/api/v1/scores/export", get(export_endpoint))
        .route("/api/v1/audit/run", post(run_audit_endpoint))
        .route("/api/v1/audit/report", get(audit_report_endpoint))
        .route("/api/v1/dashboard", get(dashboard_endpoint))
        .route("/api/v1/qa", post(ask_endpoint))
        .route("/api/v1/qa/suggestions", get(suggestions_endpoint))
        .layer(Extension(state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn extract_endpoint(
    Json(payload): Json<ExtractRequest>,
) -> Json<ExtractResponse> {
    let table = extract_scores(&payload.text);
    Json(ExtractResponse {
        ranked_rates: table.ranked_by_rate(),
        average_rate: table.average_rate(),
        categories: table,
    })
}

pub(crate) async fn export_endpoint() -> Result<impl IntoResponse, AppError> {
    let csv = extract_scores(COMPLIANCE_SUMMARY).to_csv_string()?;
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime::TEXT_CSV_UTF_8.to_string()),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"compliance_scores.csv\"".to_string(),
            ),
        ],
        csv,
    ))
}

pub(crate) async fn run_audit_endpoint(
    Extension(state): Extension<AppState>,
) -> Result<Json<DashboardView>, AppError> {
    let response = state.audit.client.run_audit().await?;

    let dashboard = {
        let mut session = state.audit.session();
        session.record_audit(response, Utc::now());
        info!(audits_run = session.audits_run(), "compliance audit recorded");
        session.dashboard()
    };

    dashboard.map(Json).ok_or(AppError::NoAudit)
}

pub(crate) async fn dashboard_endpoint(
    Extension(state): Extension<AppState>,
) -> Result<Json<DashboardView>, AppError> {
    let dashboard = state.audit.session().dashboard();
    dashboard.map(Json).ok_or(AppError::NoAudit)
}

pub(crate) async fn audit_report_endpoint(
    Extension(state): Extension<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let report = state
        .audit
        .session()
        .report()
        .map(str::to_string)
        .ok_or(AppError::NoAudit)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime::TEXT_PLAIN_UTF_8.to_string())],
        report,
    ))
}

pub(crate) async fn ask_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<QuestionPayload>,
) -> Result<Json<AnswerPayload>, AppError> {
    let question = {
        let mut session = state.audit.session();
        match (payload.q, payload.suggestion) {
            (Some(q), _) if !q.trim().is_empty() => session.queue_question(q),
            (_, Some(index)) => {
                session
                    .select_suggestion(index)
                    .ok_or(AppError::UnknownSuggestion(index))?;
            }
            _ => session.queue_question(String::new()),
        }
        session.pending_question().map(str::to_string).unwrap_or_default()
    };

    let answer = state.audit.client.ask(&question).await?;
    state.audit.session().take_question();

    Ok(Json(AnswerPayload { question, answer }))
}

pub(crate) async fn suggestions_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "questions": SUGGESTED_QUESTIONS }))
}

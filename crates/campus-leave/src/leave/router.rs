use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::warn;

use super::export::{export_csv, CONTENT_TYPE};
use super::filter::LeaveFilter;
use super::import::entries_from_value;
use super::report::LeaveReport;
use super::source::{LeaveRecordSource, SourceError};
use super::stats::LeaveStats;
use crate::error::AppError;

const EXPORT_DISPOSITION: &str = "attachment; filename=\"leave-report.csv\"";

/// Router exposing classified leave listings, summaries, and CSV export.
pub fn leave_router<S>(source: Arc<S>) -> Router
where
    S: LeaveRecordSource + 'static,
{
    Router::new()
        .route("/api/v1/leave/records", get(records_handler::<S>))
        .route("/api/v1/leave/summary", get(summary_handler::<S>))
        .route("/api/v1/leave/export", get(export_handler::<S>))
        .route("/api/v1/leave/classify", post(classify_handler))
        .with_state(source)
}

pub(crate) async fn records_handler<S>(
    State(source): State<Arc<S>>,
    Query(filter): Query<LeaveFilter>,
) -> Response
where
    S: LeaveRecordSource + 'static,
{
    match source.entries() {
        Ok(entries) => Json(LeaveReport::build(&entries, &filter)).into_response(),
        Err(err) => source_error_response(err),
    }
}

pub(crate) async fn summary_handler<S>(
    State(source): State<Arc<S>>,
    Query(filter): Query<LeaveFilter>,
) -> Response
where
    S: LeaveRecordSource + 'static,
{
    match source.entries() {
        Ok(entries) => Json(LeaveStats::from_entries(filter.apply(&entries))).into_response(),
        Err(err) => source_error_response(err),
    }
}

pub(crate) async fn export_handler<S>(
    State(source): State<Arc<S>>,
    Query(filter): Query<LeaveFilter>,
) -> Response
where
    S: LeaveRecordSource + 'static,
{
    let entries = match source.entries() {
        Ok(entries) => entries,
        Err(err) => return source_error_response(err),
    };

    match export_csv(filter.apply(&entries)) {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, CONTENT_TYPE.to_string()),
                (header::CONTENT_DISPOSITION, EXPORT_DISPOSITION.to_string()),
            ],
            body,
        )
            .into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub(crate) async fn classify_handler(
    Query(filter): Query<LeaveFilter>,
    Json(payload): Json<Value>,
) -> Result<Json<LeaveReport>, AppError> {
    let entries = entries_from_value(payload)?;
    Ok(Json(LeaveReport::build(&entries, &filter)))
}

fn source_error_response(err: SourceError) -> Response {
    let status = match err {
        SourceError::NotLoaded => StatusCode::NOT_FOUND,
        SourceError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    warn!(%err, "leave source failed");
    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}

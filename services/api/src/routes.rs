use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use campus_leave::leave::{leave_router, LeaveRecordSource};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_leave_routes<S>(source: Arc<S>) -> axum::Router
where
    S: LeaveRecordSource + 'static,
{
    leave_router(source)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryLeaveSource;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use campus_leave::leave::{LeaveEntry, LeaveRecord};
    use serde_json::Value;
    use tower::ServiceExt;

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn leave_routes_are_mounted_alongside_probes() {
        let source = Arc::new(InMemoryLeaveSource::with_entries(vec![LeaveEntry {
            id: "L-1".to_string(),
            status: LeaveRecord::new("Principal Approved"),
            ..LeaveEntry::default()
        }]));

        let router = with_leave_routes(source);
        let response = router
            .clone()
            .oneshot(
                Request::get("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(
                Request::get("/api/v1/leave/summary")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(payload["approved"], 1);
    }

    #[tokio::test]
    async fn unloaded_snapshot_returns_not_found() {
        let router = with_leave_routes(Arc::new(InMemoryLeaveSource::default()));
        let response = router
            .oneshot(
                Request::get("/api/v1/leave/records")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

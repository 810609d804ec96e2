use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use loancheck::eligibility::{eligibility_router, EligibilityEvaluator};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

pub(crate) fn with_service_routes(evaluator: Arc<EligibilityEvaluator>) -> axum::Router {
    eligibility_router(evaluator)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/frontend", axum::routing::get(frontend_endpoint))
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

/// Serve the static checker page verbatim.
///
/// Pure file passthrough: the asset is read per request, and a missing or
/// unreadable file maps to a 404 carrying the error description.
pub(crate) async fn frontend_endpoint(Extension(state): Extension<AppState>) -> Response {
    match tokio::fs::read(state.frontend_asset.as_ref()).await {
        Ok(contents) => {
            let content_type = mime_guess::from_path(state.frontend_asset.as_ref())
                .first_or(mime_guess::mime::TEXT_HTML);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, content_type.as_ref())],
                contents,
            )
                .into_response()
        }
        Err(error) => {
            warn!(asset = %state.frontend_asset.display(), %error, "front-end asset unavailable");
            (
                StatusCode::NOT_FOUND,
                format!("HTML file not found or error: {error}"),
            )
                .into_response()
        }
    }
}

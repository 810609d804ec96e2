use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::debug;

use super::domain::{EligibilityVerdict, LoanApplicationRequest};
use super::evaluation::EligibilityEvaluator;

/// Router builder exposing the eligibility check endpoint.
pub fn eligibility_router(evaluator: Arc<EligibilityEvaluator>) -> Router {
    Router::new()
        .route("/api/CheckLoanEligibility", post(check_eligibility_handler))
        .with_state(evaluator)
}

/// Evaluate one application and serialize the verdict.
///
/// The body is parsed by hand rather than through the `Json` extractor so a
/// payload that is not valid JSON still yields a 200 with the invalid-data
/// verdict instead of a framework rejection. Rejection travels in
/// `isEligible`, never in the transport status.
pub(crate) async fn check_eligibility_handler(
    State(evaluator): State<Arc<EligibilityEvaluator>>,
    body: Bytes,
) -> Json<EligibilityVerdict> {
    let request: LoanApplicationRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(error) => {
            debug!(%error, "discarding unparseable eligibility payload");
            return Json(EligibilityVerdict::invalid_request());
        }
    };

    Json(evaluator.evaluate(&request.into_application()))
}

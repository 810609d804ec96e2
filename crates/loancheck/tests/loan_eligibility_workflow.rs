//! End-to-end specifications for the eligibility endpoint, driven through the
//! public router so wire names, defaults, and transport behavior are all
//! exercised together.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use loancheck::eligibility::{eligibility_router, EligibilityEvaluator};
use serde_json::{json, Value};
use tower::ServiceExt;

fn build_router() -> axum::Router {
    eligibility_router(Arc::new(EligibilityEvaluator::standard()))
}

async fn check(body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/CheckLoanEligibility")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");

    let response = build_router()
        .oneshot(request)
        .await
        .expect("router dispatch");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload: Value = serde_json::from_slice(&bytes).expect("json body");
    (status, payload)
}

#[tokio::test]
async fn qualifying_applicant_is_approved() {
    let (status, payload) = check(
        r#"{"name": "Asha", "age": 30, "creditScore": 700, "salary": 50000,
            "existingEmi": 5000, "amount": 500000}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        payload,
        json!({
            "isEligible": true,
            "reason": "Congratulations! You are eligible for the loan."
        })
    );
}

#[tokio::test]
async fn underage_applicant_is_rejected() {
    let (status, payload) =
        check(r#"{"name": "Raj", "age": 19, "creditScore": 700, "salary": 50000}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        payload,
        json!({
            "isEligible": false,
            "reason": "Applicant must be at least 21 years old."
        })
    );
}

#[tokio::test]
async fn empty_payload_reports_missing_fields() {
    let (status, payload) = check("{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        payload,
        json!({
            "isEligible": false,
            "reason": "All fields are required."
        })
    );
}

#[tokio::test]
async fn emi_burden_rejection_names_the_emi_rule() {
    let (status, payload) = check(
        r#"{"name": "Sam", "age": 25, "creditScore": 680, "salary": 30000,
            "existingEmi": 20000}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        payload,
        json!({
            "isEligible": false,
            "reason": "Existing EMI exceeds 50% of salary."
        })
    );
}

#[tokio::test]
async fn malformed_payload_yields_invalid_data_verdict_with_success_status() {
    let (status, payload) = check("this is not json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        payload,
        json!({
            "isEligible": false,
            "reason": "Invalid request data."
        })
    );
}

#[tokio::test]
async fn response_body_is_json_with_camel_case_keys() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/CheckLoanEligibility")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .expect("request");

    let response = build_router()
        .oneshot(request)
        .await
        .expect("router dispatch");

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/json"));

    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload: Value = serde_json::from_slice(&bytes).expect("json body");
    let keys: Vec<&str> = payload
        .as_object()
        .expect("object body")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["isEligible", "reason"]);
}

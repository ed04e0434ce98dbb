use axum::http::StatusCode;
use axum::response::IntoResponse;
use pretty_assertions::assert_eq;
use rstest::rstest;

use slotbook_api::middleware::auth::{hash_password, verify_password};
use slotbook_api::middleware::error_handling::AppError;
use slotbook_core::errors::{AdmissionRejection, BookingError, CoverageError};

#[rstest]
#[case(BookingError::Validation("bad input".to_string()), StatusCode::BAD_REQUEST)]
#[case(BookingError::Coverage(CoverageError::InvalidRange), StatusCode::BAD_REQUEST)]
#[case(
    BookingError::Rejected(AdmissionRejection::DateOutOfRange),
    StatusCode::BAD_REQUEST
)]
#[case(BookingError::NotFound("missing".to_string()), StatusCode::NOT_FOUND)]
#[case(
    BookingError::PreconditionFailed("slot taken".to_string()),
    StatusCode::CONFLICT
)]
#[case(BookingError::Authentication("no".to_string()), StatusCode::UNAUTHORIZED)]
#[case(
    BookingError::StoreUnavailable(eyre::eyre!("down")),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: BookingError, #[case] expected: StatusCode) {
    let response = AppError(error).into_response();
    assert_eq!(response.status(), expected);
}

#[tokio::test]
async fn test_rejection_message_reaches_the_body() {
    let response = AppError(BookingError::Rejected(AdmissionRejection::EventNotFound));
    let response = response.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["error"], "Event not exists");
}

#[test]
fn test_eyre_report_maps_to_internal_error() {
    let err: AppError = eyre::eyre!("connection refused").into();
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_password_hash_round_trip() {
    let hash = hash_password("hunter2hunter2").expect("hashing succeeds");
    assert_ne!(hash, "hunter2hunter2");

    assert!(verify_password("hunter2hunter2", &hash).expect("verify runs"));
    assert!(!verify_password("wrong-password", &hash).expect("verify runs"));
}

#[test]
fn test_verify_rejects_garbage_hash() {
    assert!(verify_password("whatever", "not-a-phc-string").is_err());
}

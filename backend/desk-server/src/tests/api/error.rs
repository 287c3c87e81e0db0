use crate::ApiError;

use desk_db::DbError;
use desk_service::ServiceError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Ticket 7 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Ticket 7 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "title is required".into(),
        field: Some("title".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let (status, json) = body_json(ApiError::bad_request("malformed body")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert_eq!(json["error"]["message"], "malformed body");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_service_not_found_maps_to_not_found() {
    let error = ApiError::from(ServiceError::not_found("Inbox entry 3 not found"));

    match error {
        ApiError::NotFound { message, .. } => assert_eq!(message, "Inbox entry 3 not found"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_service_validation_keeps_field() {
    let error = ApiError::from(ServiceError::validation("receivers must not be empty", "receivers"));

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    match error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("receivers")),
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_database_error_hides_details() {
    let db_error = DbError::from(sqlx::Error::PoolTimedOut);
    let error = ApiError::from(ServiceError::from(db_error));

    match error {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Database operation failed");
        }
        other => panic!("Expected Internal, got {:?}", other),
    }
}

use crate::ApiError;
use crate::api::error::applied;

use hub_core::{EntityType, MutationOutcome, VersionConflict};
use hub_mutation::MutationError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use serde_json::json;
use uuid::Uuid;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Task not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Task not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Title too long".into(),
        field: Some("title".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_conflict_returns_409_with_current_state() {
    let conflict = VersionConflict {
        current_version: 5,
        current: json!({"title": "Server copy"}),
    };

    let (status, json) = body_json(ApiError::conflict(conflict)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["kind"], "VersionConflict");
    assert_eq!(json["current_version"], 5);
    assert_eq!(json["current_data"]["title"], "Server copy");
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn test_status_codes_for_remaining_variants() {
    let cases = vec![
        (ApiError::unauthorized("no actor"), StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        (ApiError::bad_request("bad json"), StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        (
            ApiError::Forbidden {
                message: "admins only".into(),
                location: ErrorLocation::from(Location::caller()),
            },
            StatusCode::FORBIDDEN,
            "FORBIDDEN",
        ),
        (
            ApiError::Internal {
                message: "boom".into(),
                location: ErrorLocation::from(Location::caller()),
            },
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
        ),
    ];

    for (error, expected_status, expected_code) in cases {
        let (status, json) = body_json(error).await;
        assert_eq!(status, expected_status);
        assert_eq!(json["error"]["code"], expected_code);
    }
}

#[test]
fn test_mutation_errors_map_to_api_errors() {
    let id = Uuid::new_v4();

    let not_found: ApiError = MutationError::not_found(EntityType::Task, id).into();
    let validation: ApiError = MutationError::validation("status", "unknown column").into();
    let forbidden: ApiError = MutationError::forbidden("admins only").into();

    assert!(matches!(not_found, ApiError::NotFound { .. }));
    assert!(matches!(
        validation,
        ApiError::Validation { field: Some(ref f), .. } if f == "status"
    ));
    assert!(matches!(forbidden, ApiError::Forbidden { .. }));
}

#[test]
fn test_invalid_uuid_is_validation_error_on_id() {
    let error: ApiError = Uuid::parse_str("not-a-uuid").unwrap_err().into();

    assert!(matches!(
        error,
        ApiError::Validation { field: Some(ref f), .. } if f == "id"
    ));
}

#[test]
fn test_applied_unwraps_or_converts_conflict() {
    let ok = applied(MutationOutcome::Applied(json!({"v": 2})));
    let conflict = applied(MutationOutcome::Conflict(VersionConflict {
        current_version: 3,
        current: json!({"v": 3}),
    }));

    assert_eq!(ok.unwrap(), json!({"v": 2}));
    assert!(matches!(
        conflict,
        Err(ApiError::Conflict {
            current_version: 3,
            ..
        })
    ));
}

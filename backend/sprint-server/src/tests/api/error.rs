use crate::{AlertHeaders, ApiError, EndpointError};

use sprint_core::{CoreError, SPRINT_ENTITY_NAME};
use sprint_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn given_not_found_when_rendered_then_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Sprint 3 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_that!(response.status(), eq(StatusCode::NOT_FOUND));

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Sprint 3 not found");
    assert_that!(json["error"].get("entity").is_none(), eq(true));
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Invalid sprint id: 'abc'".into(),
        field: Some("id".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_that!(response.status(), eq(StatusCode::BAD_REQUEST));

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "id");
}

#[tokio::test]
async fn given_invalid_request_when_rendered_then_carries_error_key_and_failure_headers() {
    let alerts = AlertHeaders::new("sprintApp");
    let error = ApiError::from_endpoint(
        EndpointError::invalid_request(
            "A new sprint cannot already have an ID",
            SPRINT_ENTITY_NAME,
            "idexists",
        ),
        &alerts,
    );
    let response = error.into_response();

    assert_that!(response.status(), eq(StatusCode::BAD_REQUEST));
    assert_that!(
        response.headers().get("X-sprintApp-error").unwrap().to_str().unwrap(),
        eq("error.idexists")
    );
    assert_that!(
        response.headers().get("X-sprintApp-params").unwrap().to_str().unwrap(),
        eq("sprint")
    );

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "idexists");
    assert_eq!(json["error"]["entity"], "sprint");
}

#[tokio::test]
async fn given_db_error_when_rendered_then_returns_500_without_details() {
    let db_error = DbError::Initialization {
        message: "disk on fire".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = ApiError::from(db_error).into_response();

    assert_that!(response.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Database operation failed");
}

#[test]
fn given_store_failure_from_endpoint_when_mapped_then_is_internal() {
    let alerts = AlertHeaders::new("sprintApp");
    let error = EndpointError::from(DbError::Migration {
        message: "boom".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let mapped = ApiError::from_endpoint(error, &alerts);

    assert_that!(mapped.kind(), eq("internal"));
}

#[test]
fn given_unknown_sort_property_when_converted_then_is_bad_request() {
    let error = CoreError::InvalidSortProperty {
        property: "password".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let mapped = ApiError::from(error);

    assert_that!(mapped.kind(), eq("bad_request"));
}

#[test]
fn given_invalid_status_when_converted_then_is_validation_on_status_field() {
    let error = CoreError::InvalidSprintStatus {
        value: "archived".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let mapped = ApiError::from(error);

    match mapped {
        ApiError::Validation { field, .. } => assert_that!(field, some(eq("status"))),
        other => panic!("expected validation error, got {other:?}"),
    }
}

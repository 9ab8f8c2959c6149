//! Sprint REST API handlers
//!
//! Thin HTTP adapters over [`SprintEndpoint`](crate::SprintEndpoint): decode
//! the request, call the endpoint, then attach status codes and headers.

use crate::{
    ApiError, ApiResult, AppState, SprintJson, pagination_headers, parse_page_request,
};

use sprint_core::{SPRINT_ENTITY_NAME, Sprint, SprintDto};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::{HeaderMap, HeaderValue, StatusCode, header::LOCATION},
};
use error_location::ErrorLocation;
use log::info;

// =============================================================================
// Handlers
// =============================================================================

/// POST /sprints
///
/// Create a new sprint. The body must not carry an id.
pub async fn create_sprint(
    State(state): State<AppState>,
    SprintJson(dto): SprintJson<SprintDto>,
) -> ApiResult<(StatusCode, HeaderMap, Json<SprintDto>)> {
    let _timer = state.metrics.start("create");

    let sprint = Sprint::try_from(dto)?;
    let created = state
        .endpoint
        .create(sprint)
        .await
        .map_err(|e| ApiError::from_endpoint(e, &state.alerts))?;

    info!("Created sprint {}", created.id);

    let mut headers = state.alerts.entity_created(SPRINT_ENTITY_NAME, created.id);
    let location = format!("{}{}", state.api_config.route_prefix(), created.location);
    let location = HeaderValue::from_str(&location).map_err(|e| ApiError::Internal {
        message: format!("Invalid Location header: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;
    headers.insert(LOCATION, location);

    Ok((
        StatusCode::CREATED,
        headers,
        Json(SprintDto::from(created.sprint)),
    ))
}

/// PUT /sprints
///
/// Update (or upsert) a sprint. The body must carry an id.
pub async fn update_sprint(
    State(state): State<AppState>,
    SprintJson(dto): SprintJson<SprintDto>,
) -> ApiResult<(HeaderMap, Json<SprintDto>)> {
    let _timer = state.metrics.start("update");

    let sprint = Sprint::try_from(dto)?;
    let updated = state
        .endpoint
        .update(sprint)
        .await
        .map_err(|e| ApiError::from_endpoint(e, &state.alerts))?;

    let id = updated.id.map(|id| id.to_string()).unwrap_or_default();
    info!("Updated sprint {}", id);

    let headers = state.alerts.entity_updated(SPRINT_ENTITY_NAME, id);
    Ok((headers, Json(SprintDto::from(updated))))
}

/// GET /sprints?page=&size=&sort=
///
/// List one page of sprints with `X-Total-Count` and `Link` headers
pub async fn list_sprints(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> ApiResult<(HeaderMap, Json<Vec<SprintDto>>)> {
    let _timer = state.metrics.start("list");

    let request = parse_page_request(query.as_deref(), &state.api_config)?;
    let page = state
        .endpoint
        .list(&request)
        .await
        .map_err(|e| ApiError::from_endpoint(e, &state.alerts))?;

    let headers = pagination_headers(&page, &state.sprints_url())?;
    let body = page.content.into_iter().map(SprintDto::from).collect();

    Ok((headers, Json(body)))
}

/// GET /sprints/{id}
///
/// Get a single sprint by ID
pub async fn get_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SprintDto>> {
    let _timer = state.metrics.start("get");

    let sprint_id = parse_id(&id)?;
    let sprint = state
        .endpoint
        .get(sprint_id)
        .await
        .map_err(|e| ApiError::from_endpoint(e, &state.alerts))?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Sprint {} not found", sprint_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(SprintDto::from(sprint)))
}

/// DELETE /sprints/{id}
///
/// Delete a sprint. Deleting an unknown id still succeeds.
pub async fn delete_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, HeaderMap)> {
    let _timer = state.metrics.start("delete");

    let sprint_id = parse_id(&id)?;
    state
        .endpoint
        .delete(sprint_id)
        .await
        .map_err(|e| ApiError::from_endpoint(e, &state.alerts))?;

    info!("Deleted sprint {}", sprint_id);

    let headers = state.alerts.entity_deleted(SPRINT_ENTITY_NAME, sprint_id);
    Ok((StatusCode::OK, headers))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn parse_id(id: &str) -> ApiResult<i64> {
    id.parse().map_err(|_| ApiError::Validation {
        message: format!("Invalid sprint id: '{}'", id),
        field: Some("id".into()),
        location: ErrorLocation::from(Location::caller()),
    })
}

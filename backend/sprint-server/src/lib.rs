pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::sprint_json::SprintJson,
    headers::alert_headers::AlertHeaders,
    pagination::{page_params::parse_page_request, pagination_headers::pagination_headers},
    sprints::{
        endpoint_error::{EndpointError, Result as EndpointResult},
        sprint_endpoint::{CreatedSprint, SprintEndpoint},
        sprints::{create_sprint, delete_sprint, get_sprint, list_sprints, update_sprint},
    },
};
pub use app_state::AppState;
pub use crate::metrics::{ApiMetrics, MetricsTimer};

pub use crate::routes::build_router;

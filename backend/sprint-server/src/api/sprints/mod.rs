pub mod endpoint_error;
pub mod sprint_endpoint;
#[allow(clippy::module_inception)]
pub mod sprints;

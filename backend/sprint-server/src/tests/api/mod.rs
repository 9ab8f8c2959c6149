mod alert_headers;
mod error;
mod sprint_endpoint;

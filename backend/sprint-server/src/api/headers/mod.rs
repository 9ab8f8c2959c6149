pub mod alert_headers;

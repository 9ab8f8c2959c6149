//! `X-Total-Count` and RFC 5988 `Link` headers for paged list responses.

use crate::{ApiError, ApiResult};

use sprint_core::Page;

use std::panic::Location;

use axum::http::{HeaderMap, HeaderValue, header::LINK};
use error_location::ErrorLocation;

pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// `base_url` is the collection URL without a query string, e.g.
/// `/api/sprints`.
pub fn pagination_headers<T>(page: &Page<T>, base_url: &str) -> ApiResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from(page.total_elements));

    let current = u64::from(page.page);
    let size = page.size;
    let mut links = Vec::with_capacity(4);

    if page.has_next() {
        links.push(link(base_url, current + 1, size, "next"));
    }
    if page.has_previous() {
        links.push(link(base_url, current - 1, size, "prev"));
    }
    links.push(link(base_url, page.last_page(), size, "last"));
    links.push(link(base_url, 0, size, "first"));

    let value = HeaderValue::from_str(&links.join(",")).map_err(|e| ApiError::Internal {
        message: format!("Invalid Link header: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;
    headers.insert(LINK, value);

    Ok(headers)
}

fn link(base_url: &str, page: u64, size: u32, rel: &str) -> String {
    format!("<{}?page={}&size={}>; rel=\"{}\"", base_url, page, size, rel)
}

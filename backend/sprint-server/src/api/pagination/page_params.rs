use crate::{ApiError, ApiResult};

use sprint_config::ApiConfig;
use sprint_core::{PageRequest, Sort};

use std::panic::Location;

use error_location::ErrorLocation;

/// Build a [`PageRequest`] from `?page=&size=&sort=prop,dir` query parameters.
///
/// `sort` may repeat, and one value may list several properties sharing a
/// trailing direction (`name,goal,desc`). A missing or zero `size` falls back
/// to the configured default and sizes above the configured maximum are
/// clamped.
pub fn parse_page_request(raw_query: Option<&str>, config: &ApiConfig) -> ApiResult<PageRequest> {
    let mut page: u32 = 0;
    let mut size: u32 = 0;
    let mut sort = Vec::new();

    for (key, value) in url::form_urlencoded::parse(raw_query.unwrap_or("").as_bytes()) {
        match key.as_ref() {
            "page" => page = parse_number(&value, "page")?,
            "size" => size = parse_number(&value, "size")?,
            "sort" => sort.extend(Sort::parse_list(&value)?),
            _ => {}
        }
    }

    let size = match size {
        0 => config.default_page_size,
        n => n.min(config.max_page_size),
    };

    let mut request = PageRequest::new(page, size);
    request.sort = sort;
    Ok(request)
}

#[track_caller]
fn parse_number(value: &str, name: &str) -> ApiResult<u32> {
    value.trim().parse().map_err(|_| ApiError::BadRequest {
        message: format!("Invalid {} parameter: '{}'", name, value),
        location: ErrorLocation::from(Location::caller()),
    })
}

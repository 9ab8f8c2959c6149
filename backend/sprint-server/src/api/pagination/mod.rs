pub mod page_params;
pub mod pagination_headers;

pub mod page;
pub mod page_request;
pub mod sort;

pub mod error;
pub mod extractors;
pub mod headers;
pub mod pagination;
pub mod sprints;

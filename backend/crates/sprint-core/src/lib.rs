pub mod error;
pub mod models;
pub mod paging;


pub use error::{CoreError, Result as CoreResult};
pub use models::sprint::{SPRINT_ENTITY_NAME, Sprint};
pub use models::sprint_dto::SprintDto;
pub use models::sprint_status::SprintStatus;
pub use models::timestamp::parse_timestamp;
pub use paging::page::Page;
pub use paging::page_request::PageRequest;
pub use paging::sort::{Sort, SortDirection, SortProperty};

pub use error_location::ErrorLocation;

pub mod error;
pub mod repositories;
pub mod store;

pub use error::{DbError, Result};
pub use repositories::sprint_repository::SprintRepository;
pub use store::sprint_store::SprintStore;

use sqlx::migrate::Migrator;

/// Embedded schema migrations for the sprint database
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

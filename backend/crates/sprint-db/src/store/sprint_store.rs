use crate::Result as DbErrorResult;

use sprint_core::{Page, PageRequest, Sprint};

use async_trait::async_trait;

/// Persistence contract the sprint endpoint is written against.
///
/// Implementations must be safe to share between concurrent requests. No
/// locking beyond what the backing store provides is expected.
#[async_trait]
pub trait SprintStore: Send + Sync {
    /// Insert when `sprint.id` is `None` (the store assigns the id),
    /// otherwise insert-or-update the row with that id.
    async fn save(&self, sprint: Sprint) -> DbErrorResult<Sprint>;

    async fn find_all(&self, request: &PageRequest) -> DbErrorResult<Page<Sprint>>;

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Sprint>>;

    /// Removing an id that does not exist is not an error.
    async fn delete_by_id(&self, id: i64) -> DbErrorResult<()>;

    /// Cheap round trip used by readiness probes
    async fn ping(&self) -> DbErrorResult<()> {
        Ok(())
    }
}

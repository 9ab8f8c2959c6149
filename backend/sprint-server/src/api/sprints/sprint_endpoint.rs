//! Store-facing half of the sprint REST resource.
//!
//! Every operation is a direct pass-through to the [`SprintStore`]; the only
//! checks are on the presence of `id`. HTTP concerns (status codes, headers)
//! live in the handlers in `sprints.rs`.

use crate::{EndpointError, EndpointResult};

use sprint_core::{ErrorLocation, Page, PageRequest, SPRINT_ENTITY_NAME, Sprint};
use sprint_db::SprintStore;

use std::panic::Location;
use std::sync::Arc;

use log::debug;

/// A freshly created sprint and where it can be fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedSprint {
    pub id: i64,
    /// Path relative to the API root, e.g. `/sprints/7`
    pub location: String,
    pub sprint: Sprint,
}

#[derive(Clone)]
pub struct SprintEndpoint {
    store: Arc<dyn SprintStore>,
}

impl SprintEndpoint {
    pub fn new(store: Arc<dyn SprintStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn SprintStore> {
        &self.store
    }

    pub fn location(id: i64) -> String {
        format!("/sprints/{}", id)
    }

    pub async fn create(&self, sprint: Sprint) -> EndpointResult<CreatedSprint> {
        debug!("REST request to save Sprint : {:?}", sprint);

        if sprint.id.is_some() {
            return Err(EndpointError::invalid_request(
                "A new sprint cannot already have an ID",
                SPRINT_ENTITY_NAME,
                "idexists",
            ));
        }

        let saved = self.store.save(sprint).await?;
        let id = saved.id.ok_or_else(|| EndpointError::Internal {
            message: "store returned a new sprint without an id".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(CreatedSprint {
            id,
            location: Self::location(id),
            sprint: saved,
        })
    }

    pub async fn update(&self, sprint: Sprint) -> EndpointResult<Sprint> {
        debug!("REST request to update Sprint : {:?}", sprint);

        if sprint.id.is_none() {
            return Err(EndpointError::invalid_request(
                "Invalid id",
                SPRINT_ENTITY_NAME,
                "idnull",
            ));
        }

        Ok(self.store.save(sprint).await?)
    }

    pub async fn list(&self, request: &PageRequest) -> EndpointResult<Page<Sprint>> {
        debug!("REST request to get a page of Sprints : {:?}", request);

        Ok(self.store.find_all(request).await?)
    }

    /// `None` when no sprint has this id
    pub async fn get(&self, id: i64) -> EndpointResult<Option<Sprint>> {
        debug!("REST request to get Sprint : {}", id);

        Ok(self.store.find_by_id(id).await?)
    }

    /// Succeeds whether or not the sprint existed.
    pub async fn delete(&self, id: i64) -> EndpointResult<()> {
        debug!("REST request to delete Sprint : {}", id);

        self.store.delete_by_id(id).await?;
        Ok(())
    }
}

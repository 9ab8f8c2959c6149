use crate::{EndpointError, SprintEndpoint};

use sprint_core::{ErrorLocation, Page, PageRequest, Sprint};
use sprint_db::{DbError, Result as DbErrorResult, SprintStore};

use std::panic::Location;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use googletest::prelude::*;

/// In-memory store that records every call it receives
#[derive(Default)]
struct RecordingStore {
    calls: Mutex<Vec<String>>,
    rows: Mutex<Vec<Sprint>>,
    /// Simulates a broken store that forgets to assign ids
    drop_ids: bool,
}

impl RecordingStore {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl SprintStore for RecordingStore {
    async fn save(&self, mut sprint: Sprint) -> DbErrorResult<Sprint> {
        self.record("save");
        let mut rows = self.rows.lock().unwrap();
        if self.drop_ids {
            return Ok(sprint);
        }
        match sprint.id {
            Some(id) => rows.retain(|s| s.id != Some(id)),
            None => sprint.id = Some(rows.len() as i64 + 1),
        }
        rows.push(sprint.clone());
        Ok(sprint)
    }

    async fn find_all(&self, request: &PageRequest) -> DbErrorResult<Page<Sprint>> {
        self.record("find_all");
        let rows = self.rows.lock().unwrap();
        let content = rows
            .iter()
            .skip(request.offset() as usize)
            .take(request.limit() as usize)
            .cloned()
            .collect();
        Ok(Page::new(content, request.page, request.size, rows.len() as u64))
    }

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Sprint>> {
        self.record(format!("find_by_id:{id}"));
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|s| s.id == Some(id)).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> DbErrorResult<()> {
        self.record(format!("delete_by_id:{id}"));
        self.rows.lock().unwrap().retain(|s| s.id != Some(id));
        Ok(())
    }
}

struct FailingStore;

fn store_failure() -> DbError {
    DbError::Initialization {
        message: "store offline".into(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[async_trait]
impl SprintStore for FailingStore {
    async fn save(&self, _sprint: Sprint) -> DbErrorResult<Sprint> {
        Err(store_failure())
    }

    async fn find_all(&self, _request: &PageRequest) -> DbErrorResult<Page<Sprint>> {
        Err(store_failure())
    }

    async fn find_by_id(&self, _id: i64) -> DbErrorResult<Option<Sprint>> {
        Err(store_failure())
    }

    async fn delete_by_id(&self, _id: i64) -> DbErrorResult<()> {
        Err(store_failure())
    }
}

fn endpoint() -> (SprintEndpoint, Arc<RecordingStore>) {
    let store = Arc::new(RecordingStore::default());
    (SprintEndpoint::new(store.clone()), store)
}

fn sprint(name: &str) -> Sprint {
    Sprint::new(name.to_string(), None)
}

#[tokio::test]
async fn given_sprint_with_id_when_creating_then_rejects_with_idexists_and_skips_store() {
    let (endpoint, store) = endpoint();

    let result = endpoint.create(sprint("Sprint 1").with_id(5)).await;

    match result {
        Err(EndpointError::InvalidRequest {
            entity_name,
            error_key,
            ..
        }) => {
            assert_that!(entity_name, eq("sprint"));
            assert_that!(error_key, eq("idexists"));
        }
        other => panic!("expected idexists rejection, got {other:?}"),
    }
    assert_that!(store.calls(), len(eq(0)));
}

#[tokio::test]
async fn given_new_sprint_when_creating_then_location_ends_with_assigned_id() {
    let (endpoint, store) = endpoint();

    let created = endpoint.create(sprint("Sprint 1")).await.unwrap();

    assert_that!(created.sprint.id, some(eq(created.id)));
    assert_that!(created.location, eq(&format!("/sprints/{}", created.id)));
    assert_that!(store.calls(), eq(&vec!["save".to_string()]));
}

#[tokio::test]
async fn given_store_that_assigns_no_id_when_creating_then_fails_internally() {
    let store = Arc::new(RecordingStore {
        drop_ids: true,
        ..RecordingStore::default()
    });
    let endpoint = SprintEndpoint::new(store);

    let result = endpoint.create(sprint("Sprint 1")).await;

    assert!(matches!(result, Err(EndpointError::Internal { .. })));
}

#[tokio::test]
async fn given_sprint_without_id_when_updating_then_rejects_with_idnull_and_skips_store() {
    let (endpoint, store) = endpoint();

    let result = endpoint.update(sprint("Sprint 1")).await;

    match result {
        Err(EndpointError::InvalidRequest { error_key, .. }) => {
            assert_that!(error_key, eq("idnull"))
        }
        other => panic!("expected idnull rejection, got {other:?}"),
    }
    assert_that!(store.calls(), len(eq(0)));
}

#[tokio::test]
async fn given_sprint_with_id_when_updating_then_returns_saved_value() {
    let (endpoint, store) = endpoint();
    let created = endpoint.create(sprint("Before")).await.unwrap();

    let updated = endpoint
        .update(sprint("After").with_id(created.id))
        .await
        .unwrap();

    assert_that!(updated.name, eq("After"));
    assert_that!(updated.id, some(eq(created.id)));
    assert_that!(store.calls(), len(eq(2)));
}

#[tokio::test]
async fn given_unknown_id_when_getting_then_returns_none() {
    let (endpoint, _store) = endpoint();

    let found = endpoint.get(99).await.unwrap();

    assert_that!(found, none());
}

#[tokio::test]
async fn given_existing_sprint_when_deleting_then_get_returns_none() {
    let (endpoint, store) = endpoint();
    let created = endpoint.create(sprint("Doomed")).await.unwrap();

    endpoint.delete(created.id).await.unwrap();
    let found = endpoint.get(created.id).await.unwrap();

    assert_that!(found, none());
    assert_that!(
        store.calls(),
        eq(&vec![
            "save".to_string(),
            format!("delete_by_id:{}", created.id),
            format!("find_by_id:{}", created.id),
        ])
    );
}

#[tokio::test]
async fn given_unknown_id_when_deleting_then_succeeds() {
    let (endpoint, _store) = endpoint();

    let result = endpoint.delete(12345).await;

    assert_that!(result, ok(anything()));
}

#[tokio::test]
async fn given_three_sprints_when_listing_page_of_two_then_returns_two_of_three() {
    let (endpoint, _store) = endpoint();
    for name in ["A", "B", "C"] {
        endpoint.create(sprint(name)).await.unwrap();
    }

    let page = endpoint.list(&PageRequest::new(0, 2)).await.unwrap();

    assert_that!(page.content, len(eq(2)));
    assert_that!(page.total_elements, eq(3));
}

#[tokio::test]
async fn given_failing_store_when_calling_any_operation_then_surfaces_store_error() {
    let endpoint = SprintEndpoint::new(Arc::new(FailingStore));

    let created = endpoint.create(sprint("Sprint 1")).await;
    let listed = endpoint.list(&PageRequest::new(0, 20)).await;
    let found = endpoint.get(1).await;
    let deleted = endpoint.delete(1).await;

    assert!(matches!(created, Err(EndpointError::Store { .. })));
    assert!(matches!(listed, Err(EndpointError::Store { .. })));
    assert!(matches!(found, Err(EndpointError::Store { .. })));
    assert!(matches!(deleted, Err(EndpointError::Store { .. })));
}

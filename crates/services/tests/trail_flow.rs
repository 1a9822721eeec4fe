use std::sync::Arc;

use services::{PersistenceAdapter, ProgressService, TrailService};
use storage::repository::{InMemoryRepository, KeyValueStore, StorageError, UnavailableStore};
use storage::{COMPLETED_RESOURCES_KEY, CURRENT_RESOURCE_INDEX_KEY};
use trail_core::model::{
    GalleryPage, Resource, ResourceContent, ResourceId, ResourceVisit, Trail,
};
use trail_core::{Destination, NextStep, TrailNavigator, VisitOutcome};

fn id(n: usize) -> ResourceId {
    ResourceId::new(n)
}

fn quiz(n: usize) -> Resource {
    Resource::new(
        id(n),
        format!("Quiz {n}"),
        "d",
        "f",
        ResourceContent::Quiz {
            embed_url: "https://example.com/quiz".into(),
        },
    )
}

fn gallery(n: usize) -> Resource {
    Resource::new(
        id(n),
        "Galeria",
        "d",
        "f",
        ResourceContent::Gallery {
            pages: vec![
                GalleryPage::new("https://example.com/1.jpg", "um"),
                GalleryPage::new("https://example.com/2.jpg", "dois"),
            ],
        },
    )
}

async fn load(trail: Trail, store: Arc<dyn KeyValueStore>) -> TrailService {
    TrailService::load(trail, PersistenceAdapter::new(store)).await
}

fn simple_trail() -> Trail {
    Trail::new(vec![quiz(0), quiz(1), quiz(2)]).unwrap()
}

fn opened(outcome: VisitOutcome) -> ResourceVisit {
    match outcome {
        VisitOutcome::Opened(visit) => visit,
        other => panic!("expected opened visit, got {other:?}"),
    }
}

#[tokio::test]
async fn fresh_visit_then_next_unlocks_following_resource() {
    let svc = load(simple_trail(), Arc::new(InMemoryRepository::new())).await;

    let mut visit = opened(svc.visit("0").await);
    let step = svc.go_next(&mut visit).await.unwrap();

    assert_eq!(step, NextStep::Moved(Destination::Resource(id(1))));
    let progress = svc.snapshot();
    assert!(progress.is_completed(id(0)));
    assert_eq!(progress.current(), id(1));
}

#[tokio::test]
async fn completing_every_resource_completes_the_trail() {
    let svc = load(simple_trail(), Arc::new(InMemoryRepository::new())).await;

    for n in 0..3 {
        let mut visit = opened(svc.visit(&n.to_string()).await);
        let step = svc.go_next(&mut visit).await.unwrap();
        if n == 2 {
            assert_eq!(step, NextStep::Moved(Destination::Landing));
        }
    }

    let progress = svc.snapshot();
    assert!(progress.is_trail_completed());
    assert_eq!(progress.percentage(), 100);
}

#[tokio::test]
async fn direct_access_beyond_frontier_is_locked() {
    let repo = InMemoryRepository::new();
    let svc = load(simple_trail(), Arc::new(repo.clone())).await;

    assert_eq!(svc.visit("2").await, VisitOutcome::Locked(id(2)));
    let progress = svc.snapshot();
    assert_eq!(progress.current(), id(0));
    assert!(progress.completed().is_empty());
    assert_eq!(repo.get(CURRENT_RESOURCE_INDEX_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn revisiting_earlier_resource_moves_frontier_back() {
    let repo = InMemoryRepository::new();
    let svc = load(simple_trail(), Arc::new(repo.clone())).await;
    svc.progress().advance(id(2)).await.unwrap();

    let _ = opened(svc.visit("1").await);
    assert_eq!(svc.snapshot().current(), id(1));
    assert_eq!(
        repo.get(CURRENT_RESOURCE_INDEX_KEY).await.unwrap().as_deref(),
        Some("1")
    );
}

#[tokio::test]
async fn gated_gallery_blocks_next_until_consumed() {
    let trail = Trail::new(vec![gallery(0), quiz(1)]).unwrap();
    let svc = load(trail, Arc::new(InMemoryRepository::new())).await;

    let mut visit = opened(svc.visit("0").await);
    let before = svc.snapshot();
    assert_eq!(svc.go_next(&mut visit).await.unwrap(), NextStep::Blocked);
    assert_eq!(svc.snapshot(), before);

    visit.report_consumed();
    visit.settle();
    assert_eq!(
        svc.go_next(&mut visit).await.unwrap(),
        NextStep::Moved(Destination::Resource(id(1)))
    );
}

#[tokio::test]
async fn go_previous_keeps_progress_untouched() {
    let svc = load(simple_trail(), Arc::new(InMemoryRepository::new())).await;
    let mut first = opened(svc.visit("0").await);
    svc.go_next(&mut first).await.unwrap();

    let second = opened(svc.visit("1").await);
    let before = svc.snapshot();
    assert_eq!(svc.go_previous(&second), Some(Destination::Resource(id(0))));
    assert_eq!(svc.snapshot(), before);
}

#[tokio::test]
async fn progress_survives_reload() {
    let repo = InMemoryRepository::new();
    {
        let svc = load(simple_trail(), Arc::new(repo.clone())).await;
        let mut visit = opened(svc.visit("0").await);
        svc.go_next(&mut visit).await.unwrap();
    }

    let reloaded = load(simple_trail(), Arc::new(repo.clone())).await;
    let progress = reloaded.snapshot();
    assert_eq!(progress.current(), id(1));
    assert!(progress.is_completed(id(0)));
    assert_eq!(
        repo.get(COMPLETED_RESOURCES_KEY).await.unwrap().as_deref(),
        Some("[0]")
    );
}

#[tokio::test]
async fn reset_removes_persisted_entries() {
    let repo = InMemoryRepository::new();
    let svc = load(simple_trail(), Arc::new(repo.clone())).await;
    let mut visit = opened(svc.visit("0").await);
    svc.go_next(&mut visit).await.unwrap();

    svc.reset().await;
    assert!(!svc.snapshot().has_progress());
    assert_eq!(repo.get(CURRENT_RESOURCE_INDEX_KEY).await.unwrap(), None);
    assert_eq!(repo.get(COMPLETED_RESOURCES_KEY).await.unwrap(), None);

    let reloaded = load(simple_trail(), Arc::new(repo)).await;
    assert!(!reloaded.snapshot().has_progress());
}

#[tokio::test]
async fn malformed_persisted_state_loads_as_fresh() {
    let repo = InMemoryRepository::new();
    repo.set(CURRENT_RESOURCE_INDEX_KEY, "not-a-number").await.unwrap();
    repo.set(COMPLETED_RESOURCES_KEY, "[0, 1").await.unwrap();

    let svc = load(simple_trail(), Arc::new(repo)).await;
    let progress = svc.snapshot();
    assert_eq!(progress.current(), id(0));
    assert!(progress.completed().is_empty());
}

#[tokio::test]
async fn unavailable_storage_keeps_session_only_progress() {
    let svc = load(simple_trail(), Arc::new(UnavailableStore)).await;
    let mut visit = opened(svc.visit("0").await);
    svc.go_next(&mut visit).await.unwrap();

    assert_eq!(svc.snapshot().current(), id(1));

    let reloaded = load(simple_trail(), Arc::new(UnavailableStore)).await;
    assert!(!reloaded.snapshot().has_progress());
}

/// Reads work, every write fails.
struct ReadOnlyStore {
    inner: InMemoryRepository,
}

#[async_trait::async_trait]
impl KeyValueStore for ReadOnlyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("read-only".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("read-only".to_string()))
    }
}

#[tokio::test]
async fn write_faults_never_reach_the_caller() {
    let inner = InMemoryRepository::new();
    inner.set(CURRENT_RESOURCE_INDEX_KEY, "1").await.unwrap();
    let svc = load(simple_trail(), Arc::new(ReadOnlyStore { inner: inner.clone() })).await;
    assert_eq!(svc.snapshot().current(), id(1));

    let mut visit = opened(svc.visit("1").await);
    assert!(svc.go_next(&mut visit).await.is_ok());
    svc.reset().await;

    assert_eq!(
        inner.get(CURRENT_RESOURCE_INDEX_KEY).await.unwrap().as_deref(),
        Some("1")
    );
}

#[tokio::test]
async fn changes_before_a_failed_move_are_still_persisted() {
    let repo = Arc::new(InMemoryRepository::new());
    let store: Arc<dyn KeyValueStore> = repo.clone();
    let progress = Arc::new(ProgressService::initialize(2, PersistenceAdapter::new(store)).await);
    progress.advance(id(1)).await.unwrap();
    let svc = TrailService::new(TrailNavigator::new(simple_trail()), Arc::clone(&progress));

    let mut visit = opened(svc.visit("1").await);
    assert!(svc.go_next(&mut visit).await.is_err());

    assert!(svc.snapshot().is_completed(id(1)));
    assert_eq!(
        repo.get(COMPLETED_RESOURCES_KEY).await.unwrap().as_deref(),
        Some("[1]")
    );
    assert_eq!(
        repo.get(CURRENT_RESOURCE_INDEX_KEY).await.unwrap().as_deref(),
        Some("1")
    );
}

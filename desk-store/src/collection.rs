//! In-memory snapshot of one remote collection.

use crate::{Page, StoreError, StoreResult};
use desk_model::{Record, RecordId, Validate};
use desk_remote::{DraftOf, RemoteCollection, RemoteError, RemoteResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Number of records kept from the initial listing.
pub const DEFAULT_DISPLAY_CAP: usize = 20;

/// How `add` picks the id of a newly created record.
///
/// The remote echoes an id on create, but it cannot be trusted, so ids are
/// always assigned locally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdAssignment {
    /// Highest id in the snapshot plus one (1 when empty). Never collides.
    #[default]
    NextAfterMax,
    /// Snapshot length plus one. Can reuse a live id once records have been
    /// removed from anywhere but the end.
    SnapshotLength,
}

impl IdAssignment {
    pub fn next_id<R: Record>(self, snapshot: &[R]) -> RecordId {
        match self {
            IdAssignment::NextAfterMax => snapshot
                .iter()
                .map(Record::id)
                .max()
                .map_or(RecordId::new(1), RecordId::next),
            IdAssignment::SnapshotLength => RecordId::new(snapshot.len() as u64 + 1),
        }
    }
}

/// Options shared by every collection store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Records kept from the initial listing; the rest are dropped.
    pub display_cap: usize,
    pub id_assignment: IdAssignment,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            display_cap: DEFAULT_DISPLAY_CAP,
            id_assignment: IdAssignment::default(),
        }
    }
}

/// Progress of the one-time initial load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed,
}

fn kind<C: RemoteCollection>() -> &'static str {
    <C::Record as Record>::KIND
}

struct CollectionState<R> {
    snapshot: Arc<Vec<R>>,
    load: LoadState,
    error: Option<Arc<RemoteError>>,
}

/// Holds the session's view of one remote collection.
///
/// All operations take `&self`; the snapshot lives behind a lock that is
/// never held across a remote call, so readers can observe
/// [`is_loading`](Self::is_loading) while [`load`](Self::load) is pending.
/// Concurrent mutations are not serialized against each other.
pub struct CollectionStore<C: RemoteCollection> {
    client: C,
    options: StoreOptions,
    state: RwLock<CollectionState<C::Record>>,
}

impl<C: RemoteCollection> CollectionStore<C> {
    /// Creates an empty store. Call [`load`](Self::load) to populate it.
    pub fn new(client: C, options: StoreOptions) -> Self {
        Self {
            client,
            options,
            state: RwLock::new(CollectionState {
                snapshot: Arc::new(Vec::new()),
                load: LoadState::Idle,
                error: None,
            }),
        }
    }

    /// Creates a store and runs its initial load.
    pub async fn open(client: C, options: StoreOptions) -> Self {
        let store = Self::new(client, options);
        store.load().await;
        store
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Fetches the collection and keeps its first `display_cap` records.
    ///
    /// Runs at most once per store; later calls return immediately. A failure
    /// leaves the snapshot empty and is reported through [`error`](Self::error).
    pub async fn load(&self) {
        {
            let mut state = self.state.write().await;
            if state.load != LoadState::Idle {
                debug!("{} store already loaded ({:?})", kind::<C>(), state.load);
                return;
            }
            state.load = LoadState::Loading;
        }

        let result = self.client.list().await;

        let mut state = self.state.write().await;
        match result {
            Ok(mut records) => {
                records.truncate(self.options.display_cap);
                info!("Loaded {} {} records", records.len(), kind::<C>());
                state.snapshot = Arc::new(records);
                state.load = LoadState::Ready;
            }
            Err(e) => {
                warn!("Failed to load {} records: {}", kind::<C>(), e);
                state.snapshot = Arc::new(Vec::new());
                state.error = Some(Arc::new(e));
                state.load = LoadState::Failed;
            }
        }
    }

    /// Creates a record remotely, then appends it with a locally assigned id.
    ///
    /// The appended record is built from `draft`; the server's echo is
    /// discarded.
    pub async fn add(&self, draft: DraftOf<C>) -> RemoteResult<C::Record> {
        let echoed = self.client.create(&draft).await?;

        let mut state = self.state.write().await;
        let id = self.options.id_assignment.next_id(&state.snapshot);
        debug!(
            "Created {} (remote id {}, local id {})",
            kind::<C>(),
            echoed.id(),
            id
        );

        let record = <C::Record as Record>::from_draft(id, draft);
        Arc::make_mut(&mut state.snapshot).push(record.clone());
        Ok(record)
    }

    /// Updates a record remotely, then writes `record` itself into the
    /// snapshot in place of the entry with the same id.
    ///
    /// If no entry has that id the snapshot is left as is; the remote call
    /// still happens.
    pub async fn update(&self, record: C::Record) -> RemoteResult<C::Record> {
        self.client.update(&record).await?;

        let mut state = self.state.write().await;
        let id = record.id();
        match state.snapshot.iter().position(|r| r.id() == id) {
            Some(index) => {
                Arc::make_mut(&mut state.snapshot)[index] = record.clone();
                debug!("Updated {} {}", kind::<C>(), id);
            }
            None => debug!("{} {} not in snapshot, nothing to replace", kind::<C>(), id),
        }

        Ok(record)
    }

    /// Deletes a record remotely, then drops it from the snapshot.
    pub async fn remove(&self, id: RecordId) -> RemoteResult<()> {
        self.client.delete(id).await?;

        let mut state = self.state.write().await;
        Arc::make_mut(&mut state.snapshot).retain(|r| r.id() != id);
        debug!("Removed {} {}", kind::<C>(), id);
        Ok(())
    }

    /// Validates `draft` and, only if it is valid, [`add`](Self::add)s it.
    pub async fn submit_new(&self, draft: DraftOf<C>) -> StoreResult<C::Record> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(StoreError::Invalid(errors));
        }
        Ok(self.add(draft).await?)
    }

    /// Validates `record` and, only if it is valid, [`update`](Self::update)s it.
    pub async fn submit_update(&self, record: C::Record) -> StoreResult<C::Record> {
        let errors = record.validate();
        if !errors.is_empty() {
            return Err(StoreError::Invalid(errors));
        }
        Ok(self.update(record).await?)
    }

    /// The current snapshot. Later mutations do not affect the returned value.
    pub async fn snapshot(&self) -> Arc<Vec<C::Record>> {
        Arc::clone(&self.state.read().await.snapshot)
    }

    /// True only while the initial load is in flight.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.load == LoadState::Loading
    }

    pub async fn load_state(&self) -> LoadState {
        self.state.read().await.load
    }

    /// The initial load's failure, if it failed.
    pub async fn error(&self) -> Option<Arc<RemoteError>> {
        self.state.read().await.error.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.snapshot.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.snapshot.is_empty()
    }

    pub async fn get(&self, id: RecordId) -> Option<C::Record> {
        self.state
            .read()
            .await
            .snapshot
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    /// One page of the current snapshot, numbered from 1.
    pub async fn page(&self, number: usize, rows_per_page: usize) -> Page<C::Record> {
        let snapshot = self.snapshot().await;
        Page::from_slice(&snapshot, number, rows_per_page)
    }
}

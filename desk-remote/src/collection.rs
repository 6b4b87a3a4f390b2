use crate::RemoteResult;
use async_trait::async_trait;
use desk_model::{Record, RecordId};

/// Draft type of a collection's records.
pub type DraftOf<C> = <<C as RemoteCollection>::Record as Record>::Draft;

/// One remote REST resource holding records of a single type.
///
/// Stores are generic over this trait so they can be driven by
/// [`HttpCollection`](crate::HttpCollection) in production and by an
/// in-process fake in tests.
#[async_trait]
pub trait RemoteCollection: Send + Sync {
    type Record: Record;

    /// Fetches every record the resource returns in one response.
    async fn list(&self) -> RemoteResult<Vec<Self::Record>>;

    /// Submits a draft. The id in the echoed record is not reliable.
    async fn create(&self, draft: &DraftOf<Self>) -> RemoteResult<Self::Record>;

    /// Sends the full record, keyed by its id.
    async fn update(&self, record: &Self::Record) -> RemoteResult<Self::Record>;

    /// Removes the record with the given id.
    async fn delete(&self, id: RecordId) -> RemoteResult<()>;
}

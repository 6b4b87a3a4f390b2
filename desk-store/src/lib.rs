//! Session-local state for the Desk admin console.
//!
//! Three independent stores, each owned by whoever opened it and passed
//! explicitly to the view layer:
//!
//! - two [`CollectionStore`]s (messages, users), each holding the in-memory
//!   snapshot of one remote collection and reconciling it after every
//!   create, update and delete;
//! - one [`SessionStore`], holding the logged-in identity and mirroring it to
//!   a [`KeyValueStore`] so it survives a restart.
//!
//! # Reconciliation
//!
//! Collection mutations are optimistic write-throughs: once the remote call
//! succeeds, the snapshot is updated from what the caller submitted, not from
//! what the server echoed back. A failed call leaves the snapshot untouched
//! and hands the error back to the caller. Nothing is retried.

mod collection;
mod error;
mod kv;
mod page;
mod session;

pub use collection::{CollectionStore, DEFAULT_DISPLAY_CAP, IdAssignment, LoadState, StoreOptions};
pub use error::{StoreError, StoreResult};
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use page::{DEFAULT_ROWS_PER_PAGE, Page};
pub use session::{SESSION_KEY, SessionStore};

//! Shared test helpers for store tests.

#![allow(dead_code)]

use async_trait::async_trait;
use desk_model::{Message, Record, RecordId};
use desk_remote::{DraftOf, RemoteCollection, RemoteError, RemoteResult};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Id the fake echoes back on create. Stores must not use it.
pub const ECHOED_ID: u64 = 101;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create,
    Update(RecordId),
    Delete(RecordId),
}

/// In-process remote collection that records every call.
pub struct FakeCollection<R> {
    records: Vec<R>,
    pub fail_list: bool,
    pub fail_create: bool,
    pub fail_update: bool,
    pub fail_delete: bool,
    /// When set, `list` waits for a notification before answering.
    pub list_gate: Option<Arc<Notify>>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl<R: Record> FakeCollection<R> {
    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records,
            fail_list: false,
            fail_create: false,
            fail_update: false,
            fail_delete: false,
            list_gate: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle for inspecting calls after the fake has moved into a store.
    pub fn calls(&self) -> Arc<Mutex<Vec<Call>>> {
        Arc::clone(&self.calls)
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn server_error() -> RemoteError {
    RemoteError::Status {
        status: 500,
        body: "internal error".to_string(),
    }
}

#[async_trait]
impl<R: Record> RemoteCollection for FakeCollection<R> {
    type Record = R;

    async fn list(&self) -> RemoteResult<Vec<R>> {
        self.record(Call::List);
        if let Some(gate) = &self.list_gate {
            gate.notified().await;
        }
        if self.fail_list {
            return Err(RemoteError::Network("connection refused".to_string()));
        }
        Ok(self.records.clone())
    }

    async fn create(&self, draft: &DraftOf<Self>) -> RemoteResult<R> {
        self.record(Call::Create);
        if self.fail_create {
            return Err(server_error());
        }
        Ok(R::from_draft(RecordId::new(ECHOED_ID), draft.clone()))
    }

    async fn update(&self, record: &R) -> RemoteResult<R> {
        self.record(Call::Update(record.id()));
        if self.fail_update {
            return Err(server_error());
        }
        Ok(record.clone())
    }

    async fn delete(&self, id: RecordId) -> RemoteResult<()> {
        self.record(Call::Delete(id));
        if self.fail_delete {
            return Err(server_error());
        }
        Ok(())
    }
}

pub fn messages(ids: impl IntoIterator<Item = u64>) -> Vec<Message> {
    ids.into_iter()
        .map(|id| Message::new(id, format!("title {id}"), format!("body {id}")))
        .collect()
}

pub fn ids<R: Record>(records: &[R]) -> Vec<u64> {
    records.iter().map(|r| r.id().get()).collect()
}

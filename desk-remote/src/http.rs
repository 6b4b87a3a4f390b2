//! reqwest-backed remote collection.

use crate::{RemoteCollection, RemoteConfig, RemoteError, RemoteResult};
use async_trait::async_trait;
use desk_model::{Record, RecordId};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{debug, warn};

/// A REST resource addressed as `{api_base_url}/{R::RESOURCE}`.
pub struct HttpCollection<R> {
    client: Client,
    resource_url: String,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> HttpCollection<R> {
    /// Creates a collection with its own HTTP client.
    pub fn new(config: &RemoteConfig) -> RemoteResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| RemoteError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self::with_client(client, config))
    }

    /// Creates a collection on top of an existing client, so that several
    /// collections can share one connection pool.
    pub fn with_client(client: Client, config: &RemoteConfig) -> Self {
        Self {
            client,
            resource_url: config.resource_url(R::RESOURCE),
            _record: PhantomData,
        }
    }

    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    fn record_url(&self, id: RecordId) -> String {
        format!("{}/{}", self.resource_url, id)
    }
}

/// Turns transport failures and non-2xx answers into [`RemoteError`]s.
async fn ensure_success(
    result: Result<Response, reqwest::Error>,
    operation: &str,
) -> RemoteResult<Response> {
    let response = result.map_err(|e| {
        warn!("{operation} failed: {e}");
        RemoteError::Network(format!("{operation} failed: {e}"))
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("{operation} rejected with status {status}");
        return Err(RemoteError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response, operation: &str) -> RemoteResult<T> {
    let text = response
        .text()
        .await
        .map_err(|e| RemoteError::Network(format!("{operation}: failed to read body: {e}")))?;

    serde_json::from_str(&text)
        .map_err(|e| RemoteError::Decode(format!("{operation}: {e}")))
}

#[async_trait]
impl<R: Record> RemoteCollection for HttpCollection<R> {
    type Record = R;

    async fn list(&self) -> RemoteResult<Vec<R>> {
        debug!("Listing {} records from {}", R::KIND, self.resource_url);

        let response = ensure_success(
            self.client.get(&self.resource_url).send().await,
            "list",
        )
        .await?;
        let records: Vec<R> = decode(response, "list").await?;

        debug!("Fetched {} {} records", records.len(), R::KIND);
        Ok(records)
    }

    async fn create(&self, draft: &R::Draft) -> RemoteResult<R> {
        debug!("Creating {} at {}", R::KIND, self.resource_url);

        let response = ensure_success(
            self.client.post(&self.resource_url).json(draft).send().await,
            "create",
        )
        .await?;

        decode(response, "create").await
    }

    async fn update(&self, record: &R) -> RemoteResult<R> {
        let url = self.record_url(record.id());
        debug!("Updating {} {}", R::KIND, record.id());

        let response =
            ensure_success(self.client.put(&url).json(record).send().await, "update").await?;

        decode(response, "update").await
    }

    async fn delete(&self, id: RecordId) -> RemoteResult<()> {
        debug!("Deleting {} {}", R::KIND, id);

        ensure_success(
            self.client.delete(self.record_url(id)).send().await,
            "delete",
        )
        .await?;

        Ok(())
    }
}

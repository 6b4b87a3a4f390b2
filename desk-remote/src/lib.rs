//! Remote collection client for the Desk admin console.
//!
//! Each record type lives behind one REST resource:
//!
//! | Operation | Request |
//! |---|---|
//! | [`list`](RemoteCollection::list) | `GET {base}/{resource}` |
//! | [`create`](RemoteCollection::create) | `POST {base}/{resource}` |
//! | [`update`](RemoteCollection::update) | `PUT {base}/{resource}/{id}` |
//! | [`delete`](RemoteCollection::delete) | `DELETE {base}/{resource}/{id}` |
//!
//! Every call is a single round trip. Nothing is retried; a failure is
//! returned to the caller as a [`RemoteError`].

mod collection;
mod config;
mod error;
mod http;

pub use collection::{DraftOf, RemoteCollection};
pub use config::{DEFAULT_API_BASE_URL, RemoteConfig};
pub use error::{RemoteError, RemoteResult};
pub use http::HttpCollection;

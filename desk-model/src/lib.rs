//! Core record model for the Desk admin console.
//!
//! Defines the types every other Desk crate depends on:
//! - [`RecordId`]: the integer identifier shared by both collections
//! - [`Message`] / [`NewMessage`]: canned messages and their drafts
//! - [`UserRecord`] / [`NewUser`]: managed users and their drafts
//! - [`Record`]: ties a record type to its draft and REST resource
//! - [`Session`]: the locally recorded logged-in identity
//! - [`validation`]: field checks producing [`ValidationError`]s
//!
//! Messages and users are distinct types: a store, a client and a form are
//! each bound to exactly one of them.

mod ids;
mod record;
mod session;
pub mod validation;

pub use ids::RecordId;
pub use record::{Message, NewMessage, NewUser, Record, UserRecord};
pub use session::Session;
pub use validation::{Validate, ValidationError};

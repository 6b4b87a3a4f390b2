use crate::RecordId;
use crate::validation::{Validate, ValidationError, validate_message_form, validate_user_form};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record type managed as one remote collection.
///
/// Each record has a draft counterpart (the record without its id) that is
/// what gets submitted on create. Unknown fields in remote payloads are
/// ignored on decode.
pub trait Record:
    Clone + PartialEq + Send + Sync + Serialize + DeserializeOwned + Validate + 'static
{
    /// The record without its identifier.
    type Draft: Clone + PartialEq + Send + Sync + Serialize + DeserializeOwned + Validate + 'static;

    /// REST resource name, appended to the API base URL.
    const RESOURCE: &'static str;

    /// Human-readable kind, used in log lines.
    const KIND: &'static str;

    fn id(&self) -> RecordId;

    /// Builds a record from a locally assigned id and a draft.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    /// Returns the editable fields of this record.
    fn to_draft(&self) -> Self::Draft;
}

/// A canned message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: RecordId,
    pub title: String,
    pub body: String,
}

/// A canned message that has not been created yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    pub title: String,
    pub body: String,
}

impl NewMessage {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl Message {
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

impl Validate for NewMessage {
    fn validate(&self) -> Vec<ValidationError> {
        validate_message_form(&self.title, &self.body)
    }
}

impl Validate for Message {
    fn validate(&self) -> Vec<ValidationError> {
        validate_message_form(&self.title, &self.body)
    }
}

impl Record for Message {
    type Draft = NewMessage;

    const RESOURCE: &'static str = "posts";
    const KIND: &'static str = "message";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewMessage) -> Self {
        Self {
            id,
            title: draft.title,
            body: draft.body,
        }
    }

    fn to_draft(&self) -> NewMessage {
        NewMessage {
            title: self.title.clone(),
            body: self.body.clone(),
        }
    }
}

/// A managed user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A user that has not been created yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl UserRecord {
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl Validate for NewUser {
    fn validate(&self) -> Vec<ValidationError> {
        validate_user_form(&self.name, &self.email, &self.phone)
    }
}

impl Validate for UserRecord {
    fn validate(&self) -> Vec<ValidationError> {
        validate_user_form(&self.name, &self.email, &self.phone)
    }
}

impl Record for UserRecord {
    type Draft = NewUser;

    const RESOURCE: &'static str = "users";
    const KIND: &'static str = "user";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewUser) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
        }
    }

    fn to_draft(&self) -> NewUser {
        NewUser {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

use serde::{Deserialize, Serialize};

/// The identity recorded by the login step.
///
/// This is not a credential: only the email is kept, and it is trusted as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

//! Form validation.
//!
//! Every check is a pure function. A form validator returns one
//! [`ValidationError`] per failing field, in field order; an empty list
//! means the form is valid.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Minimum trimmed length for free-text fields.
pub const MIN_TEXT_LEN: usize = 3;

/// Number of digits a phone number must contain.
pub const PHONE_DIGITS: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A single failing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Name of the offending attribute (e.g. `"title"`).
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Types that can be checked before they are submitted.
pub trait Validate {
    fn validate(&self) -> Vec<ValidationError>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// True when the trimmed text has at least [`MIN_TEXT_LEN`] characters.
pub fn validate_text(text: &str) -> bool {
    text.trim().chars().count() >= MIN_TEXT_LEN
}

/// Minimal structural check: `local@domain.tld`, no whitespace, one `@`.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// True when exactly [`PHONE_DIGITS`] digits remain after dropping every
/// other character.
pub fn validate_phone(phone: &str) -> bool {
    phone.chars().filter(char::is_ascii_digit).count() == PHONE_DIGITS
}

pub fn validate_message_form(title: &str, body: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !validate_text(title) {
        errors.push(ValidationError::new("title", "title must be at least 3 characters"));
    }

    if !validate_text(body) {
        errors.push(ValidationError::new("body", "body must be at least 3 characters"));
    }

    errors
}

pub fn validate_user_form(name: &str, email: &str, phone: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !validate_text(name) {
        errors.push(ValidationError::new("name", "name must be at least 3 characters"));
    }

    if !validate_email(email) {
        errors.push(ValidationError::new("email", "enter a valid email address"));
    }

    if !validate_phone(phone) {
        errors.push(ValidationError::new("phone", "enter a valid phone number (10 digits)"));
    }

    errors
}

use crate::models::{ErrorValidationProblem, WarningValidationProblem};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

pub(crate) const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;
pub(crate) const CONFIG_ERROR_REDIRECT_WITH_AUTH: &str =
    "config error: redirects must be disabled when auth headers are configured";

/// Error body returned by the API for non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ResourceError {
    #[serde(skip)]
    pub status: u16,
    pub detail: String,
    pub errors: Vec<ErrorValidationProblem>,
    pub warnings: Vec<WarningValidationProblem>,
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detail.is_empty() {
            write!(f, "status={}", self.status)?;
        } else {
            write!(f, "status={}, detail={}", self.status, self.detail)?;
        }
        if let Some(first) = self.errors.first() {
            write!(f, ", error={}", first.title)?;
        }
        Ok(())
    }
}

/// What went wrong with a single field during structural validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Problem {
    #[error("expected an object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("required field is missing")]
    Missing,
    #[error("required field is null")]
    Null,
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: String,
        found: &'static str,
    },
    #[error("value matches none of {expected}")]
    NoMatchingCandidate { expected: String },
}

/// A field-qualified structural validation failure.
///
/// `record` and `field` name the record type that declares the offending
/// field; `path` locates it from the root of the validated value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: {}", location(.record, .field, .path), .problem)]
pub struct ValidationError {
    pub record: &'static str,
    pub field: String,
    pub path: String,
    pub problem: Problem,
}

fn location(record: &str, field: &str, path: &str) -> String {
    if field.is_empty() {
        record.to_string()
    } else if path == field {
        format!("{record}.{field}")
    } else {
        format!("{record}.{field} (at {path})")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Config(String),
    #[error("api error: {0}")]
    Api(ResourceError),
}

pub(crate) fn fallback_message(status: StatusCode, body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body).trim().to_string();
    if !text.is_empty() {
        return text;
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

pub(crate) fn read_body_with_limit<R: Read>(
    reader: &mut R,
    limit: usize,
) -> Result<Vec<u8>, Error> {
    let mut body = Vec::new();
    reader.take(limit as u64).read_to_end(&mut body)?;
    Ok(body)
}

use std::fmt;

use serde::{Deserialize, Serialize};

pub type SnippetId = u64;
pub type RequestEpoch = u64;

/// Snippet as serialized by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetRecord {
    pub id: SnippetId,
    pub content: String,
    pub ai_tag: String,
    pub created_at: String,
}

/// Optional list filters; `None` means no filter on that dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListFilter {
    pub tag: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListResponse {
    Results(Vec<SnippetRecord>),
    /// The body had no usable `results` array.
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResponse {
    Saved(SnippetRecord),
    /// Non-success status. `message` is the first `errors.content` entry, or
    /// the top-level `error` string, when the body carries one.
    Rejected { status: u16, message: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Listed {
        epoch: RequestEpoch,
        result: Result<ListResponse, ApiError>,
    },
    Created {
        result: Result<WriteResponse, ApiError>,
    },
    Updated {
        id: SnippetId,
        result: Result<WriteResponse, ApiError>,
    },
    Deleted {
        id: SnippetId,
        result: Result<(), ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "undecodable response"),
        }
    }
}

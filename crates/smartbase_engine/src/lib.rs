//! SmartBase engine: backend client and background effect execution.
mod client;
mod engine;
mod types;

pub use client::{ApiSettings, ReqwestSnippetApi, SnippetApi};
pub use engine::{EngineError, EngineHandle};
pub use types::{
    ApiError, EngineEvent, FailureKind, ListFilter, ListResponse, RequestEpoch, SnippetId,
    SnippetRecord, WriteResponse,
};

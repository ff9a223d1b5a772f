//! Error types for the todo client.
//!
//! # Design
//! Every variant except `EmptyLabel`, `Config` and `SerializationError` is a
//! flavour of "remote call failed". `NotFound` gets its own variant because callers often treat a missing
//! resource differently from an unexpected status. `ClearAborted` carries how
//! far a bulk clear got, since earlier deletions are not undone.

use crate::types::TaskId;

/// Errors returned by `TodoClient` parse methods and `TodoSession` operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The client configuration is unusable.
    #[error("config error: {0}")]
    Config(String),

    /// A task label was empty or whitespace only.
    #[error("task label must not be empty")]
    EmptyLabel,

    /// A bulk clear stopped at `failed_id` after `deleted` successful deletions.
    #[error("clear aborted after {deleted} deletions, task {failed_id} failed: {source}")]
    ClearAborted {
        deleted: usize,
        failed_id: TaskId,
        #[source]
        source: Box<ApiError>,
    },
}

impl ApiError {
    /// True for failures of the remote exchange itself, as opposed to
    /// input rejected before any request was built.
    pub fn is_remote(&self) -> bool {
        !matches!(
            self,
            ApiError::EmptyLabel | ApiError::SerializationError(_) | ApiError::Config(_)
        )
    }
}

//! Error types for the request builder.
//!
//! # Design
//! HTTP error statuses are not errors here — a 404 still produces a
//! `ClientResponse` with `error_response` filled in, because callers decide
//! what a non-2xx status means for their endpoint. `ClientError` covers only
//! the cases where no normalized response can exist at all: the builder was
//! misconfigured, a payload would not serialize, or the transport never
//! received a status line.

use thiserror::Error;

/// Errors returned by [`RequestBuilder::execute`](crate::RequestBuilder::execute).
#[derive(Debug, Error)]
pub enum ClientError {
    /// `execute` was called before any HTTP method was set.
    #[error("no HTTP method set before execute")]
    MethodNotSet,

    /// `execute` was called before any base URL was set.
    #[error("no base URL set before execute")]
    UrlNotSet,

    /// A body or query value handed to the builder could not be serialized.
    /// Recorded when the fluent call is made, surfaced at `execute`.
    #[error("payload serialization failed: {0}")]
    Serialization(String),

    /// The exchange failed before a status code was received — DNS failure,
    /// connection refused, malformed URL. Distinct from an error-status
    /// response, which is data.
    #[error("transport failure, no response received: {0}")]
    Transport(#[from] reqwest::Error),
}

//! Fluent HTTP transport layer for a generated REST API client.
//!
//! # Overview
//! [`RequestBuilder`] accumulates method, URL, headers, query parameters,
//! and body across chained calls, then performs one asynchronous round trip
//! and normalizes whatever comes back into a [`ClientResponse`] classified
//! as success or error purely by status code.
//!
//! # Design
//! - The builder is single-use: fluent methods consume and return `Self`,
//!   and `execute` consumes the builder.
//! - Optional setters treat `None` as a silent no-op so generated endpoint
//!   methods can chain every parameter without presence checks.
//! - Non-2xx statuses are data, not errors; [`ClientError`] is reserved for
//!   misconfiguration and transport failures where no response exists.
//! - The network itself is `reqwest`; pooling, TLS, and timeouts are its
//!   concern, configured on the `reqwest::Client` the builder is given.

pub mod builder;
pub mod error;
pub mod http;
pub mod response;

pub use builder::RequestBuilder;
pub use error::ClientError;
pub use http::{Body, HttpMethod};
pub use response::ClientResponse;

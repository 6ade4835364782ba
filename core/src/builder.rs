//! Fluent request builder: accumulate configuration, execute once.
//!
//! # Design
//! `RequestBuilder` is single-use by construction: every fluent method takes
//! `self` and returns `Self`, and `execute` consumes the builder, so a
//! request cannot be re-sent or mutated mid-flight. Optional setters accept
//! `None` and silently skip, which lets a generated endpoint method chain
//! every possible parameter without branching on presence. Serialization
//! failures inside the chain are recorded and surfaced at `execute`, keeping
//! the chain itself infallible.

use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ClientError;
use crate::http::{Body, HttpMethod};
use crate::response::ClientResponse;

/// Builder for one HTTP round trip.
///
/// Chain configuration calls in any order, then `await` [`execute`] for the
/// normalized [`ClientResponse`]. Each instance belongs to a single logical
/// call site; cloning or sharing one across requests is not supported.
///
/// [`execute`]: RequestBuilder::execute
pub struct RequestBuilder {
    client: reqwest::Client,
    method: Option<HttpMethod>,
    url: Option<String>,
    headers: HashMap<String, String>,
    parameters: Vec<(String, Vec<String>)>,
    body: Option<Body>,
    repeat_query_values: bool,
    deferred_error: Option<ClientError>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Build against a caller-owned transport handle. The generated client
    /// layer shares one `reqwest::Client` across all its endpoint methods.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            method: None,
            url: None,
            headers: HashMap::new(),
            parameters: Vec::new(),
            body: None,
            repeat_query_values: false,
            deferred_error: None,
        }
    }

    pub fn set_method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Upsert a single header. `None` is a no-op; the header is never stored.
    pub fn set_header<V>(mut self, name: impl Into<String>, value: Option<V>) -> Self
    where
        V: Into<String>,
    {
        if let Some(value) = value {
            self.headers.insert(name.into(), value.into());
        }
        self
    }

    /// Replace the header map wholesale, discarding anything set so far.
    pub fn set_all_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Set the `Authorization` header to the raw token value. `None` is a
    /// no-op.
    pub fn set_authorization_header<V>(self, token: Option<V>) -> Self
    where
        V: Into<String>,
    {
        match token {
            Some(token) => self.set_header("Authorization", Some(token.into())),
            None => self,
        }
    }

    /// Set the `Authorization` header to `Basic base64(username:password)`.
    /// No-op unless both credentials are present and non-empty.
    pub fn set_basic_authorization<U, P>(self, username: Option<U>, password: Option<P>) -> Self
    where
        U: Into<String>,
        P: Into<String>,
    {
        if let (Some(username), Some(password)) = (username, password) {
            let (username, password) = (username.into(), password.into());
            if !username.is_empty() && !password.is_empty() {
                let credentials = STANDARD.encode(format!("{username}:{password}"));
                return self.set_header("Authorization", Some(format!("Basic {credentials}")));
            }
        }
        self
    }

    /// Send `body` form-urlencoded. Overwrites any JSON body and sets
    /// Content-Type to `application/x-www-form-urlencoded`.
    pub fn set_form_body(mut self, body: &impl Serialize) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => {
                self.body = Some(Body::Form(value));
                self.set_header("Content-Type", Some("application/x-www-form-urlencoded"))
            }
            Err(err) => self.defer(err),
        }
    }

    /// Send `body` as JSON. Overwrites any form body and sets Content-Type
    /// to `application/json`. Content-Length is left to the transport, which
    /// rejects it as a manually set header.
    pub fn set_json_body(mut self, body: &impl Serialize) -> Self {
        match serde_json::to_string(body) {
            Ok(json) => {
                self.body = Some(Body::Json(json));
                self.set_header("Content-Type", Some("application/json"))
            }
            Err(err) => self.defer(err),
        }
    }

    /// Replace the base URL wholesale. No validation is performed; a
    /// malformed URL surfaces as a transport error at `execute`.
    pub fn set_base_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Append one path segment with exactly one `/` between it and the
    /// current URL. The segment itself is not percent-encoded. No-op when
    /// the segment is `None` or the base URL is unset.
    pub fn append_path_segment<S>(mut self, segment: Option<S>) -> Self
    where
        S: Into<String>,
    {
        if let (Some(segment), Some(url)) = (segment, self.url.as_mut()) {
            join_with_single_slash(url, &segment.into());
        }
        self
    }

    /// Append a URI fragment, normalizing to exactly one `/` at the join
    /// regardless of trailing/leading slashes on either side. No-op when
    /// the uri is `None` or the base URL is unset.
    pub fn append_uri<S>(mut self, uri: Option<S>) -> Self
    where
        S: Into<String>,
    {
        if let (Some(uri), Some(url)) = (uri, self.url.as_mut()) {
            join_with_single_slash(url, &uri.into());
        }
        self
    }

    /// Append a value to the named query parameter's sequence. `Null` values
    /// are dropped. An object or array value appends one entry per member in
    /// enumeration order; any scalar appends its string form.
    pub fn add_query_parameter(mut self, name: impl Into<String>, value: impl Serialize) -> Self {
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(err) => return self.defer(err),
        };
        if value.is_null() {
            return self;
        }
        let values = self.parameter_values(name.into());
        match value {
            Value::Object(members) => {
                values.extend(members.into_iter().map(|(_, member)| scalar_string(member)));
            }
            Value::Array(items) => {
                values.extend(items.into_iter().map(scalar_string));
            }
            scalar => values.push(scalar_string(scalar)),
        }
        self
    }

    /// Emit multi-valued parameters as repeated `name=value` pairs instead
    /// of the legacy single pair with comma-joined values.
    pub fn repeat_query_values(mut self, enabled: bool) -> Self {
        self.repeat_query_values = enabled;
        self
    }

    /// Perform the round trip and normalize the outcome.
    ///
    /// Resolves exactly once, strictly after the exchange settles. Any HTTP
    /// status, 2xx or not, yields `Ok(ClientResponse)`; `Err` means the
    /// builder was misconfigured or no response was ever received.
    pub async fn execute(self) -> Result<ClientResponse, ClientError> {
        let Self {
            client,
            method,
            url,
            headers,
            parameters,
            body,
            repeat_query_values,
            deferred_error,
        } = self;

        if let Some(err) = deferred_error {
            return Err(err);
        }
        let method = method.ok_or(ClientError::MethodNotSet)?;
        let mut url = url.ok_or(ClientError::UrlNotSet)?;
        url.push_str(&render_query(&parameters, repeat_query_values));

        debug!(method = method.as_str(), url = %url, "dispatching request");

        let mut request = client.request(method.into(), url.as_str());
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }
        request = match body {
            Some(Body::Json(json)) => request.body(json),
            Some(Body::Form(form)) => request.form(&form),
            None => request,
        };

        let response = request.send().await?;
        let status_code = response.status().as_u16();
        let text = response.text().await?;

        debug!(status_code, "request settled");

        Ok(ClientResponse::from_raw(status_code, &text))
    }

    /// Record the first serialization failure; `execute` surfaces it.
    fn defer(mut self, err: serde_json::Error) -> Self {
        self.deferred_error
            .get_or_insert(ClientError::Serialization(err.to_string()));
        self
    }

    fn parameter_values(&mut self, name: String) -> &mut Vec<String> {
        let index = match self.parameters.iter().position(|(n, _)| *n == name) {
            Some(index) => index,
            None => {
                self.parameters.push((name, Vec::new()));
                self.parameters.len() - 1
            }
        };
        &mut self.parameters[index].1
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Join `part` onto `url` with exactly one `/` at the seam, whatever the
/// trailing/leading slash situation on the two sides.
fn join_with_single_slash(url: &mut String, part: &str) {
    match (url.ends_with('/'), part.starts_with('/')) {
        (true, true) => url.push_str(&part[1..]),
        (false, false) => {
            url.push('/');
            url.push_str(part);
        }
        _ => url.push_str(part),
    }
}

/// String form a query value takes on the wire: strings verbatim, other
/// scalars via their JSON rendering.
fn scalar_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Serialize accumulated parameters to a `?`-prefixed query string, empty
/// when there are no parameters. Names pass through as-is; values are
/// percent-encoded. In legacy mode a multi-valued parameter becomes one
/// pair with its values comma-joined before encoding.
fn render_query(parameters: &[(String, Vec<String>)], repeat_values: bool) -> String {
    let mut query = String::new();
    for (name, values) in parameters {
        if repeat_values {
            for value in values {
                push_pair(&mut query, name, value);
            }
        } else {
            push_pair(&mut query, name, &values.join(","));
        }
    }
    query
}

fn push_pair(query: &mut String, name: &str, value: &str) {
    query.push(if query.is_empty() { '?' } else { '&' });
    query.push_str(name);
    query.push('=');
    query.push_str(&urlencoding::encode(value));
}

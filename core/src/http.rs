//! Wire-level request vocabulary shared by the builder.
//!
//! # Design
//! `HttpMethod` is a closed enum rather than a free-form string so an
//! endpoint generator cannot emit a typo'd verb; it converts losslessly into
//! `reqwest::Method` at dispatch time. `Body` keeps the two supported payload
//! shapes distinct: a form body stays structured until the transport encodes
//! it, while a JSON body is serialized eagerly so the bytes on the wire are
//! exactly what the caller handed in.

use serde_json::Value;

/// HTTP method for a request. Unset until the caller picks one; executing
/// without a method is a configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Request payload. The two variants are mutually exclusive on the builder;
/// whichever was set last wins, along with its Content-Type.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Structured value the transport will encode as
    /// `application/x-www-form-urlencoded`.
    Form(Value),
    /// Pre-serialized JSON text sent verbatim.
    Json(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_converts_to_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Get), reqwest::Method::GET);
        assert_eq!(reqwest::Method::from(HttpMethod::Patch), reqwest::Method::PATCH);
    }

    #[test]
    fn method_as_str_matches_wire_form() {
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }
}

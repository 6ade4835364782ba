//! HTTP fixture server for exercising the request builder over real sockets.
//!
//! Three route families cover the builder's observable behavior:
//! `/inspect` echoes the received method, URI, headers, and raw body back as
//! JSON so tests can assert the exact wire form a builder produced;
//! `/status/{code}` answers with an arbitrary status and a plain-text body,
//! exercising the non-JSON fallback and error classification; `/users` is a
//! small canned JSON collection for the happy path.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::Path,
    http::{HeaderMap, Method, StatusCode, Uri},
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// What `/inspect` saw on the wire, echoed back to the caller.
///
/// Header names arrive lowercased, as the http crate normalizes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub uri: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/inspect", any(inspect))
        .route("/inspect/{*rest}", any(inspect))
        .route("/status/{code}", get(status_text))
        .route("/users", get(list_users))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn inspect(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<Echo> {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    Json(Echo {
        method: method.to_string(),
        uri: uri.to_string(),
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

async fn status_text(Path(code): Path<u16>) -> (StatusCode, String) {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let text = status
        .canonical_reason()
        .unwrap_or("unknown status")
        .to_lowercase();
    (status, text)
}

async fn list_users() -> Json<Value> {
    Json(json!({
        "users": [
            { "id": 1, "email": "alice@example.com", "active": true },
            { "id": 2, "email": "bob@example.com", "active": false }
        ]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_roundtrips_through_json() {
        let echo = Echo {
            method: "POST".to_string(),
            uri: "/inspect?a=1".to_string(),
            headers: HashMap::from([("content-type".to_string(), "application/json".to_string())]),
            body: r#"{"a":1}"#.to_string(),
        };
        let json = serde_json::to_string(&echo).unwrap();
        let back: Echo = serde_json::from_str(&json).unwrap();
        assert_eq!(back.method, "POST");
        assert_eq!(back.uri, "/inspect?a=1");
        assert_eq!(back.headers["content-type"], "application/json");
    }
}

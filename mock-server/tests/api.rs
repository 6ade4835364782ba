use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Echo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// --- inspect ---

#[tokio::test]
async fn inspect_echoes_method_and_uri_with_query() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/inspect?a=1%2C2")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "GET");
    assert_eq!(echo.uri, "/inspect?a=1%2C2");
    assert!(echo.body.is_empty());
}

#[tokio::test]
async fn inspect_matches_nested_paths() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/inspect/users/42")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.uri, "/inspect/users/42");
}

#[tokio::test]
async fn inspect_echoes_headers_lowercased_and_body_verbatim() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/inspect")
                .header(http::header::CONTENT_TYPE, "application/json")
                .header("Authorization", "Basic dTpw")
                .body(r#"{"a":1}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "POST");
    assert_eq!(echo.headers["content-type"], "application/json");
    assert_eq!(echo.headers["authorization"], "Basic dTpw");
    assert_eq!(echo.body, r#"{"a":1}"#);
}

// --- status ---

#[tokio::test]
async fn status_answers_with_requested_code_and_reason_text() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/status/404")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "not found");
}

#[tokio::test]
async fn status_with_unknown_code_falls_back_to_500() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/status/99")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// --- users ---

#[tokio::test]
async fn users_returns_canned_collection() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/users").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["users"].as_array().unwrap().len(), 2);
    assert_eq!(body["users"][0]["email"], "alice@example.com");
}

//! Helpers for the handler tests.
//!
//! The handlers are driven through the router, with the external systems replaced by `httpmock` servers.
use std::{path::PathBuf, sync::Arc};
use axum::{body::Body, http::{header, Method, Request}};
use httpmock::prelude::*;
use tower::ServiceExt;
use crate::config::Config;
use crate::server;

/// A configuration that does not see the process environment nor any mounted secret.
pub fn test_config() -> Config {
    Config {
        secrets_dir: PathBuf::from("/nonexistent/more_serverless/secrets"),
        ..Default::default()
    }
}

/// A configuration with the google and slack apis on the mock server,
/// and a mocked metadata server token, so no key file is needed.
pub async fn google_test_config(
    server: &MockServer,
) -> Config
{
    server.mock_async(|when, then| {
        when.method(GET).path("/metadata/token");
        then.status(200).body(r#"{"access_token": "ya29.test", "expires_in": 3599, "token_type": "Bearer"}"#);
    }).await;
    Config {
        metadata_token_url: server.url("/metadata/token"),
        compute_api: server.url("/compute/v1"),
        storage_api: server.url("/storage/v1"),
        slack_api: server.url("/slack/api"),
        ..test_config()
    }
}

/// POST the body to the path, and return the status code and the body of the response.
pub async fn call(
    config: Config,
    path: &str,
    content_type: Option<&str>,
    body: &str,
) -> (u16, String)
{
    let mut request = Request::builder()
        .method(Method::POST)
        .uri(path);
    if let Some(content_type) = content_type {
        request = request.header(header::CONTENT_TYPE, content_type);
    }
    let request = request.body(Body::from(body.to_string())).unwrap();

    let response = server::router(Arc::new(config))
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

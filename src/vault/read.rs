//! `/vault-read`
//!
use std::sync::Arc;
use axum::{body::Bytes, extract::State, http::HeaderMap, response::Response};
use crate::config::Config;
use crate::error::HandlerResult;
use crate::formatter::{self, Envelope, OutputFormat, GLUE_NARROW};
use crate::request::{self, RequestContext};
use crate::vault::{key_value_rows, read_secret_data, VaultClient, VaultReadRequest};

pub async fn read(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<Response>
{
    let context = RequestContext::from_headers(&headers);
    let request: VaultReadRequest = request::decode_body(&body)?;
    let path = request::required(Some(request.path.clone()), "empty path")?;

    let client = VaultClient::new(&config, &request.target)?;
    let data = read_secret_data(&client, &path, &request).await?;

    match context.format {
        OutputFormat::Text => Ok(formatter::text_response(formatter::columnize(&key_value_rows(&data), GLUE_NARROW))),
        OutputFormat::Json => Envelope::new(data, &context).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use crate::utility_test::*;

    #[tokio::test]
    async fn integration_read_text_table() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(GET).path("/v1/auth/token/lookup-self");
            then.status(200).body(r#"{"data": {"display_name": "token", "policies": ["default"], "ttl": 0}}"#);
        }).await;

        let body = serde_json::json!({"endpoint": server.base_url(), "path": "auth/token/lookup-self"}).to_string();
        let (status, response) = call(test_config(), "/vault-read", Some("text/plain"), &body).await;

        assert_eq!(status, 200);
        assert_eq!(response, [
            "Key           Value",
            "---           -----",
            "display_name  token",
            "policies      [\"default\"]",
            "ttl           0",
        ].join("\n"));
    }

    #[tokio::test]
    async fn integration_read_forwards_token_from_secret() {
        let secrets = tempfile::tempdir().unwrap();
        std::fs::write(secrets.path().join("vault-token"), "s.mounted\n").unwrap();
        let mut config = test_config();
        config.secrets_dir = secrets.path().to_path_buf();

        let server = MockServer::start_async().await;
        let mock = server.mock_async(|when, then| {
            when.method(GET)
                .path("/v1/secret/config")
                .header("x-vault-token", "s.mounted");
            then.status(200).body(r#"{"data": {"ttl": "1h"}}"#);
        }).await;

        let body = serde_json::json!({"endpoint": server.base_url(), "path": "/secret/config"}).to_string();
        let (status, response) = call(config, "/vault-read", None, &body).await;

        mock.assert_async().await;
        assert_eq!(status, 200);
        let json: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(json["payload"]["ttl"], "1h");
    }
}

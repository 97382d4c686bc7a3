//! `/slack-message`
//!
use std::sync::Arc;
use axum::{body::Bytes, extract::State, response::Response};
use crate::config::Config;
use crate::error::HandlerResult;
use crate::formatter;
use crate::request;
use crate::slack::{SlackClient, SlackMessageRequest};

/// The answer is always text: the confirmation line.
pub async fn message(
    State(config): State<Arc<Config>>,
    body: Bytes,
) -> HandlerResult<Response>
{
    let request: SlackMessageRequest = request::decode_body(&body)?;
    let token = request::required(config.resolve(&request.token, Some("SLACK_TOKEN"), Some("slack-token"), None), "error, no token")?;
    let message = request::required(Some(request.message.clone()), "error, no message")?;
    let channel = request::required(config.resolve(&request.channel, Some("SLACK_CHANNEL"), None, None), "error, no channel")?;

    let client = SlackClient::new(&config, &token)?;
    let sent = client.post_message(&channel, &message).await?;
    Ok(formatter::text_response(sent))
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use crate::utility_test::*;

    #[tokio::test]
    async fn integration_message_sent() {
        let server = MockServer::start_async().await;
        let mock = server.mock_async(|when, then| {
            when.method(POST)
                .path("/chat.postMessage")
                .header("authorization", "Bearer xoxb-2")
                .json_body(serde_json::json!({"channel": "C2", "text": "hello", "as_user": true}));
            then.status(200).body(r#"{"ok": true, "channel": "C2", "ts": "1503435956.000247"}"#);
        }).await;

        let mut config = test_config();
        config.slack_api = server.base_url();
        let body = serde_json::json!({"token": "xoxb-2", "message": "hello", "channel": "C2"}).to_string();
        let (status, response) = call(config, "/slack-message", None, &body).await;

        mock.assert_async().await;
        assert_eq!(status, 200);
        assert!(response.starts_with("Message successfully sent to channel C2 at "));
    }

    #[tokio::test]
    async fn integration_message_channel_from_environment() {
        let server = MockServer::start_async().await;
        let mock = server.mock_async(|when, then| {
            when.method(POST)
                .path("/chat.postMessage")
                .json_body_partial(r#"{"channel": "C-env"}"#);
            then.status(200).body(r#"{"ok": true, "channel": "C-env", "ts": "1503435956.000247"}"#);
        }).await;

        let mut config = test_config();
        config.slack_api = server.base_url();
        config.environment.insert("SLACK_CHANNEL".to_string(), "C-env".to_string());
        let body = serde_json::json!({"token": "xoxb-2", "message": "hello"}).to_string();
        let (status, _response) = call(config, "/slack-message", None, &body).await;

        mock.assert_async().await;
        assert_eq!(status, 200);
    }

    #[tokio::test]
    async fn integration_message_slack_error() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(POST).path("/chat.postMessage");
            then.status(200).body(r#"{"ok": false, "error": "channel_not_found"}"#);
        }).await;

        let mut config = test_config();
        config.slack_api = server.base_url();
        let body = serde_json::json!({"token": "xoxb-2", "message": "hello", "channel": "nope"}).to_string();
        let (status, response) = call(config, "/slack-message", None, &body).await;

        assert_eq!(status, 500);
        assert_eq!(response.trim(), "slack error: channel_not_found");
    }

    #[tokio::test]
    async fn integration_message_required_fields() {
        let (status, response) = call(test_config(), "/slack-message", None, r#"{"message": "hello", "channel": "C2"}"#).await;
        assert_eq!((status, response.trim()), (400, "error, no token"));

        let (status, response) = call(test_config(), "/slack-message", None, r#"{"token": "xoxb-2", "channel": "C2"}"#).await;
        assert_eq!((status, response.trim()), (400, "error, no message"));

        let (status, response) = call(test_config(), "/slack-message", None, r#"{"token": "xoxb-2", "message": "hello"}"#).await;
        assert_eq!((status, response.trim()), (400, "error, no channel"));
    }
}

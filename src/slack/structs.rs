//! The structs
//!
#[derive(Debug, Clone)]
pub struct SlackClient {
    pub client: reqwest::Client,
    pub api: String,
    pub token: String,
}

/// The request body of `/slack-message`.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct SlackMessageRequest {
    pub token: String,
    pub message: String,
    pub channel: String,
}

/// The optional notification fields of the GCE and GCS request bodies.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct SlackFields {
    pub slack_token: String,
    pub slack_channel: String,
    pub slack_emoji: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct PostMessage {
    pub channel: String,
    pub text: String,
    pub as_user: bool,
}

/// The answer of `chat.postMessage`. Slack answers `200 OK` with `ok: false` on failure.
///
/// ```text
/// {"ok": true, "channel": "C1H9RESGL", "ts": "1503435956.000247", "message": {...}}
/// {"ok": false, "error": "channel_not_found"}
/// ```
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct PostMessageResponse {
    pub ok: bool,
    pub channel: String,
    pub ts: String,
    pub error: Option<String>,
}

//! The impls and functions
//!
use std::time::Instant;
use anyhow::{anyhow, Result};
use chrono::{Local, SecondsFormat, TimeZone};
use log::*;
use crate::config::Config;
use crate::slack::{PostMessage, PostMessageResponse, SlackClient, SlackFields};
use crate::utility;

impl SlackClient {
    pub fn new(
        config: &Config,
        token: &str,
    ) -> Result<Self>
    {
        Ok(SlackClient {
            client: utility::http_client(config)?,
            api: config.slack_api.clone(),
            token: token.to_string(),
        })
    }
    /// Post the text as the bot user, and return the confirmation line.
    pub async fn post_message(
        &self,
        channel: &str,
        text: &str,
    ) -> Result<String>
    {
        info!("begin post message to {}", channel);
        let timer = Instant::now();
        let message = PostMessage {
            channel: channel.to_string(),
            text: text.to_string(),
            as_user: true,
        };
        let request = self.client
            .post(utility::join_url(&self.api, "chat.postMessage"))
            .bearer_auth(&self.token)
            .json(&message);
        let response: PostMessageResponse = utility::read_json(request).await?;
        info!("end post message to {}: {:?}", channel, timer.elapsed());
        if !response.ok {
            return Err(anyhow!("slack error: {}", response.error.unwrap_or_else(|| "unknown".to_string())));
        }
        Ok(format!("Message successfully sent to channel {} at {}", response.channel, message_time(&response.ts)))
    }
}

/// A message timestamp (`1503435956.000247`) as RFC 3339 local time, whole seconds.
pub fn message_time(
    ts: &str,
) -> String
{
    let seconds = ts.parse::<f64>().unwrap_or_default() as i64;
    match Local.timestamp_opt(seconds, 0).single() {
        Some(time) => time.to_rfc3339_opts(SecondsFormat::Secs, true),
        None => ts.to_string(),
    }
}

impl SlackFields {
    pub fn token(&self, config: &Config) -> Option<String> {
        config.resolve(&self.slack_token, Some("SLACK_TOKEN"), Some("slack-token"), None)
    }
    pub fn channel(&self, config: &Config) -> Option<String> {
        config.resolve(&self.slack_channel, Some("SLACK_CHANNEL"), None, None)
    }
    pub fn emoji(&self, config: &Config) -> String {
        config.resolve(&self.slack_emoji, Some("SLACK_EMOJI"), None, None).unwrap_or_default()
    }
}

/// Post the summary of a GCP handler when a token and a channel are available.
/// A failure is only logged: it never changes the response of the handler.
pub async fn notify(
    config: &Config,
    fields: &SlackFields,
    summary: &str,
)
{
    let (token, channel) = match (fields.token(config), fields.channel(config)) {
        (Some(token), Some(channel)) => (token, channel),
        _ => {
            debug!("no slack token or channel, no notification");
            return;
        },
    };
    let text = notification_text(&fields.emoji(config), summary);
    let result = match SlackClient::new(config, &token) {
        Ok(client) => client.post_message(&channel, &text).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(sent) => info!("{}", sent),
        Err(e) => warn!("slack notification failed: {:#}", e),
    }
}

pub fn notification_text(
    emoji: &str,
    summary: &str,
) -> String
{
    format!("GCP message {}\n```{}```", emoji, summary)
}

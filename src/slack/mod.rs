//! Module for Slack.
//!
//! `/slack-message` posts a message to a channel with `chat.postMessage`.
//! The GCE and GCS handlers use [notify] to post a summary of what they did.
//!
mod structs;
mod functions;
mod message;

pub use structs::*;
pub use functions::*;
pub use message::*;

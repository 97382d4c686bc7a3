//! The structs
//!
use crate::request::EchoedHeaders;

/// The output mode, taken from the `Content-Type` header of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Text,
    #[default]
    Json,
}

/// The JSON wrapper around every payload.
///
/// ```text
/// {
///     "payload": [ ... ],
///     "headers": { "content-type": ["application/json"] },
///     "environment": ["HOME=/home/app", ... ]
/// }
/// ```
/// The environment is only present for handlers that add it, and only if the configuration exposes it.
#[derive(Serialize, Debug)]
pub struct Envelope<T> {
    pub payload: T,
    pub headers: EchoedHeaders,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Vec<String>>,
}

/// The glue strings used between the columns.
pub const GLUE_NARROW: &str = "  ";
pub const GLUE_STATUS: &str = "    ";
pub const GLUE_WIDE: &str = "      ";

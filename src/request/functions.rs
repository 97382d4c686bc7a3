//! The impls and functions
//!
use axum::http::HeaderMap;
use serde::de::DeserializeOwned;
use log::*;
use crate::error::{HandlerError, HandlerResult};
use crate::formatter::OutputFormat;
use crate::request::{EchoedHeaders, RequestContext};

impl RequestContext {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn from_headers(
        headers: &HeaderMap,
    ) -> Self
    {
        RequestContext {
            format: OutputFormat::from_headers(headers),
            headers: echo_headers(headers),
        }
    }
}

/// Copy the request headers for the envelope.
/// Values that are not valid visible ASCII are skipped.
pub fn echo_headers(
    headers: &HeaderMap,
) -> EchoedHeaders
{
    let mut echoed = EchoedHeaders::new();
    for (name, value) in headers.iter() {
        match value.to_str() {
            Ok(value) => echoed.entry(name.as_str().to_string()).or_default().push(value.to_string()),
            Err(_e) => debug!("header {} skipped: not printable", name),
        }
    }
    echoed
}

/// Decode the body into the handler's request struct.
///
/// An empty (or whitespace only) body is the default request.
pub fn decode_body<T>(
    body: &[u8],
) -> HandlerResult<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(|byte| byte.is_ascii_whitespace()) {
        debug!("empty body");
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| {
            warn!("Json parsing error: {}", e);
            HandlerError::input("Input data error")
        })
}

/// A required field: a missing value is an input error carrying the field specific message.
pub fn required(
    value: Option<String>,
    message: &str,
) -> HandlerResult<String>
{
    value
        .filter(|value| !value.is_empty())
        .ok_or_else(|| HandlerError::input(message))
}

//! `/vault-kv-put`
//!
use std::sync::Arc;
use axum::{body::Bytes, extract::State, http::HeaderMap, response::Response};
use crate::config::Config;
use crate::error::{HandlerError, HandlerResult};
use crate::formatter::{self, Envelope, OutputFormat, GLUE_NARROW};
use crate::request::{self, RequestContext};
use crate::vault::{key_value_rows, VaultClient, VaultWriteRequest};

pub async fn kv_put(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResult<Response>
{
    let context = RequestContext::from_headers(&headers);
    let request: VaultWriteRequest = request::decode_body(&body)?;
    let path = request::required(Some(request.path.clone()), "empty path")?;
    if request.data.is_empty() {
        return Err(HandlerError::input("no data"));
    }

    let client = VaultClient::new(&config, &request.target)?;
    // kv version 2 expects the values under "data".
    let written = client.write(&path, &serde_json::json!({"data": request.data, "options": {}}))
        .await?
        .and_then(|secret| secret.data)
        .unwrap_or_default();

    match context.format {
        OutputFormat::Text => Ok(formatter::text_response(formatter::columnize(&key_value_rows(&written), GLUE_NARROW))),
        OutputFormat::Json => Envelope::new(written, &context).into_response(),
    }
}

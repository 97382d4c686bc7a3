//! The structs
//!
use std::collections::BTreeMap;
use crate::formatter::OutputFormat;

/// The echoed request headers: header name to all of its values, in arrival order.
pub type EchoedHeaders = BTreeMap<String, Vec<String>>;

/// What a handler needs to know about the request besides its body.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub format: OutputFormat,
    pub headers: EchoedHeaders,
}

/// The request body shared by the handlers that only need an endpoint and a token:
/// the consul, nomad and vault-status handlers.
///
/// ```text
/// {"endpoint": "http://consul.service.consul:8500", "token": "..."}
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct EndpointRequest {
    pub token: String,
    pub endpoint: String,
}

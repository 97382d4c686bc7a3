//! The structs
//!
use std::{collections::BTreeMap, path::PathBuf, time::Duration};

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
pub const DEFAULT_SECRETS_DIR: &str = "/var/openfaas/secrets";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_CONSUL_ENDPOINT: &str = "http://localhost:8500";
pub const DEFAULT_NOMAD_ENDPOINT: &str = "http://localhost:4646";
pub const DEFAULT_VAULT_ENDPOINT: &str = "http://localhost:8200";
pub const DEFAULT_COMPUTE_API: &str = "https://compute.googleapis.com/compute/v1";
pub const DEFAULT_STORAGE_API: &str = "https://storage.googleapis.com/storage/v1";
pub const DEFAULT_METADATA_TOKEN_URL: &str = "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";
pub const DEFAULT_SLACK_API: &str = "https://slack.com/api";
pub const DEFAULT_GROUP_TARGET_SIZE: u32 = 3;

/// The configuration shared (read only) by all handlers.
#[derive(Debug, Clone)]
pub struct Config {
    /// Snapshot of the process environment, taken after `.env` has been loaded.
    pub environment: BTreeMap<String, String>,
    /// Directory holding the mounted secrets.
    pub secrets_dir: PathBuf,
    /// Add the environment to the JSON envelope of the handlers that support it.
    /// This leaks every variable to the caller, so it is off unless explicitly enabled.
    pub expose_environment: bool,
    /// Timeout for every call to an external system.
    pub request_timeout: Duration,
    pub consul_endpoint: String,
    pub nomad_endpoint: String,
    pub vault_endpoint: String,
    pub compute_api: String,
    pub storage_api: String,
    pub metadata_token_url: String,
    pub slack_api: String,
    /// The size a regional managed instance group is scaled up to by gce-toggle.
    pub group_target_size: u32,
}

/// The place a resolved setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Request,
    Environment,
    Secret,
    Default,
}

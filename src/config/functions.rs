//! The impls and functions
//!
use std::{collections::BTreeMap, env, fs, path::PathBuf, time::Duration};
use log::*;
use anyhow::{Context, Result};
use crate::config::*;

impl Default for Config {
    fn default() -> Self {
        Config {
            environment: BTreeMap::new(),
            secrets_dir: PathBuf::from(DEFAULT_SECRETS_DIR),
            expose_environment: false,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            consul_endpoint: DEFAULT_CONSUL_ENDPOINT.to_string(),
            nomad_endpoint: DEFAULT_NOMAD_ENDPOINT.to_string(),
            vault_endpoint: DEFAULT_VAULT_ENDPOINT.to_string(),
            compute_api: DEFAULT_COMPUTE_API.to_string(),
            storage_api: DEFAULT_STORAGE_API.to_string(),
            metadata_token_url: DEFAULT_METADATA_TOKEN_URL.to_string(),
            slack_api: DEFAULT_SLACK_API.to_string(),
            group_target_size: DEFAULT_GROUP_TARGET_SIZE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Default::default()
    }
    /// Build the configuration from the current process environment.
    ///
    /// This should be called after `dotenv().ok()`, so variables set in `.env` are part of the snapshot.
    pub fn from_process_environment(
        secrets_dir: PathBuf,
        request_timeout: Duration,
        expose_environment: bool,
    ) -> Self
    {
        let environment: BTreeMap<String, String> = env::vars().collect();
        debug!("environment snapshot: {} variables", environment.len());
        Config {
            environment,
            secrets_dir,
            request_timeout,
            expose_environment,
            ..Default::default()
        }
    }
    /// Return a non-empty environment variable from the snapshot.
    pub fn env_var(
        &self,
        key: &str,
    ) -> Option<String>
    {
        self.environment
            .get(key)
            .filter(|value| !value.is_empty())
            .cloned()
    }
    pub fn secret_path(
        &self,
        name: &str,
    ) -> PathBuf
    {
        self.secrets_dir.join(name)
    }
    /// Read a mounted secret, trimmed. A missing or empty secret file is `None`.
    pub fn read_secret(
        &self,
        name: &str,
    ) -> Option<String>
    {
        let path = self.secret_path(name);
        match fs::read_to_string(&path) {
            Ok(content) => {
                let content = content.trim();
                if content.is_empty() {
                    debug!("secret {} is empty", path.display());
                    None
                } else {
                    Some(content.to_string())
                }
            },
            Err(e) => {
                debug!("secret {} cannot be read: {}", path.display(), e);
                None
            },
        }
    }
    /// Resolve a setting, and report where the value came from.
    ///
    /// The order is: request value, environment variable, mounted secret, default.
    /// Empty strings count as not set at every step.
    pub fn resolve_with_source(
        &self,
        request_value: &str,
        env_key: Option<&str>,
        secret_name: Option<&str>,
        default: Option<&str>,
    ) -> Option<(String, Source)>
    {
        if !request_value.is_empty() {
            return Some((request_value.to_string(), Source::Request));
        }
        if let Some(value) = env_key.and_then(|key| self.env_var(key)) {
            return Some((value, Source::Environment));
        }
        if let Some(value) = secret_name.and_then(|name| self.read_secret(name)) {
            return Some((value, Source::Secret));
        }
        default
            .filter(|value| !value.is_empty())
            .map(|value| (value.to_string(), Source::Default))
    }
    pub fn resolve(
        &self,
        request_value: &str,
        env_key: Option<&str>,
        secret_name: Option<&str>,
        default: Option<&str>,
    ) -> Option<String>
    {
        let resolved = self.resolve_with_source(request_value, env_key, secret_name, default);
        match &resolved {
            // the value itself is not logged, it could be a token.
            Some((_, source)) => debug!("{} resolved from {:?}", env_key.or(secret_name).unwrap_or("setting"), source),
            None => debug!("{} not resolved", env_key.or(secret_name).unwrap_or("setting")),
        }
        resolved.map(|(value, _)| value)
    }
    /// The environment as `KEY=VALUE` strings, only when exposing it is enabled.
    pub fn exposed_environment(&self) -> Option<Vec<String>> {
        if self.expose_environment {
            Some(self.environment
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect())
        } else {
            None
        }
    }
}

/// Set a server option: the command line value, else the environment variable, else the default.
pub fn set_option(
    option: &Option<String>,
    env_key: &str,
    default: &str,
) -> String
{
    if let Some(value) = option {
        info!("{} argument set: using: {}", env_key, value);
        value.to_string()
    } else {
        match env::var(env_key) {
            Ok(set_var) => {
                info!("{} not set: set via .env or environment: {}", env_key, set_var);
                set_var
            }
            Err(_e) => {
                info!("{} not set: and not set via .env or environment: using default: {}", env_key, default);
                default.to_string()
            }
        }
    }
}

pub fn set_timeout(
    option: &Option<String>,
) -> Result<Duration>
{
    let timeout = set_option(option, "MORE_SERVERLESS_TIMEOUT", &DEFAULT_TIMEOUT_SECONDS.to_string());
    let seconds: u64 = timeout.parse()
        .with_context(|| format!("Invalid timeout value: {}", timeout))?;
    Ok(Duration::from_secs(seconds))
}

pub fn set_expose_environment(
    option: bool,
) -> bool
{
    if option {
        warn!("exposing the environment in JSON responses");
        return true;
    }
    match env::var("MORE_SERVERLESS_EXPOSE_ENVIRONMENT") {
        Ok(set_var) if set_var.eq_ignore_ascii_case("true") || set_var == "1" => {
            warn!("MORE_SERVERLESS_EXPOSE_ENVIRONMENT set: exposing the environment in JSON responses");
            true
        }
        _ => false,
    }
}

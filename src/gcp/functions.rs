//! The impls and functions
//!
use std::{fs, path::PathBuf, time::Instant};
use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use log::*;
use crate::config::Config;
use crate::gcp::{
    Claims, ServiceAccountKey, TokenResponse, TokenSource,
    ASSERTION_LIFETIME_SECONDS, CLOUD_PLATFORM_SCOPE, DEFAULT_TOKEN_URI, JWT_BEARER_GRANT_TYPE,
};
use crate::utility;

impl TokenSource {
    /// Pick the first key file that exists, else the metadata server.
    pub fn resolve(
        config: &Config,
        json_key_path: &str,
        secret_name: &str,
    ) -> Result<Self>
    {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if !json_key_path.is_empty() {
            candidates.push(PathBuf::from(json_key_path));
        }
        if let Some(path) = config.env_var("GOOGLE_APPLICATION_CREDENTIALS") {
            candidates.push(PathBuf::from(path));
        }
        candidates.push(config.secret_path(secret_name));

        match candidates.into_iter().find(|path| path.is_file()) {
            Some(path) => {
                info!("using service account key {}", path.display());
                let key_file = fs::read_to_string(&path)
                    .with_context(|| format!("Error reading service account key {}", path.display()))?;
                let key: ServiceAccountKey = serde_json::from_str(&key_file)
                    .with_context(|| format!("Error parsing service account key {}", path.display()))?;
                Ok(TokenSource::ServiceAccount(key))
            },
            None => {
                info!("no service account key, using the metadata server");
                Ok(TokenSource::Metadata)
            },
        }
    }
    pub async fn access_token(
        &self,
        config: &Config,
        client: &reqwest::Client,
    ) -> Result<String>
    {
        info!("begin read access token");
        let timer = Instant::now();
        let response: TokenResponse = match self {
            TokenSource::ServiceAccount(key) => {
                let assertion = key.assertion(Utc::now().timestamp())?;
                let token_uri = if key.token_uri.is_empty() { DEFAULT_TOKEN_URI } else { key.token_uri.as_str() };
                let request = client.post(token_uri)
                    .form(&[("grant_type", JWT_BEARER_GRANT_TYPE), ("assertion", assertion.as_str())]);
                utility::read_json(request).await?
            },
            TokenSource::Metadata => {
                let request = client.get(&config.metadata_token_url)
                    .header("Metadata-Flavor", "Google");
                utility::read_json(request).await?
            },
        };
        info!("end read access token: {:?}", timer.elapsed());
        Ok(response.access_token)
    }
}

impl ServiceAccountKey {
    /// The signed JWT that is exchanged for an access token.
    pub fn assertion(
        &self,
        issued_at: i64,
    ) -> Result<String>
    {
        let claims = Claims {
            iss: self.client_email.clone(),
            scope: CLOUD_PLATFORM_SCOPE.to_string(),
            aud: if self.token_uri.is_empty() { DEFAULT_TOKEN_URI.to_string() } else { self.token_uri.clone() },
            iat: issued_at,
            exp: issued_at + ASSERTION_LIFETIME_SECONDS,
        };
        let mut header = Header::new(Algorithm::RS256);
        if !self.private_key_id.is_empty() {
            header.kid = Some(self.private_key_id.clone());
        }
        let key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())
            .with_context(|| format!("Invalid private key for {}", self.client_email))?;
        jsonwebtoken::encode(&header, &claims, &key)
            .with_context(|| format!("Error signing assertion for {}", self.client_email))
    }
}

/// Resolve the credentials and read an access token.
pub async fn access_token(
    config: &Config,
    client: &reqwest::Client,
    json_key_path: &str,
    secret_name: &str,
) -> Result<String>
{
    TokenSource::resolve(config, json_key_path, secret_name)?
        .access_token(config, client)
        .await
}

//! The impls and functions
//!
use std::collections::BTreeMap;
use std::time::Instant;
use log::*;
use anyhow::Result;
use itertools::Itertools;
use crate::config::Config;
use crate::formatter;
use crate::request::EndpointRequest;
use crate::utility;
use crate::vault::{LeaderStatus, SealStatus, SecretData, VaultClient, VaultSecret};

impl VaultClient {
    pub fn new(
        config: &Config,
        request: &EndpointRequest,
    ) -> Result<Self>
    {
        let endpoint = config.resolve(&request.endpoint, Some("VAULT_ADDR"), None, Some(&config.vault_endpoint))
            .unwrap_or_else(|| config.vault_endpoint.clone());
        let token = config.resolve(&request.token, Some("VAULT_TOKEN"), Some("vault-token"), None);
        info!("vault endpoint: {}", endpoint);
        Ok(VaultClient {
            client: utility::http_client(config)?,
            endpoint,
            token,
        })
    }
    fn with_token(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder
    {
        match &self.token {
            Some(token) => request.header("X-Vault-Token", token),
            None => request,
        }
    }
    /// The url of a logical path, `secret/data/app` is `<endpoint>/v1/secret/data/app`.
    pub fn logical_url(
        &self,
        path: &str,
    ) -> String
    {
        utility::join_url(&self.endpoint, &format!("v1/{}", path.trim_start_matches('/')))
    }
    /// Read a logical path. A path without a secret is `None`.
    pub async fn read(
        &self,
        path: &str,
        parameters: &BTreeMap<String, Vec<String>>,
    ) -> Result<Option<VaultSecret>>
    {
        info!("begin read {}", path);
        let timer = Instant::now();
        let query: Vec<(&str, &str)> = parameters.iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key.as_str(), value.as_str())))
            .collect();
        let request = self.with_token(self.client.get(self.logical_url(path)).query(&query));
        let secret = utility::read_optional_json(request).await?;
        info!("end read {}: {:?}", path, timer.elapsed());
        Ok(secret)
    }
    /// Write to a logical path. Vault answers some writes without a body, which is `None`.
    pub async fn write(
        &self,
        path: &str,
        data: &serde_json::Value,
    ) -> Result<Option<VaultSecret>>
    {
        info!("begin write {}", path);
        let timer = Instant::now();
        let request = self.with_token(self.client.put(self.logical_url(path)).json(data));
        let secret = utility::read_json_or_empty(request).await?;
        info!("end write {}: {:?}", path, timer.elapsed());
        Ok(secret)
    }
    pub async fn seal_status(&self) -> Result<SealStatus> {
        info!("begin read seal status");
        let timer = Instant::now();
        let status = utility::read_json(self.with_token(self.client.get(self.logical_url("sys/seal-status")))).await?;
        info!("end read seal status: {:?}", timer.elapsed());
        Ok(status)
    }
    pub async fn leader(&self) -> Result<LeaderStatus> {
        info!("begin read leader");
        let timer = Instant::now();
        let leader = utility::read_json(self.with_token(self.client.get(self.logical_url("sys/leader")))).await?;
        info!("end read leader: {:?}", timer.elapsed());
        Ok(leader)
    }
}

/// The `Key Value` table of a secret, keys sorted.
pub fn key_value_rows(
    data: &SecretData,
) -> Vec<String>
{
    let mut rows = vec!["Key\tValue".to_string(), "---\t-----".to_string()];
    rows.extend(data.iter()
        .map(|(key, value)| format!("{}\t{}", key, formatter::display_value(value)))
        .sorted());
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn unit_logical_url() {
        let client = VaultClient::new(&Config::new(), &EndpointRequest { endpoint: "http://vault:8200/".to_string(), token: String::new() }).unwrap();
        assert_eq!(client.logical_url("/secret/data/app"), "http://vault:8200/v1/secret/data/app");
        assert_eq!(client.logical_url("sys/leader"), "http://vault:8200/v1/sys/leader");
    }

    #[test]
    fn unit_key_value_rows_sorted() {
        let data: SecretData = serde_json::from_str(r#"{"user": "app", "password": "hunter2", "ttl": 30}"#).unwrap();
        assert_eq!(key_value_rows(&data), vec!["Key\tValue", "---\t-----", "password\thunter2", "ttl\t30", "user\tapp"]);
    }

    #[tokio::test]
    async fn unit_read_sends_repeated_query_parameters() {
        let server = MockServer::start_async().await;
        let mock = server.mock_async(|when, then| {
            when.method(GET)
                .path("/v1/secret/data/app")
                .query_param("version", "2")
                .header("x-vault-token", "s.token");
            then.status(200).body(r#"{"data": {"data": {"user": "app"}, "metadata": {"version": 2}}}"#);
        }).await;

        let client = VaultClient::new(&Config::new(), &EndpointRequest { endpoint: server.base_url(), token: "s.token".to_string() }).unwrap();
        let parameters = BTreeMap::from([("version".to_string(), vec!["2".to_string()])]);
        let secret = client.read("secret/data/app", &parameters).await.unwrap().unwrap();

        mock.assert_async().await;
        assert_eq!(secret.data.unwrap()["metadata"]["version"], 2);
    }
}

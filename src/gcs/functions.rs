//! The impls and functions
//!
use std::time::Instant;
use log::*;
use anyhow::{anyhow, Context, Result};
use reqwest::Url;
use crate::config::Config;
use crate::gcp;
use crate::gcs::{Bucket, GcsClient, ObjectList, RewriteResponse, StorageObject, GCS_SECRET};
use crate::utility;

impl GcsClient {
    pub async fn new(
        config: &Config,
        json_key_path: &str,
    ) -> Result<Self>
    {
        let client = utility::http_client(config)?;
        let token = gcp::access_token(config, &client, json_key_path, GCS_SECRET).await?;
        Ok(GcsClient {
            client,
            api: config.storage_api.clone(),
            token,
        })
    }
    /// The api url with the segments appended; every segment is percent encoded,
    /// so object names with a slash stay one segment.
    pub fn url(
        &self,
        segments: &[&str],
    ) -> Result<Url>
    {
        let mut url = Url::parse(&self.api)
            .with_context(|| format!("Invalid storage api url {}", self.api))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Invalid storage api url {}", self.api))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
    /// Every object of the bucket, following the page tokens.
    pub async fn objects(
        &self,
        bucket: &str,
    ) -> Result<Vec<StorageObject>>
    {
        info!("begin list objects {}", bucket);
        let timer = Instant::now();
        let mut objects = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut request = self.client.get(self.url(&["b", bucket, "o"])?).bearer_auth(&self.token);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }
            let page: ObjectList = utility::read_json(request).await?;
            objects.extend(page.items);
            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }
        info!("end list objects {}: {} objects, {:?}", bucket, objects.len(), timer.elapsed());
        Ok(objects)
    }
    /// Copy an object to the same name in the destination bucket.
    pub async fn copy_object(
        &self,
        source_bucket: &str,
        object: &str,
        destination_bucket: &str,
    ) -> Result<()>
    {
        let url = self.url(&["b", source_bucket, "o", object, "rewriteTo", "b", destination_bucket, "o", object])?;
        let mut rewrite_token: Option<String> = None;
        loop {
            let mut request = self.client.post(url.clone())
                .bearer_auth(&self.token)
                .json(&serde_json::json!({}));
            if let Some(token) = &rewrite_token {
                request = request.query(&[("rewriteToken", token)]);
            }
            let response: RewriteResponse = utility::read_json(request).await?;
            if response.done {
                debug!("copied {}/{} to {}: {} bytes", source_bucket, object, destination_bucket, response.object_size);
                return Ok(());
            }
            debug!("copy {}/{}: {} of {} bytes", source_bucket, object, response.total_bytes_rewritten, response.object_size);
            rewrite_token = Some(response.rewrite_token
                .ok_or_else(|| anyhow!("Rewrite of {} not done and no rewrite token", object))?);
        }
    }
    pub async fn create_bucket(
        &self,
        project: &str,
        bucket: &Bucket,
    ) -> Result<Bucket>
    {
        info!("create bucket {} in project {}", bucket.name, project);
        let request = self.client.post(self.url(&["b"])?)
            .bearer_auth(&self.token)
            .query(&[("project", project)])
            .json(bucket);
        utility::read_json(request).await
    }
    pub async fn bucket(
        &self,
        name: &str,
    ) -> Result<Bucket>
    {
        let request = self.client.get(self.url(&["b", name])?).bearer_auth(&self.token);
        utility::read_json(request).await
    }
    pub async fn delete_bucket(
        &self,
        name: &str,
    ) -> Result<()>
    {
        info!("delete bucket {}", name);
        let request = self.client.delete(self.url(&["b", name])?).bearer_auth(&self.token);
        utility::read_json_or_empty::<serde_json::Value>(request).await?;
        Ok(())
    }
}

/// A byte count in binary units with one decimal, `1536` is `1.5 KiB`.
/// Counts below 1024 are the plain number.
pub fn humanize_bytes(
    bytes: u64,
) -> String
{
    const UNIT: u64 = 1024;
    if bytes < UNIT {
        return bytes.to_string();
    }
    let mut divisor = UNIT;
    let mut exponent = 0;
    let mut quotient = bytes / UNIT;
    while quotient >= UNIT {
        divisor *= UNIT;
        exponent += 1;
        quotient /= UNIT;
    }
    format!("{:.1} {}iB", bytes as f64 / divisor as f64, "KMGTPE".chars().nth(exponent).unwrap_or('E'))
}

//! The structs
//!
use std::collections::BTreeMap;
use crate::slack::SlackFields;

pub const GCS_SECRET: &str = "gcs-sa-gcp";

#[derive(Debug, Clone)]
pub struct GcsClient {
    pub client: reqwest::Client,
    pub api: String,
    pub token: String,
}

/// The request body of `/gcs-cp-bucket`.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct CpBucketRequest {
    pub src_bucket: String,
    pub dst_bucket: String,
    pub project_id: String,
    pub json_key_path: String,
    #[serde(flatten)]
    pub slack: SlackFields,
}

/// The request body of `/gcs-make-bucket`.
///
/// ```text
/// {
///     "name": "demo-archive",
///     "projectId": "demo",
///     "location": "EU",
///     "class": "NEARLINE",
///     "versioningEnabled": true,
///     "uniformBucketLevelAccess": true,
///     "labels": {"team": "platform"}
/// }
/// ```
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct MakeBucketRequest {
    pub name: String,
    pub project_id: String,
    pub labels: BTreeMap<String, String>,
    pub uniform_bucket_level_access: bool,
    pub class: String,
    pub versioning_enabled: bool,
    pub location: String,
    pub location_type: String,
    pub json_key_path: String,
    #[serde(flatten)]
    pub slack: SlackFields,
}

/// The request body of `/gcs-remove-bucket`.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoveBucketRequest {
    pub name: String,
    pub project_id: String,
    pub json_key_path: String,
    #[serde(flatten)]
    pub slack: SlackFields,
}

/// An object of `b/{bucket}/o`. The size is a decimal string.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct StorageObject {
    pub name: String,
    pub bucket: String,
    pub size: String,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectList {
    pub items: Vec<StorageObject>,
    pub next_page_token: Option<String>,
}

/// The answer of `rewriteTo`: a large object takes several calls, each continuing with the rewrite token.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct RewriteResponse {
    pub total_bytes_rewritten: String,
    pub object_size: String,
    pub done: bool,
    pub rewrite_token: Option<String>,
}

/// The bucket resource, as sent on create and as returned.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct Bucket {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub storage_class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning: Option<Versioning>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_configuration: Option<IamConfiguration>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Versioning {
    pub enabled: bool,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct IamConfiguration {
    pub uniform_bucket_level_access: UniformBucketLevelAccess,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct UniformBucketLevelAccess {
    pub enabled: bool,
}

/// The copy result of one object.
#[derive(Serialize, Debug, Clone)]
pub struct CopyResult {
    #[serde(rename = "srcObj")]
    pub src_obj: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The payload of `/gcs-cp-bucket`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CpBucketPayload {
    pub result: Vec<CopyResult>,
    pub total_size: u64,
    pub total_size_human: String,
}

/// The payload of `/gcs-make-bucket`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BucketPayload {
    pub name: String,
    pub project_id: String,
    pub gs_uri: String,
    pub cloud_console_uri: String,
}

/// The payload of `/gcs-remove-bucket`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RemovedBucketPayload {
    pub name: String,
    pub project_id: String,
}

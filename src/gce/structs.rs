//! The structs
//!
use crate::slack::SlackFields;

pub const GCE_SECRET: &str = "gce-sa-gcp";

#[derive(Debug, Clone)]
pub struct GceClient {
    pub client: reqwest::Client,
    pub api: String,
    pub project: String,
    pub region: String,
    pub token: String,
}

/// The request body of the GCE handlers.
///
/// ```text
/// {"projectId": "demo-project", "region": "europe-west1", "jsonKeyPath": "/keys/sa.json", "slackChannel": "C1"}
/// ```
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct GceRequest {
    pub project_id: String,
    pub region: String,
    pub json_key_path: String,
    #[serde(flatten)]
    pub slack: SlackFields,
}

/// `regions/{region}`, only the zones are used.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Region {
    pub name: String,
    pub zones: Vec<String>,
}

/// A page of a list call, `items` is absent when the list is empty.
#[derive(Deserialize, Debug, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemList<T> {
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        ItemList {
            items: Vec::new(),
            next_page_token: None,
        }
    }
}

/// An instance as returned by `zones/{zone}/instances`.
/// `zone` and `machineType` are full resource urls.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ComputeInstance {
    pub id: String,
    pub name: String,
    pub zone: String,
    pub machine_type: String,
    pub status: String,
    pub scheduling: Scheduling,
    pub network_interfaces: Vec<NetworkInterface>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Scheduling {
    pub preemptible: bool,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkInterface {
    #[serde(rename = "networkIP")]
    pub network_ip: String,
    pub access_configs: Vec<AccessConfig>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessConfig {
    #[serde(rename = "natIP")]
    pub nat_ip: String,
}

/// A regional managed instance group.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct InstanceGroupManager {
    pub name: String,
    pub target_size: u32,
}

/// The answer of a mutating call; the operation is not waited for.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct Operation {
    pub name: String,
    pub operation_type: String,
    pub status: String,
}

/// The payload item of `/gce-list`.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct Instance {
    pub name: String,
    pub zone: String,
    pub machine_type: String,
    pub preemptible: String,
    pub internal_ip: String,
    pub external_ip: String,
    pub status: String,
}

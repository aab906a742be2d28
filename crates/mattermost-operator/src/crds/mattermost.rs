use std::collections::BTreeMap;

use kube::{CustomResource, ResourceExt};
use schemars::JsonSchema;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

use super::{database::Database, filestore::FileStore};
use crate::error::Error;

#[derive(CustomResource, Debug, Serialize, Deserialize, Clone, Default, PartialEq, JsonSchema)]
#[kube(
    group = "installation.mattermost.com",
    version = "v1beta1",
    kind = "Mattermost",
    plural = "mattermosts",
    namespaced,
    status = "MattermostStatus",
    shortname = "mm",
    printcolumn = r#"{"name": "State", "type": "string", "jsonPath": ".status.state"}"#,
    printcolumn = r#"{"name": "Image", "type": "string", "jsonPath": ".status.image"}"#,
    printcolumn = r#"{"name": "Version", "type": "string", "jsonPath": ".status.version"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct MattermostSpec {
    /// Image repository, defaults to the enterprise edition image
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    /// Image tag or digest (`sha256:...`)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    /// Empty string is accepted and treated as unset
    #[serde(
        default,
        deserialize_with = "empty_pull_policy_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub image_pull_policy: Option<PullPolicy>,
    /// When set, takes precedence over the legacy `ingressName`,
    /// `ingressAnnotations` and `useIngressTLS` fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingress: Option<Ingress>,
    /// Legacy ingress host
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ingress_name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub ingress_annotations: BTreeMap<String, String>,
    #[serde(rename = "useIngressTLS", default, skip_serializing_if = "is_false")]
    pub use_ingress_tls: bool,
    /// Extra labels applied to the installation's primary objects
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub resource_labels: BTreeMap<String, String>,
    #[serde(default)]
    pub file_store: FileStore,
    #[serde(default)]
    pub database: Database,
}

fn is_false(b: &bool) -> bool {
    !b
}

fn empty_pull_policy_as_none<'de, D>(deserializer: D) -> Result<Option<PullPolicy>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(policy) => {
            PullPolicy::deserialize(IntoDeserializer::<D::Error>::into_deserializer(policy))
                .map(Some)
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
pub enum PullPolicy {
    Always,
    IfNotPresent,
    Never,
}

impl PullPolicy {
    /// Value for `Container.imagePullPolicy`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PullPolicy::Always => "Always",
            PullPolicy::IfNotPresent => "IfNotPresent",
            PullPolicy::Never => "Never",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ingress {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    /// Secret holding the certificate, empty disables TLS
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tls_secret: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RunningState {
    Reconciling,
    Stable,
    Failed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MattermostStatus {
    pub state: Option<RunningState>,
    pub image: Option<String>,
    pub version: Option<String>,
    pub replicas: Option<i32>,
    pub updated_replicas: Option<i32>,
    pub endpoint: Option<String>,
    pub error: Option<String>,
}

impl MattermostStatus {
    /// Status reported for a spec that cannot be resolved. Such a spec only
    /// clears after the user edits the resource.
    pub fn failed(err: &Error) -> Self {
        Self {
            state: Some(RunningState::Failed),
            error: Some(err.to_string()),
            ..Default::default()
        }
    }
}

impl Mattermost {
    /// Name of the deployment currently designated as production.
    pub fn production_deployment_name(&self) -> String {
        self.name_any()
    }

    pub fn image_name(&self) -> String {
        crate::image::image_name(&self.spec.image, &self.spec.version)
    }

    /// Labels for the installation's primary objects, custom labels included.
    pub fn mattermost_labels(&self, name: &str) -> BTreeMap<String, String> {
        crate::labels::mattermost_labels(&self.spec, name)
    }
}

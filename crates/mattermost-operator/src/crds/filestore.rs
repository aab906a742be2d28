use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::SetDefaults;
use crate::defaults::Defaults;

/// Where Mattermost stores uploaded files. At most one backend is expected
/// to be configured; when none is, an operator-managed MinIO is assumed.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileStore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<ExternalFileStore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<LocalFileStore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_managed: Option<OperatorManagedMinio>,
}

/// S3 compatible bucket managed outside the cluster.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExternalFileStore {
    pub url: String,
    pub bucket: String,
    /// Secret holding `accesskey` and `secretkey`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub secret: String,
}

/// Files kept on a PersistentVolume mounted into the Mattermost pods.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalFileStore {
    #[serde(default)]
    pub enabled: bool,
    /// Storage size, e.g. "50Gi"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub storage_size: String,
}

/// MinIO instance deployed by the operator for this installation.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperatorManagedMinio {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub storage_size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
}

impl FileStore {
    pub fn is_external(&self) -> bool {
        self.external.is_some()
    }

    pub fn is_local(&self) -> bool {
        self.local.as_ref().is_some_and(|l| l.enabled)
    }
}

impl SetDefaults for FileStore {
    fn set_defaults(&mut self, defaults: &Defaults) {
        if self.is_external() {
            return;
        }
        if let Some(local) = self.local.as_mut().filter(|l| l.enabled) {
            if local.storage_size.is_empty() {
                local.storage_size = defaults.filestore_storage_size.clone();
            }
            return;
        }
        let minio = self.operator_managed.get_or_insert_with(Default::default);
        if minio.storage_size.is_empty() {
            minio.storage_size = defaults.filestore_storage_size.clone();
        }
    }
}

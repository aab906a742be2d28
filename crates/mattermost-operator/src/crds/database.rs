use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::SetDefaults;
use crate::defaults::Defaults;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<ExternalDatabase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_managed: Option<OperatorManagedDatabase>,
}

/// Database running outside the operator's control.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExternalDatabase {
    /// Secret containing the `DB_CONNECTION_STRING` key
    pub secret: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperatorManagedDatabase {
    /// Database engine: "mysql" or "postgres"
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub db_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub storage_size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

impl Database {
    pub fn is_external(&self) -> bool {
        self.external.is_some()
    }
}

impl SetDefaults for Database {
    fn set_defaults(&mut self, defaults: &Defaults) {
        if self.is_external() {
            return;
        }
        let managed = self.operator_managed.get_or_insert_with(Default::default);
        if managed.db_type.is_empty() {
            managed.db_type = defaults.database_type.clone();
        }
        if managed.storage_size.is_empty() {
            managed.storage_size = defaults.database_storage_size.clone();
        }
    }
}

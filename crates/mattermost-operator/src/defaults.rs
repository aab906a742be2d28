//! Fixed defaults applied while resolving a `Mattermost` spec.

use crate::crds::mattermost::PullPolicy;

/// Label applied across all components of an installation.
pub const CLUSTER_LABEL: &str = "installation.mattermost.com/installation";

/// Label applied to a given Mattermost as well as all other resources
/// created to support it.
pub const CLUSTER_RESOURCE_LABEL: &str = "installation.mattermost.com/resource";

/// Name of the container running the Mattermost application.
pub const APP_CONTAINER_NAME: &str = "mattermost";

pub const DEFAULT_IMAGE: &str = "mattermost/mattermost-enterprise-edition";
pub const DEFAULT_VERSION: &str = "5.37.1";
pub const DEFAULT_FILESTORE_STORAGE_SIZE: &str = "50Gi";
pub const DEFAULT_DATABASE_STORAGE_SIZE: &str = "50Gi";
pub const DEFAULT_DATABASE_TYPE: &str = "mysql";

const IMAGE_ENV: &str = "MATTERMOST_DEFAULT_IMAGE";
const VERSION_ENV: &str = "MATTERMOST_DEFAULT_VERSION";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub image: String,
    pub version: String,
    pub pull_policy: PullPolicy,
    pub filestore_storage_size: String,
    pub database_storage_size: String,
    pub database_type: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            image: DEFAULT_IMAGE.into(),
            version: DEFAULT_VERSION.into(),
            pull_policy: PullPolicy::IfNotPresent,
            filestore_storage_size: DEFAULT_FILESTORE_STORAGE_SIZE.into(),
            database_storage_size: DEFAULT_DATABASE_STORAGE_SIZE.into(),
            database_type: DEFAULT_DATABASE_TYPE.into(),
        }
    }
}

impl Defaults {
    /// Fixed defaults with the image and version overridable from the
    /// operator's environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut defaults = Self::default();
        if let Some(image) = lookup(IMAGE_ENV).filter(|v| !v.is_empty()) {
            defaults.image = image;
        }
        if let Some(version) = lookup(VERSION_ENV).filter(|v| !v.is_empty()) {
            defaults.version = version;
        }
        defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn fixed_defaults() {
        let d = Defaults::default();
        assert_eq!(d.image, "mattermost/mattermost-enterprise-edition");
        assert_eq!(d.version, "5.37.1");
        assert_eq!(d.pull_policy, PullPolicy::IfNotPresent);
        assert_eq!(d.database_type, "mysql");
    }

    #[test]
    fn lookup_overrides_image_and_version_only() {
        let env = HashMap::from([
            (IMAGE_ENV, "registry.local/mattermost"),
            (VERSION_ENV, "9.11.0"),
        ]);
        let d = Defaults::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(d.image, "registry.local/mattermost");
        assert_eq!(d.version, "9.11.0");
        assert_eq!(d.filestore_storage_size, "50Gi");
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let d = Defaults::from_lookup(|_| Some(String::new()));
        assert_eq!(d, Defaults::default());
    }
}

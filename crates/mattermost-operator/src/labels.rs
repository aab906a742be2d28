//! Label sets tying generated objects to a `Mattermost` installation.

use std::collections::BTreeMap;

use crate::crds::mattermost::MattermostSpec;
use crate::defaults::{APP_CONTAINER_NAME, CLUSTER_LABEL, CLUSTER_RESOURCE_LABEL};

/// Labels for selecting a given Mattermost as well as any external
/// dependency resources created for the installation.
pub fn resource_labels(name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([(CLUSTER_RESOURCE_LABEL.to_string(), name.to_string())])
}

/// Selector labels for the installation's pods and the service in front of
/// them. Deployment selectors are immutable, so these must stay stable.
pub fn selector_labels(name: &str) -> BTreeMap<String, String> {
    let mut labels = resource_labels(name);
    labels.insert(CLUSTER_LABEL.to_string(), name.to_string());
    labels.insert("app".to_string(), APP_CONTAINER_NAME.to_string());
    labels
}

/// Selector labels with `spec.resourceLabels` applied on top. User labels
/// win on collision, including over the reserved keys.
pub fn mattermost_labels(spec: &MattermostSpec, name: &str) -> BTreeMap<String, String> {
    let mut labels = selector_labels(name);
    labels.extend(spec.resource_labels.clone());
    labels
}

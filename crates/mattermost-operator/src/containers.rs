//! Lookup of containers in existing pod templates and deployments.

use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Container;

use crate::defaults::APP_CONTAINER_NAME;

/// First container named `name`, borrowed from `containers`.
pub fn find_container<'a>(containers: &'a [Container], name: &str) -> Option<&'a Container> {
    containers.iter().find(|c| c.name == name)
}

/// Same as [`find_container`] over the deployment's pod template. A
/// deployment without a spec or pod spec has no containers.
pub fn find_container_in_deployment<'a>(
    deployment: &'a Deployment,
    name: &str,
) -> Option<&'a Container> {
    let pod_spec = deployment.spec.as_ref()?.template.spec.as_ref()?;
    find_container(&pod_spec.containers, name)
}

/// The container running the Mattermost application.
pub fn mattermost_app_container(containers: &[Container]) -> Option<&Container> {
    find_container(containers, APP_CONTAINER_NAME)
}

pub fn mattermost_app_container_from_deployment(deployment: &Deployment) -> Option<&Container> {
    find_container_in_deployment(deployment, APP_CONTAINER_NAME)
}

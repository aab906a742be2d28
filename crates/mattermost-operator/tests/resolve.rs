use mattermost_operator::crds::mattermost::{Mattermost, MattermostSpec, PullPolicy};
use mattermost_operator::defaults::Defaults;
use mattermost_operator::labels::{mattermost_labels, selector_labels};
use mattermost_operator::resolve::resolve;
use mattermost_operator::Error;

fn spec_from_yaml(yaml: &str) -> MattermostSpec {
    serde_yaml::from_str(yaml).unwrap()
}

#[test]
fn legacy_manifest_resolves_with_tls() {
    let spec = spec_from_yaml(
        r#"
ingressName: chat.example.com
useIngressTLS: true
ingressAnnotations:
  kubernetes.io/ingress.class: nginx
"#,
    );
    let spec = resolve(spec, &Defaults::default()).unwrap();
    let ingress = spec.resolved_ingress();
    assert!(ingress.enabled);
    assert_eq!(ingress.host, "chat.example.com");
    assert_eq!(ingress.tls_secret, "chat-example-com-tls-cert");
    assert_eq!(spec.image_pull_policy, Some(PullPolicy::IfNotPresent));
}

#[test]
fn legacy_manifest_without_tls_flag() {
    let spec = spec_from_yaml("ingressName: chat.example.com\n");
    assert_eq!(spec.ingress_tls_secret(), "");
}

#[test]
fn structured_ingress_without_host_is_rejected() {
    let spec = spec_from_yaml(
        r#"
ingressName: chat.example.com
ingress:
  enabled: true
"#,
    );
    assert_eq!(
        resolve(spec, &Defaults::default()).unwrap_err(),
        Error::IngressHostRequired
    );
}

#[test]
fn disabled_ingress_resolves_regardless_of_host() {
    let spec = spec_from_yaml("ingress:\n  enabled: false\n");
    let spec = resolve(spec, &Defaults::default()).unwrap();
    assert!(!spec.resolved_ingress().enabled);
}

#[test]
fn resolved_spec_is_byte_stable() {
    let defaults = Defaults::default();
    let spec = spec_from_yaml(
        r#"
version: sha256:dd15a51ac7dafd213744d1ef23394e7532f71a90f477c969b94600e46da5a0cf
ingress:
  enabled: true
  host: mm.example.com
resourceLabels:
  team: a
fileStore:
  local:
    enabled: true
database:
  operatorManaged:
    type: postgres
"#,
    );
    let first = resolve(spec, &defaults).unwrap();
    let first_bytes = serde_json::to_vec(&first).unwrap();
    let reread: MattermostSpec = serde_json::from_slice(&first_bytes).unwrap();
    let second = resolve(reread, &defaults).unwrap();
    assert_eq!(first_bytes, serde_json::to_vec(&second).unwrap());
}

#[test]
fn custom_resource_end_to_end() {
    let mut mm = Mattermost::new(
        "team-a",
        spec_from_yaml(
            r#"
version: sha256:abcd
ingress:
  enabled: true
  host: team-a.example.com
resourceLabels:
  app: custom
"#,
        ),
    );
    mm.set_defaults(&Defaults::default()).unwrap();
    assert_eq!(
        mm.image_name(),
        "mattermost/mattermost-enterprise-edition@sha256:abcd"
    );

    let labels = mm.mattermost_labels("team-a");
    assert_eq!(labels["app"], "custom");
    assert_eq!(selector_labels("team-a")["app"], "mattermost");
    assert_eq!(labels, mattermost_labels(&mm.spec, "team-a"));
}

#[test]
fn empty_pull_policy_resolves_to_if_not_present() {
    let spec = spec_from_yaml("ingressName: chat.example.com\nimagePullPolicy: \"\"\n");
    let spec = resolve(spec, &Defaults::default()).unwrap();
    assert_eq!(spec.image_pull_policy, Some(PullPolicy::IfNotPresent));
}

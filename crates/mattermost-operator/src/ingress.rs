//! Normalized view over the structured `ingress` block and the legacy flat
//! ingress fields of a `Mattermost` spec.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::crds::mattermost::MattermostSpec;

/// Ingress settings after precedence between `spec.ingress` and the legacy
/// fields has been applied. Borrows from the spec it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIngress<'a> {
    pub enabled: bool,
    pub host: &'a str,
    pub annotations: &'a BTreeMap<String, String>,
    /// Empty when TLS is not used.
    pub tls_secret: Cow<'a, str>,
}

impl MattermostSpec {
    /// A present `ingress` block is authoritative and the legacy fields are
    /// ignored. Without it ingress is enabled and built from `ingressName`,
    /// `ingressAnnotations` and `useIngressTLS`.
    pub fn resolved_ingress(&self) -> ResolvedIngress<'_> {
        match &self.ingress {
            Some(ingress) => ResolvedIngress {
                enabled: ingress.enabled,
                host: &ingress.host,
                annotations: &ingress.annotations,
                tls_secret: Cow::Borrowed(&ingress.tls_secret),
            },
            None => ResolvedIngress {
                enabled: true,
                host: &self.ingress_name,
                annotations: &self.ingress_annotations,
                tls_secret: if self.use_ingress_tls {
                    Cow::Owned(default_tls_secret(&self.ingress_name))
                } else {
                    Cow::Borrowed("")
                },
            },
        }
    }

    pub fn ingress_enabled(&self) -> bool {
        self.resolved_ingress().enabled
    }

    pub fn ingress_host(&self) -> &str {
        self.resolved_ingress().host
    }

    pub fn ingress_annotations(&self) -> &BTreeMap<String, String> {
        self.resolved_ingress().annotations
    }

    pub fn ingress_tls_secret(&self) -> String {
        self.resolved_ingress().tls_secret.into_owned()
    }
}

/// `chat.example.com` -> `chat-example-com-tls-cert`
pub fn default_tls_secret(host: &str) -> String {
    format!("{}-tls-cert", host.replace('.', "-"))
}

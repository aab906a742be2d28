use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Ingress is enabled but neither `ingress.host` nor the legacy
    /// `ingressName` carries a host.
    #[error("ingress.host required, but not set")]
    IngressHostRequired,
}

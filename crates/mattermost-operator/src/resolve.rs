//! Defaulting of a `Mattermost` spec into its fully resolved form.
//!
//! Resolution is idempotent: resolving an already resolved spec leaves it
//! unchanged, so the result can be written back to the resource on every
//! reconcile.

use tracing::{debug, warn};

use crate::crds::SetDefaults;
use crate::crds::mattermost::{Mattermost, MattermostSpec};
use crate::defaults::Defaults;
use crate::error::Error;

impl MattermostSpec {
    /// Fill every unset field in place. Fails only when ingress is enabled
    /// and no host can be found; in that case the spec is left untouched.
    pub fn set_defaults(&mut self, defaults: &Defaults) -> Result<(), Error> {
        let ingress = self.resolved_ingress();
        if ingress.enabled && ingress.host.is_empty() {
            warn!("ingress enabled without a host");
            return Err(Error::IngressHostRequired);
        }
        if self.image.is_empty() {
            debug!(image = %defaults.image, "defaulting image");
            self.image = defaults.image.clone();
        }
        if self.version.is_empty() {
            debug!(version = %defaults.version, "defaulting version");
            self.version = defaults.version.clone();
        }
        if self.image_pull_policy.is_none() {
            debug!(policy = defaults.pull_policy.as_str(), "defaulting image pull policy");
            self.image_pull_policy = Some(defaults.pull_policy);
        }

        self.file_store.set_defaults(defaults);
        self.database.set_defaults(defaults);

        Ok(())
    }
}

impl Mattermost {
    pub fn set_defaults(&mut self, defaults: &Defaults) -> Result<(), Error> {
        self.spec.set_defaults(defaults)
    }
}

/// Value-returning form of [`MattermostSpec::set_defaults`].
pub fn resolve(mut spec: MattermostSpec, defaults: &Defaults) -> Result<MattermostSpec, Error> {
    spec.set_defaults(defaults)?;
    Ok(spec)
}

pub mod database;
pub mod filestore;
pub mod mattermost;

use crate::defaults::Defaults;

/// Defaulting for the sub-specs embedded in a `Mattermost` spec.
///
/// Unlike the top-level resolver this cannot fail: every input is accepted
/// and missing values are filled in place.
pub trait SetDefaults {
    fn set_defaults(&mut self, defaults: &Defaults);
}

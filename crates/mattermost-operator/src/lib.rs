pub mod containers;
pub mod crds;
pub mod defaults;
pub mod error;
pub mod image;
pub mod ingress;
pub mod labels;
pub mod resolve;

pub use error::Error;

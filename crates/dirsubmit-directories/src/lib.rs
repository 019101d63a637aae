pub mod descriptor;
pub mod error;
pub mod registry;
pub mod sites;
pub mod strategy;

pub use descriptor::DirectoryDescriptor;
pub use error::{Error, Result};
pub use registry::Registry;
pub use sites::{AlternativeTo, ConfiguredSite, DevHunt, IndieHackers, SaaSHub};
pub use strategy::SubmissionStrategy;

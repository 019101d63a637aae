//! Built-in directory sites plus the data-driven variant loaded from JSON.

mod alternativeto;
mod configured;
mod devhunt;
mod indiehackers;
mod saashub;

pub use alternativeto::AlternativeTo;
pub use configured::{ConfiguredSite, SiteDefinition};
pub use devhunt::DevHunt;
pub use indiehackers::IndieHackers;
pub use saashub::SaaSHub;

//! Chrome backend for the `dirsubmit_core::page` traits.

mod chrome_finder;
mod error;
mod launcher;
mod page;
mod profile;
mod script;
mod session;

pub use chrome_finder::ChromeFinder;
pub use error::{Error, Result};
pub use launcher::{ChromeLauncher, ProfileChoice};
pub use profile::ProfileManager;
pub use session::ChromeSession;

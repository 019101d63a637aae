pub mod catalog;
pub mod error;
pub mod locator;
pub mod outcome;
pub mod pacing;
pub mod page;

pub use catalog::{Catalog, Project};
pub use error::{Error, Result};
pub use locator::{Field, FieldRule, FormPlan, Locator};
pub use outcome::{Action, FailureReason, SubmissionOutcome, SubmissionResult};
pub use pacing::{FixedPacer, Pacer};
pub use page::{BrowserSession, PageDriver, SessionLauncher};

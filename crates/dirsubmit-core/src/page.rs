//! Seams to the browser-automation engine.
//!
//! The orchestrator and the directory strategies only talk to these traits,
//! so they run unchanged against Chrome or against a test stub.

use crate::{Locator, Result};
use async_trait::async_trait;

/// A single browser tab
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate and wait until the page looks idle
    async fn goto(&self, url: &str) -> Result<()>;

    /// Number of elements currently matching the locator
    async fn count(&self, locator: &Locator) -> Result<usize>;

    /// Replace the value of the first element matching the locator
    async fn fill(&self, locator: &Locator, value: &str) -> Result<()>;
}

/// A running browser owned by one orchestration call
#[async_trait]
pub trait BrowserSession: Send {
    async fn new_page(&mut self) -> Result<Box<dyn PageDriver>>;

    /// Shut the browser down. Calling it twice is a no-op.
    async fn close(&mut self) -> Result<()>;
}

#[async_trait]
pub trait SessionLauncher: Send + Sync {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>>;
}

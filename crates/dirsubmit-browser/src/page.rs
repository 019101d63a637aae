use crate::script::{IDLE_PROBE_SCRIPT, count_script, fill_script};
use crate::{Error, Result};
use async_trait::async_trait;
use chromiumoxide::Page;
use dirsubmit_core::{Locator, PageDriver};
use serde_json::Value;
use std::time::{Duration, Instant};

/// Network-quiescence heuristic used after navigation.
///
/// The page counts as idle once the document is complete and no new resource
/// entries have appeared for `quiet_window`. Pages with background polling
/// never settle; `timeout` bounds the wait and the page is used as-is.
#[derive(Debug, Clone, Copy)]
pub struct IdlePolicy {
    pub quiet_window: Duration,
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl Default for IdlePolicy {
    fn default() -> Self {
        Self {
            quiet_window: Duration::from_millis(500),
            poll_interval: Duration::from_millis(100),
            timeout: Duration::from_secs(15),
        }
    }
}

/// A Chrome tab driven over CDP
pub struct CdpPage {
    page: Page,
    idle: IdlePolicy,
}

impl CdpPage {
    pub fn new(page: Page, idle: IdlePolicy) -> Self {
        Self { page, idle }
    }

    async fn eval<T: serde::de::DeserializeOwned>(&self, script: String) -> Result<T> {
        let result = self.page.evaluate(script).await?;
        Ok(result.into_value()?)
    }

    /// Never fails: a page that cannot be probed is waited on until `timeout`
    async fn wait_for_idle(&self) {
        let mut tracker = IdleTracker::new(self.idle, Instant::now());

        loop {
            // A probe fails while a redirect swaps the execution context
            let probe = match self.eval::<Value>(IDLE_PROBE_SCRIPT.to_string()).await {
                Ok(value) => Some(Probe {
                    ready: value["ready"].as_bool().unwrap_or(false),
                    resources: value["resources"].as_u64().unwrap_or(0),
                }),
                Err(e) => {
                    tracing::trace!("Idle probe failed, page still loading: {}", e);
                    None
                }
            };

            match tracker.observe(probe, Instant::now()) {
                Settle::Idle => {
                    tracing::debug!("Page idle after {:?}", tracker.elapsed(Instant::now()));
                    return;
                }
                Settle::TimedOut => {
                    tracing::debug!(
                        "Page still busy after {:?}, continuing anyway",
                        self.idle.timeout
                    );
                    return;
                }
                Settle::Busy => tokio::time::sleep(self.idle.poll_interval).await,
            }
        }
    }
}

/// One reading of the idle probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Probe {
    ready: bool,
    resources: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Settle {
    Busy,
    Idle,
    TimedOut,
}

/// Settle decision over successive probes. A missing probe counts as busy.
#[derive(Debug)]
struct IdleTracker {
    policy: IdlePolicy,
    started: Instant,
    quiet_since: Instant,
    last_resources: Option<u64>,
}

impl IdleTracker {
    fn new(policy: IdlePolicy, now: Instant) -> Self {
        Self {
            policy,
            started: now,
            quiet_since: now,
            last_resources: None,
        }
    }

    fn observe(&mut self, probe: Option<Probe>, now: Instant) -> Settle {
        match probe {
            Some(Probe { ready: true, resources }) if self.last_resources == Some(resources) => {
                if now.duration_since(self.quiet_since) >= self.policy.quiet_window {
                    return Settle::Idle;
                }
            }
            Some(probe) => {
                self.last_resources = Some(probe.resources);
                self.quiet_since = now;
            }
            None => {
                self.last_resources = None;
                self.quiet_since = now;
            }
        }

        if now.duration_since(self.started) >= self.policy.timeout {
            Settle::TimedOut
        } else {
            Settle::Busy
        }
    }

    fn elapsed(&self, now: Instant) -> Duration {
        now.duration_since(self.started)
    }
}

#[async_trait]
impl PageDriver for CdpPage {
    async fn goto(&self, url: &str) -> dirsubmit_core::Result<()> {
        tracing::debug!("Navigating to {}", url);
        self.page
            .goto(url)
            .await
            .map_err(|e| dirsubmit_core::Error::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        self.wait_for_idle().await;
        Ok(())
    }

    async fn count(&self, locator: &Locator) -> dirsubmit_core::Result<usize> {
        let count: usize = self.eval(count_script(locator)).await?;
        tracing::trace!("{} matched {} element(s)", locator, count);
        Ok(count)
    }

    async fn fill(&self, locator: &Locator, value: &str) -> dirsubmit_core::Result<()> {
        let filled: bool = self.eval(fill_script(locator, value)).await?;
        if !filled {
            return Err(Error::Browser(format!("Element disappeared before fill: {}", locator)).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> IdlePolicy {
        IdlePolicy {
            quiet_window: Duration::from_millis(500),
            poll_interval: Duration::from_millis(100),
            timeout: Duration::from_secs(5),
        }
    }

    fn ready(resources: u64) -> Option<Probe> {
        Some(Probe {
            ready: true,
            resources,
        })
    }

    #[test]
    fn test_idle_after_quiet_window() {
        let start = Instant::now();
        let mut tracker = IdleTracker::new(policy(), start);

        assert_eq!(tracker.observe(ready(3), start), Settle::Busy);
        assert_eq!(tracker.observe(ready(3), start + Duration::from_millis(300)), Settle::Busy);
        assert_eq!(tracker.observe(ready(3), start + Duration::from_millis(500)), Settle::Idle);
    }

    #[test]
    fn test_new_resources_restart_quiet_window() {
        let start = Instant::now();
        let mut tracker = IdleTracker::new(policy(), start);

        tracker.observe(ready(3), start);
        assert_eq!(tracker.observe(ready(4), start + Duration::from_millis(400)), Settle::Busy);
        assert_eq!(tracker.observe(ready(4), start + Duration::from_millis(800)), Settle::Busy);
        assert_eq!(tracker.observe(ready(4), start + Duration::from_millis(900)), Settle::Idle);
    }

    #[test]
    fn test_document_not_complete_is_busy() {
        let start = Instant::now();
        let mut tracker = IdleTracker::new(policy(), start);
        let loading = Some(Probe {
            ready: false,
            resources: 3,
        });

        tracker.observe(loading, start);
        assert_eq!(tracker.observe(loading, start + Duration::from_secs(1)), Settle::Busy);
    }

    #[test]
    fn test_failed_probe_counts_as_busy_then_settles() {
        let start = Instant::now();
        let mut tracker = IdleTracker::new(policy(), start);

        tracker.observe(ready(3), start);
        // Redirect to the login page tears down the context mid-wait
        assert_eq!(tracker.observe(None, start + Duration::from_millis(450)), Settle::Busy);
        assert_eq!(tracker.observe(ready(3), start + Duration::from_millis(600)), Settle::Busy);
        assert_eq!(tracker.observe(ready(3), start + Duration::from_millis(1100)), Settle::Idle);
    }

    #[test]
    fn test_failing_probes_time_out_instead_of_erroring() {
        let start = Instant::now();
        let mut tracker = IdleTracker::new(policy(), start);

        assert_eq!(tracker.observe(None, start + Duration::from_secs(1)), Settle::Busy);
        assert_eq!(tracker.observe(None, start + Duration::from_secs(5)), Settle::TimedOut);
    }
}

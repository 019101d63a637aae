use async_trait::async_trait;
use std::time::Duration;

/// Pause policy between real-world requests
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Called after every directory attempt, success or failure
    async fn between_directories(&self);

    /// Called after every project in a batch run
    async fn between_projects(&self);
}

/// Sleeps for a fixed duration at each pause point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPacer {
    directory_delay: Duration,
    project_delay: Duration,
}

impl FixedPacer {
    pub const DEFAULT_DIRECTORY_DELAY: Duration = Duration::from_secs(2);
    pub const DEFAULT_PROJECT_DELAY: Duration = Duration::from_secs(5);

    pub fn new(directory_delay: Duration, project_delay: Duration) -> Self {
        Self {
            directory_delay,
            project_delay,
        }
    }
}

impl Default for FixedPacer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIRECTORY_DELAY, Self::DEFAULT_PROJECT_DELAY)
    }
}

#[async_trait]
impl Pacer for FixedPacer {
    async fn between_directories(&self) {
        tracing::debug!("Pausing {:?} before next directory", self.directory_delay);
        tokio::time::sleep(self.directory_delay).await;
    }

    async fn between_projects(&self) {
        tracing::debug!("Pausing {:?} before next project", self.project_delay);
        tokio::time::sleep(self.project_delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        assert_eq!(
            FixedPacer::default(),
            FixedPacer::new(Duration::from_secs(2), Duration::from_secs(5))
        );
    }

    #[tokio::test]
    async fn test_zero_delay_returns_immediately() {
        let pacer = FixedPacer::new(Duration::ZERO, Duration::ZERO);
        let start = std::time::Instant::now();

        pacer.between_directories().await;
        pacer.between_projects().await;

        assert!(start.elapsed() < Duration::from_secs(1));
    }
}

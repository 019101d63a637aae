use crate::page::IdlePolicy;
use crate::session::ChromeSession;
use crate::{Error, ProfileManager, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::handler::viewport::Viewport;
use dirsubmit_core::{BrowserSession, SessionLauncher};
use std::path::PathBuf;

/// Which Chrome profile a launched session uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileChoice {
    /// Fresh profile per launch, deleted afterwards
    Temporary,
    /// Reused directory, so directory logins survive between runs
    Persistent(PathBuf),
}

/// Launches Chrome sessions for form filling
pub struct ChromeLauncher {
    chrome_path: PathBuf,
    profile: ProfileChoice,
    headless: bool,
    idle: IdlePolicy,
}

impl ChromeLauncher {
    const WINDOW: (u32, u32) = (1280, 720);

    /// Create a new ChromeLauncher; headed by default so the user can review forms
    pub fn new(chrome_path: PathBuf, profile: ProfileChoice) -> Self {
        Self {
            chrome_path,
            profile,
            headless: false,
            idle: IdlePolicy::default(),
        }
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Extra Chrome command-line arguments
    fn build_args(&self) -> Vec<String> {
        vec![
            "--no-first-run".to_string(),
            "--no-default-browser-check".to_string(),
            "--disable-dev-shm-usage".to_string(),
        ]
    }

    fn open_profile(&self) -> Result<ProfileManager> {
        match &self.profile {
            ProfileChoice::Temporary => ProfileManager::temporary(),
            ProfileChoice::Persistent(path) => ProfileManager::persistent(path.clone()),
        }
    }

    fn build_config(&self, profile: &ProfileManager) -> Result<BrowserConfig> {
        let (width, height) = Self::WINDOW;
        let mut builder = BrowserConfig::builder()
            .chrome_executable(&self.chrome_path)
            .user_data_dir(profile.path())
            .window_size(width, height)
            .viewport(Viewport {
                width,
                height,
                ..Viewport::default()
            })
            .args(self.build_args());

        if !self.headless {
            builder = builder.with_head();
        }

        builder
            .build()
            .map_err(|e| Error::Browser(format!("Invalid browser configuration: {}", e)))
    }

    async fn launch_session(&self) -> Result<ChromeSession> {
        let profile = self.open_profile()?;
        tracing::debug!(
            "Launching {} (profile: {}, headless: {})",
            self.chrome_path.display(),
            profile.path().display(),
            self.headless
        );

        let config = self.build_config(&profile)?;
        let (browser, handler) = Browser::launch(config)
            .await
            .map_err(|e| Error::Browser(format!("Failed to launch Chrome: {}", e)))?;

        tracing::info!("Chrome started");
        Ok(ChromeSession::start(browser, handler, profile, self.idle))
    }
}

#[async_trait]
impl SessionLauncher for ChromeLauncher {
    async fn launch(&self) -> dirsubmit_core::Result<Box<dyn BrowserSession>> {
        let session = self.launch_session().await?;
        Ok(Box::new(session))
    }
}

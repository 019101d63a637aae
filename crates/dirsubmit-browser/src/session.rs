use crate::page::{CdpPage, IdlePolicy};
use crate::profile::ProfileManager;
use crate::Result;
use async_trait::async_trait;
use chromiumoxide::browser::Browser;
use chromiumoxide::handler::Handler;
use dirsubmit_core::{BrowserSession, PageDriver};
use futures::StreamExt;
use tokio::task::JoinHandle;

/// A launched Chrome instance and the task pumping its CDP messages.
///
/// Dropping the session without `close()` aborts the handler; chromiumoxide
/// kills the child process when the `Browser` is dropped.
pub struct ChromeSession {
    // Field order matters: the browser must go before the profile directory.
    browser: Option<Browser>,
    handler_task: JoinHandle<()>,
    idle: IdlePolicy,
    _profile: ProfileManager,
}

impl ChromeSession {
    pub(crate) fn start(
        browser: Browser,
        mut handler: Handler,
        profile: ProfileManager,
        idle: IdlePolicy,
    ) -> Self {
        // The handler must be polled for any browser or page command to complete
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        Self {
            browser: Some(browser),
            handler_task,
            idle,
            _profile: profile,
        }
    }

    async fn shutdown(&mut self) -> Result<()> {
        if let Some(mut browser) = self.browser.take() {
            tracing::debug!("Closing Chrome");
            let closed = browser.close().await;
            let waited = browser.wait().await;
            self.handler_task.abort();
            closed?;
            waited?;
        }
        Ok(())
    }
}

#[async_trait]
impl BrowserSession for ChromeSession {
    async fn new_page(&mut self) -> dirsubmit_core::Result<Box<dyn PageDriver>> {
        let browser = self
            .browser
            .as_ref()
            .ok_or_else(|| crate::Error::Browser("Session already closed".to_string()))?;

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(crate::Error::from)?;
        Ok(Box::new(CdpPage::new(page, self.idle)))
    }

    async fn close(&mut self) -> dirsubmit_core::Result<()> {
        self.shutdown().await?;
        Ok(())
    }
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        if self.browser.is_some() {
            tracing::debug!("Chrome session dropped without close, killing browser");
        }
        self.handler_task.abort();
    }
}

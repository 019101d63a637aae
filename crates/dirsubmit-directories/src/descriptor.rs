use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Identity and entry points of a directory site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryDescriptor {
    pub key: String,
    pub name: String,
    pub base_url: String,
    /// Page holding the "add your project" form
    pub submit_url: String,
    /// Where to create an account when the form sits behind a login wall
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signup_url: Option<String>,
}

impl DirectoryDescriptor {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        base_url: impl Into<String>,
        submit_url: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            base_url: base_url.into(),
            submit_url: submit_url.into(),
            signup_url: None,
        }
    }

    pub fn with_signup(mut self, url: impl Into<String>) -> Self {
        self.signup_url = Some(url.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        dirsubmit_core::catalog::validate_key(&self.key)?;

        let urls = [Some(&self.base_url), Some(&self.submit_url), self.signup_url.as_ref()];
        for raw in urls.into_iter().flatten() {
            let parsed = Url::parse(raw).map_err(|e| Error::InvalidSite {
                key: self.key.clone(),
                reason: format!("invalid URL {}: {}", raw, e),
            })?;
            if parsed.scheme() != "https" && parsed.scheme() != "http" {
                return Err(Error::InvalidSite {
                    key: self.key.clone(),
                    reason: format!("unsupported URL scheme in {}", raw),
                });
            }
        }
        Ok(())
    }
}

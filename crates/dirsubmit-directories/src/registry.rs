use crate::sites::{ConfiguredSite, SiteDefinition};
use crate::{AlternativeTo, DevHunt, Error, IndieHackers, Result, SaaSHub, SubmissionStrategy};
use std::collections::HashSet;
use std::path::Path;

/// Ordered table of directories.
///
/// Definition order is the order real requests go out in, and therefore the
/// order results appear in logs and summaries.
pub struct Registry {
    strategies: Vec<Box<dyn SubmissionStrategy>>,
}

impl Registry {
    pub fn builtin() -> Self {
        Self {
            strategies: vec![
                Box::new(AlternativeTo::new()),
                Box::new(SaaSHub::new()),
                Box::new(DevHunt::new()),
                Box::new(IndieHackers::new()),
            ],
        }
    }

    pub fn from_strategies(strategies: Vec<Box<dyn SubmissionStrategy>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for strategy in &strategies {
            if !seen.insert(strategy.key().to_string()) {
                return Err(Error::DuplicateKey(strategy.key().to_string()));
            }
        }
        Ok(Self { strategies })
    }

    /// Parse a JSON array of site definitions
    pub fn from_sites_str(json: &str) -> Result<Self> {
        let definitions: Vec<SiteDefinition> = serde_json::from_str(json)?;
        let strategies = definitions
            .into_iter()
            .map(|d| ConfiguredSite::from_definition(d).map(|s| Box::new(s) as Box<dyn SubmissionStrategy>))
            .collect::<Result<Vec<_>>>()?;
        Self::from_strategies(strategies)
    }

    pub fn from_sites_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading site definitions from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_sites_str(&content)
    }

    pub fn get(&self, key: &str) -> Option<&dyn SubmissionStrategy> {
        self.strategies
            .iter()
            .find(|s| s.key() == key)
            .map(|s| s.as_ref())
    }

    /// One directory when `key` is given, otherwise all of them in order
    pub fn select(&self, key: Option<&str>) -> Result<Vec<&dyn SubmissionStrategy>> {
        match key {
            Some(key) => self
                .get(key)
                .map(|s| vec![s])
                .ok_or_else(|| Error::DirectoryNotFound {
                    key: key.to_string(),
                    available: self.keys().map(str::to_string).collect(),
                }),
            None => Ok(self.iter().collect()),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strategies.iter().map(|s| s.key())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn SubmissionStrategy> {
        self.strategies.iter().map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Manages Chrome profile directories.
///
/// A persistent profile keeps cookies between runs, so signing in to a
/// directory once removes its login wall for later submissions.
pub struct ProfileManager {
    path: PathBuf,
    is_temporary: bool,
}

impl ProfileManager {
    /// Create a temporary profile that will be deleted on drop
    pub fn temporary() -> Result<Self> {
        let temp_dir = tempfile::Builder::new().prefix("dirsubmit-").tempdir()?;

        Ok(Self {
            path: temp_dir.keep(),
            is_temporary: true,
        })
    }

    /// Create or use a persistent profile at the given path
    pub fn persistent(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(&path)?;
        }

        Ok(Self {
            path,
            is_temporary: false,
        })
    }

    /// Root of all named profiles: `~/.dirsubmit/profiles`
    pub fn profiles_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Browser("Could not determine home directory".to_string()))?;
        Ok(home.join(".dirsubmit").join("profiles"))
    }

    /// Directory of a named profile under [`ProfileManager::profiles_dir`]
    pub fn named_profile_path(name: &str) -> Result<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(Error::Browser(format!("Invalid profile name: {:?}", name)));
        }

        Ok(Self::profiles_dir()?.join(name))
    }

    /// Total size of the profile directory in bytes.
    ///
    /// Entries Chrome removes mid-walk are skipped.
    pub fn size(&self) -> Result<u64> {
        if !self.path.is_dir() {
            return Err(Error::Browser(format!(
                "Profile directory missing: {}",
                self.path.display()
            )));
        }

        Ok(WalkDir::new(&self.path)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| e.metadata().ok())
            .map(|m| m.len())
            .sum())
    }

    /// Get the profile directory path
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_temporary(&self) -> bool {
        self.is_temporary
    }
}

impl Drop for ProfileManager {
    fn drop(&mut self) {
        if self.is_temporary && self.path.exists() {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }
}

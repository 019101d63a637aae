//! Management of the persistent Chrome profiles used with `--profile`.
//!
//! A profile keeps directory logins between runs. Sign in once with
//! `dirsubmit --profile <name> --project <key>`, and later runs with the same
//! profile get past the login wall.

use anyhow::{Result, anyhow};
use dirsubmit_browser::ProfileManager;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ProfileEntry {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Profiles under the profile root, sorted by name
pub fn discover() -> Result<Vec<ProfileEntry>> {
    let profiles_dir = ProfileManager::profiles_dir()?;
    if !profiles_dir.exists() {
        return Ok(Vec::new());
    }

    let mut profiles = Vec::new();
    for entry in fs::read_dir(&profiles_dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow!("Invalid profile name"))?
            .to_string();
        let size_bytes = ProfileManager::persistent(path.clone())?.size().unwrap_or(0);

        profiles.push(ProfileEntry {
            name,
            path,
            size_bytes,
        });
    }

    profiles.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(profiles)
}

pub fn list() -> Result<()> {
    let profiles = discover()?;

    if profiles.is_empty() {
        println!(
            "No profiles found. Profiles will be created in: {}",
            ProfileManager::profiles_dir()?.display()
        );
        return Ok(());
    }

    println!("Available profiles:");
    println!();
    for profile in profiles {
        println!(
            "  {:<20} {:>8.1} MB    {}",
            profile.name,
            profile.size_bytes as f64 / 1_048_576.0,
            profile.path.display()
        );
    }

    Ok(())
}

pub fn delete(name: &str) -> Result<()> {
    let path = ProfileManager::named_profile_path(name)?;
    if !path.exists() {
        return Err(anyhow!("Profile '{}' not found", name));
    }

    fs::remove_dir_all(&path)?;
    println!("Deleted profile '{}' ({})", name, path.display());
    Ok(())
}

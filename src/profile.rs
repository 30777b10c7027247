//! Named application profiles persisted as JSON under the XDG data
//! directory. A profile records which plugins a host loads and which theme
//! it starts with; the workspace core itself never reads one implicitly.
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppProfile {
    pub name: String,
    pub plugins: Vec<String>,
    pub theme: String,
}

impl Default for AppProfile {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            plugins: Vec::new(),
            theme: "light-green".to_string(),
        }
    }
}

impl AppProfile {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write the profile as `<dir>/<name>.json`.
    pub fn save_in(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(format!("{}.json", self.name));
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        tracing::info!(profile = %self.name, path = %path.display(), "profile saved");
        Ok(path)
    }
}

/// The directory profiles live in, created on first use.
pub fn profile_dir() -> Result<PathBuf> {
    let base = xdg::BaseDirectories::with_prefix("tabworks")?;
    Ok(base.create_data_directory("profiles")?)
}

pub fn save_profile(profile: &AppProfile) -> Result<PathBuf> {
    profile.save_in(&profile_dir()?)
}

pub fn load_profile(name: &str) -> Result<AppProfile> {
    AppProfile::load(&profile_dir()?.join(format!("{name}.json")))
}

/// Every readable profile in `dir`, sorted by name. Files that fail to parse
/// are logged and skipped rather than failing the whole listing.
pub fn iter_profiles_in(dir: &Path) -> Vec<AppProfile> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut profiles: Vec<AppProfile> = entries
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
        .filter_map(|entry| match AppProfile::load(&entry.path()) {
            Ok(profile) => Some(profile),
            Err(err) => {
                tracing::warn!(path = %entry.path().display(), %err, "skipping bad profile");
                None
            }
        })
        .collect();
    profiles.sort_by(|a, b| a.name.cmp(&b.name));
    profiles
}

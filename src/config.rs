//! Settings load/save (JSON)

use crate::core::stats::PLACEHOLDER_ROOT;
use crate::error::{Result, VerbInfoError};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "verb_info.json";

pub const DEFAULT_SUBMISSION_URL: &str =
    "https://docs.google.com/document/d/1F3x4JV6eZ6Od3psyjmQwo_XPvpDZ-KHvO0ns7JEL5eI/edit?usp=sharing";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Lookup dataset: root, romanized, verb_forms, count_vf, frequency
    #[serde(default = "default_lookup_csv")]
    pub lookup_csv: PathBuf,
    /// Statistics dataset: root, romanized, root_length, frequency
    #[serde(default = "default_stats_csv")]
    pub stats_csv: PathBuf,
    /// Pre-parsed copy of both datasets, preferred over the CSVs when readable
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Root excluded from the "shortest" statistic
    #[serde(default = "default_placeholder_root")]
    pub placeholder_root: String,
    /// Where users can propose a missing verb; `null` hides the link
    #[serde(default = "default_submission_url")]
    pub submission_url: Option<String>,
}

fn default_lookup_csv() -> PathBuf {
    PathBuf::from("merged_verbs.csv")
}

fn default_stats_csv() -> PathBuf {
    PathBuf::from("output_with_root_length.csv")
}

fn default_submission_url() -> Option<String> {
    Some(DEFAULT_SUBMISSION_URL.to_string())
}

fn default_top_n() -> usize {
    20
}

fn default_placeholder_root() -> String {
    PLACEHOLDER_ROOT.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lookup_csv: default_lookup_csv(),
            stats_csv: default_stats_csv(),
            snapshot_path: None,
            top_n: default_top_n(),
            placeholder_root: default_placeholder_root(),
            submission_url: default_submission_url(),
        }
    }
}

/// Missing file or unparsable content both yield the defaults.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("ignoring malformed config {}: {}", path.display(), e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| VerbInfoError::Config(format!("cannot create {}: {}", parent.display(), e)))?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
        .map_err(|e| VerbInfoError::Config(format!("cannot write {}: {}", path.display(), e)))?;
    Ok(())
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LinkError;
use crate::links::{CourseHost, DEFAULT_BASE_URL};

/// Course site settings (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    /// Base URL of the Canvas site, e.g. `https://canvas.example.edu`.
    pub base_url: String,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/clipkit/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipkitConfig {
    /// Number of codes `clipkit code` prints when `-n` is not given.
    pub access_code_count: usize,
    pub course: CourseConfig,
}

impl Default for ClipkitConfig {
    fn default() -> Self {
        Self {
            access_code_count: 1,
            course: CourseConfig::default(),
        }
    }
}

impl ClipkitConfig {
    pub fn course_host(&self) -> Result<CourseHost, LinkError> {
        CourseHost::new(&self.course.base_url)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("clipkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ClipkitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ClipkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file. Missing keys take defaults.
pub fn load_from_path(path: &Path) -> Result<ClipkitConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ClipkitConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

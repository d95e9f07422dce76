//! Global configuration stored in `~/.toolbelt/config.toml`
//!
//! Every section and field is optional. A missing file loads as defaults,
//! so the tools behave exactly like their built-in layout until a user
//! opts into something else.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

// =============================================================================
// Config Types
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolbeltConfig {
    #[serde(default)]
    pub installer: InstallerSection,
    #[serde(default)]
    pub scaffold: ScaffoldSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallerSection {
    /// Destination for installed scripts, `~` is expanded
    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: String,
    /// Startup files relative to home, first existing one wins
    #[serde(default = "default_rc_files")]
    pub rc_files: Vec<String>,
    /// Also copy the running executable into `scripts_dir`
    #[serde(default)]
    pub self_install: bool,
    /// Copy the startup file to `~/.toolbelt/backups/` before appending
    #[serde(default)]
    pub backup_rc: bool,
}

fn default_scripts_dir() -> String {
    paths::shell::DEFAULT_SCRIPTS_DIR.to_string()
}

fn default_rc_files() -> Vec<String> {
    paths::shell::DEFAULT_RC_FILES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for InstallerSection {
    fn default() -> Self {
        Self {
            scripts_dir: default_scripts_dir(),
            rc_files: default_rc_files(),
            self_install: false,
            backup_rc: false,
        }
    }
}

impl InstallerSection {
    /// `scripts_dir` with `~` and environment variables expanded
    pub fn resolved_scripts_dir(&self) -> PathBuf {
        expand(&self.scripts_dir)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldSection {
    /// Directory new projects are created in
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
}

fn default_base_dir() -> String {
    ".".to_string()
}

impl Default for ScaffoldSection {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
        }
    }
}

impl ScaffoldSection {
    pub fn resolved_base_dir(&self) -> PathBuf {
        expand(&self.base_dir)
    }
}

/// Expand `~` and `$VARS`; falls back to tilde-only expansion when a
/// variable is undefined.
pub fn expand(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
    }
}

// =============================================================================
// Load/Save
// =============================================================================

/// Load config from `~/.toolbelt/config.toml`
pub fn load() -> Result<ToolbeltConfig> {
    load_from(&paths::config_path())
}

/// Load config from an explicit path, returning defaults if it doesn't exist
pub fn load_from(path: &Path) -> Result<ToolbeltConfig> {
    if !path.exists() {
        return Ok(ToolbeltConfig::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}

/// Save config to an explicit path, creating parent directories
pub fn save_to(path: &Path, config: &ToolbeltConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    Ok(())
}

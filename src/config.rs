use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::DEFAULT_DESCRIPTOR_FILE;
use crate::error::{BumpError, Result};
use crate::git::system::DEFAULT_GIT_PROGRAM;

/// Per-repository configuration file name
pub const CONFIG_FILE: &str = "bump.toml";

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV: &str = "BUMP_CONFIG";

/// Represents the complete configuration for bump.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Project descriptor path, relative to the repository root
    #[serde(default = "default_descriptor")]
    pub descriptor: PathBuf,

    #[serde(default)]
    pub git: GitConfig,
}

fn default_descriptor() -> PathBuf {
    PathBuf::from(DEFAULT_DESCRIPTOR_FILE)
}

fn default_git_program() -> String {
    DEFAULT_GIT_PROGRAM.to_string()
}

/// How git is invoked for the release commit.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_git_program")]
    pub program: String,

    #[serde(default)]
    pub stage: StageMode,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            program: default_git_program(),
            stage: StageMode::default(),
        }
    }
}

/// Which changes end up in the release commit
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StageMode {
    /// Only the descriptor and the `replaceVersion` files
    #[default]
    Touched,
    /// Everything pending in the working tree (`git add .`)
    All,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            descriptor: default_descriptor(),
            git: GitConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Explicit path (from `BUMP_CONFIG`)
/// 2. `bump.toml` in the repository root
/// 3. `bump/config.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or an explicit
///   path does not exist
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let local = root.join(CONFIG_FILE);
    if local.is_file() {
        return read_config(&local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join("bump").join("config.toml");
        if user.is_file() {
            return read_config(&user);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let source = fs::read_to_string(path)
        .map_err(|e| BumpError::config(format!("cannot read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&source).map_err(|e| {
        BumpError::config(format!(
            "cannot parse {}: {}",
            path.display(),
            e.message()
        ))
    })?;

    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

//! Project configuration loaded from `.wooper/config.toml`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use wooper_store_file::DEFAULT_SAVE_PATH;

const CONFIG_DIR: &str = ".wooper";
const CONFIG_FILE: &str = "config.toml";

/// Top-level project configuration loaded from `.wooper/config.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Where the task list is saved.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl ProjectConfig {
    /// Load configuration from `workdir`, falling back to defaults when no
    /// config file exists.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or fails validation.
    pub fn from_workdir(workdir: impl AsRef<Path>) -> Result<Self> {
        let config_path = Self::path_in(workdir);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Location of the config file for `workdir`.
    #[must_use]
    pub fn path_in(workdir: impl AsRef<Path>) -> PathBuf {
        workdir.as_ref().join(CONFIG_DIR).join(CONFIG_FILE)
    }

    fn validate(&self) -> Result<()> {
        self.storage.ensure_path()
    }
}

/// Storage configuration block.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_save_path")]
    path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_save_path(),
        }
    }
}

fn default_save_path() -> PathBuf {
    PathBuf::from(DEFAULT_SAVE_PATH)
}

impl StorageConfig {
    /// Save file path as configured, possibly relative.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save file path with relative paths resolved against `workdir`.
    #[must_use]
    pub fn resolve(&self, workdir: impl AsRef<Path>) -> PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            workdir.as_ref().join(&self.path)
        }
    }

    fn ensure_path(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            bail!("storage path must not be empty");
        }
        Ok(())
    }
}

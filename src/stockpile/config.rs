use crate::error::{InventoryError, Result};
use crate::model::Scope;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PRODUCTS_FILE: &str = "products.csv";
const DEFAULT_DEFAULTS_FILE: &str = "products_default.csv";
const PROJECT_DATA_DIR: &str = "db";

/// Configuration for a data directory, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Live products file, relative to the data directory
    #[serde(default = "default_products_file")]
    pub products_file: String,

    /// Factory defaults used by reset, relative to the data directory
    #[serde(default = "default_defaults_file")]
    pub defaults_file: String,
}

fn default_products_file() -> String {
    DEFAULT_PRODUCTS_FILE.to_string()
}

fn default_defaults_file() -> String {
    DEFAULT_DEFAULTS_FILE.to_string()
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            products_file: default_products_file(),
            defaults_file: default_defaults_file(),
        }
    }
}

impl InventoryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let config_path = data_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(InventoryError::Io)?;
        let config: InventoryConfig =
            serde_json::from_str(&content).map_err(InventoryError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, data_dir: P) -> Result<()> {
        let data_dir = data_dir.as_ref();

        if !data_dir.exists() {
            fs::create_dir_all(data_dir).map_err(InventoryError::Io)?;
        }

        let config_path = data_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(InventoryError::Serialization)?;
        fs::write(config_path, content).map_err(InventoryError::Io)?;
        Ok(())
    }

    pub fn products_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.products_file)
    }

    pub fn defaults_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.defaults_file)
    }
}

/// Data directory for a scope: `./db` for the project, the per-user data dir for global.
pub fn scope_dir(scope: Scope, cwd: &Path) -> Result<PathBuf> {
    match scope {
        Scope::Project => Ok(cwd.join(PROJECT_DATA_DIR)),
        Scope::Global => ProjectDirs::from("com", "stockpile", "stockpile")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                InventoryError::Config("Could not determine the user data directory".to_string())
            }),
    }
}

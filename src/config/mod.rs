// ABOUTME: Registry configuration and parsing for compkit.yml.
// ABOUTME: Handles YAML parsing and discovery of the config file in a directory.

mod linearization;
mod name_policy;

pub use linearization::Linearization;
pub use name_policy::NamePolicy;

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "compkit.yml";
pub const CONFIG_FILENAME_ALT: &str = "compkit.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".compkit/config.yml";

/// Settings a [`Registry`](crate::Registry) applies to every type it defines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    pub linearization: Linearization,

    #[serde(rename = "attribute-names")]
    pub attribute_names: NamePolicy,
}

impl RegistryConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!("Loading registry config from {}", path.display());
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }
}

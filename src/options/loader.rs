//! Loading options from a configuration file

use super::types::{PartialViewEngineOptions, ViewEngineOptions};
use crate::constants::CONFIG_FILENAMES;
use crate::error::{Error, Result};
use log::debug;
use std::path::Path;

impl PartialViewEngineOptions {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

impl ViewEngineOptions {
    /// Loads options from the first configuration file found in `config_dir`.
    ///
    /// Files are tried in the order of [`CONFIG_FILENAMES`]. Fields missing
    /// from the file keep their defaults.
    ///
    /// # Returns
    /// * `Result<ViewEngineOptions>` - Defaults merged with the file contents
    pub fn load_config<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = config_dir.join(config_file_name);

            if config_file_path.exists() {
                debug!("Loading view engine options from '{}'.", config_file_path.display());
                let content = std::fs::read_to_string(&config_file_path)?;
                let options = if config_file_name.ends_with(".json") {
                    PartialViewEngineOptions::from_json_str(&content)?
                } else {
                    PartialViewEngineOptions::from_yaml_str(&content)?
                };

                return Ok(Self::with_defaults(Some(&options)));
            }
        }

        Err(Error::ConfigNotFound {
            config_dir: config_dir.display().to_string(),
            config_files: CONFIG_FILENAMES.join(", "),
        })
    }
}

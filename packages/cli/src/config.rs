use blueprint_converter::ConvertOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "blueprint.config.json";

/// Blueprint configuration file format
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory receiving `*.blueprint.json` files; defaults to next to each snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,

    /// Converter overrides
    #[serde(default)]
    pub convert_options: ConvertOptions,
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Absolute output directory, if one is configured
    pub fn get_out_dir(&self, cwd: &str) -> Option<PathBuf> {
        self.out_dir.as_ref().map(|dir| PathBuf::from(cwd).join(dir))
    }
}

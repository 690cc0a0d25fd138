use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for git-bump.
///
/// Contains the manifest location and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default manifest path.
fn default_manifest_path() -> String {
    "package.json".to_string()
}

/// Configuration for the manifest file location.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_path")]
    pub path: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        ManifestConfig {
            path: default_manifest_path(),
        }
    }
}

/// Configuration for behavior customization.
///
/// Controls runtime behavior of git-bump without affecting bump analysis.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub dry_run: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitbump.toml` in current directory
/// 3. `~/.config/.gitbump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitbump.toml").exists() {
        fs::read_to_string("./gitbump.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitbump.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

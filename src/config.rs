use std::path::{Path, PathBuf};

use anyhow::Context;

use serde::{Deserialize, Serialize};

/// Name of the configuration file in the user's home directory
pub const CONFIG_FILE_NAME: &str = ".picotools.toml";

/// On-disk TOML configuration (`$HOME/.picotools.toml`).
///
/// # Example
///
/// ```toml
/// pico-sdk = "/home/user/pico-sdk"
/// ```
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the Pico SDK registered with `picotools attach-sdk`
    #[serde(rename = "pico-sdk", skip_serializing_if = "Option::is_none")]
    pub pico_sdk: Option<PathBuf>,
}

impl Config {
    /// Returns the path of the configuration file for the current user
    pub fn path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to locate the home directory")?;

        Ok(home.join(CONFIG_FILE_NAME))
    }

    /// Loads the configuration for the current user, defaulting to an empty
    /// configuration when no file exists yet
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read `{}`", path.display()));
            }
        };

        toml::from_str(&contents).with_context(|| format!("Failed to parse `{}`", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self).context("Failed to encode the configuration")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write `{}`", path.display()))
    }
}

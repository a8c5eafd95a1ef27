//! Application configuration.

use crate::consts::cli_consts::{CONFIG_DIR_NAME, DEFAULT_API_URL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, path::Path};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the backend, e.g. `https://kyc.example.org`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Bearer token issued by the backend's login endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Config {
    /// Create Config with the given backend URL and token.
    #[cfg(test)]
    pub fn new(api_url: Option<String>, token: Option<String>) -> Self {
        Config { api_url, token }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Like [`Config::load_from_file`], but a missing file is an empty config.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from_file(path)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    /// The file holds a bearer token, so on unix it is readable by the owner only.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        write_private(path, json.as_bytes())
    }

    /// Removes the config file, if present.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }

    /// Resolves connection settings: flag (or its environment variable), then
    /// this file, then defaults. Blank values count as unset.
    pub fn resolve(&self, api_url_flag: Option<String>, token_flag: Option<String>) -> ResolvedConfig {
        let set = |v: &String| !v.trim().is_empty();
        ResolvedConfig {
            api_url: api_url_flag
                .filter(set)
                .or_else(|| self.api_url.clone().filter(set))
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token: token_flag
                .filter(set)
                .or_else(|| self.token.clone().filter(set)),
        }
    }
}

/// Settings actually used to build the backend client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_url: String,
    pub token: Option<String>,
}

/// `~/.kyc-console`, holding the config file and the TUI log.
#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> Result<(), std::io::Error> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // `mode` only applies on creation; tighten files left by older versions.
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> Result<(), std::io::Error> {
    fs::write(path, contents)
}

pub fn get_config_dir() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine the home directory",
        )
    })?;
    Ok(home.join(CONFIG_DIR_NAME))
}

pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    Ok(get_config_dir()?.join("config.json"))
}

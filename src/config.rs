use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ShipnoteError};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "shipnote.toml";

/// Represents the complete configuration for shipnote.
///
/// Contains the release document locations, the environment propagation
/// settings and the HTTP scaffold settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub env: EnvConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

fn default_manifest() -> PathBuf {
    PathBuf::from("deno.json")
}

fn default_changelog() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

fn default_release_notes() -> PathBuf {
    PathBuf::from("RELEASE_NOTES.md")
}

fn default_env_file() -> PathBuf {
    PathBuf::from(".env")
}

/// Locations of the documents a release reads and writes.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilesConfig {
    /// JSON document holding the current `version`
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    #[serde(default = "default_changelog")]
    pub changelog: PathBuf,

    #[serde(default = "default_release_notes")]
    pub release_notes: PathBuf,

    /// Local file receiving `NEW_VERSION=...`
    #[serde(default = "default_env_file")]
    pub env_file: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            manifest: default_manifest(),
            changelog: default_changelog(),
            release_notes: default_release_notes(),
            env_file: default_env_file(),
        }
    }
}

fn default_github_env_var() -> String {
    "GITHUB_ENV".to_string()
}

/// Configuration for build-environment propagation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EnvConfig {
    /// Name of the variable that may point at a CI environment file
    #[serde(default = "default_github_env_var")]
    pub github_env_var: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            github_env_var: default_github_env_var(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_compression_min_bytes() -> usize {
    1024
}

fn default_cors_origin() -> String {
    "*".to_string()
}

fn default_cors_methods() -> Vec<String> {
    ["GET", "HEAD", "PUT", "POST", "DELETE", "PATCH"]
        .iter()
        .map(|m| m.to_string())
        .collect()
}

/// Configuration for the HTTP scaffold.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Responses smaller than this are sent uncompressed
    #[serde(default = "default_compression_min_bytes")]
    pub compression_min_bytes: usize,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,

    #[serde(default = "default_cors_methods")]
    pub cors_methods: Vec<String>,

    #[serde(default)]
    pub cors_max_age: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
            compression_min_bytes: default_compression_min_bytes(),
            cors_origin: default_cors_origin(),
            cors_methods: default_cors_methods(),
            cors_max_age: None,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `shipnote.toml` in current directory
/// 3. `shipnote.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => match discover_config() {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };

    let config_str = fs::read_to_string(&path).map_err(|e| ShipnoteError::io(&path, e))?;
    toml::from_str(&config_str)
        .map_err(|e| ShipnoteError::config(format!("{}: {}", path.display(), e)))
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join(CONFIG_FILE_NAME);
    user.exists().then_some(user)
}

//! Configuration management for the scrobble submission CLI.
//!
//! This module handles loading and accessing configuration values from the
//! INI-style `config` file in the user's configuration directory, with
//! environment variables layered on top. It provides a centralized way to
//! manage the Last.fm API credentials and the account name scrobbles are
//! submitted for.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `config` file in the configuration directory
//! 3. `.env` file in the configuration directory (loaded into the environment
//!    at startup)

use std::{collections::HashMap, env, path::PathBuf};

/// Errors raised while locating, reading or parsing the configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    /// A non-blank line that is neither a section header nor a `key = value`
    /// pair, reported with its 1-based line number.
    Malformed { line: usize, content: String },
    /// A required key is absent from both the environment and the file.
    MissingKey { section: &'static str, key: &'static str },
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "cannot read configuration: {}", e),
            ConfigError::Malformed { line, content } => {
                write!(f, "malformed configuration line {}: {}", line, content)
            }
            ConfigError::MissingKey { section, key } => {
                write!(f, "missing configuration value [{}] {}", section, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Application configuration, loaded once and immutable afterwards.
///
/// Carries the Last.fm account name and the API key/secret pair issued for
/// this application. The secret never appears in any request; it is only
/// fed into the request signature.
#[derive(Debug, Clone)]
pub struct Config {
    pub user: String,
    pub api_key: String,
    pub api_secret: String,
}

impl Config {
    /// Loads the configuration from `<dir>/config`, with environment
    /// variables taking priority over file values.
    ///
    /// `dir` defaults to [`config_dir`]; tests pass a temporary directory
    /// instead. The file may be absent entirely when all required values are
    /// provided through the environment (`SCROBLCLI_USER`, `LASTFM_API_KEY`,
    /// `LASTFM_API_SECRET`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] for an unparsable file and
    /// [`ConfigError::MissingKey`] naming the first value that could not be
    /// resolved from either source.
    pub async fn load(dir: Option<PathBuf>) -> Result<Config, ConfigError> {
        let dir = dir.unwrap_or_else(config_dir);
        let path = dir.join("config");

        let sections = if path.is_file() {
            let content = async_fs::read_to_string(&path).await?;
            parse_sections(&content)?
        } else {
            HashMap::new()
        };

        Ok(Config {
            user: resolve(&sections, "core", "user", "SCROBLCLI_USER")?,
            api_key: resolve(&sections, "api", "key", "LASTFM_API_KEY")?,
            api_secret: resolve(&sections, "api", "secret", "LASTFM_API_SECRET")?,
        })
    }
}

/// Parses INI-style content into a section → key → value mapping.
///
/// Section headers are bracketed names (`[core]`), entries are `key = value`
/// pairs. Blank lines and lines starting with `#` or `;` are ignored. Keys
/// appearing before any section header land in the unnamed section `""`.
pub fn parse_sections(
    content: &str,
) -> Result<HashMap<String, HashMap<String, String>>, ConfigError> {
    let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut current = String::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            current = line[1..line.len() - 1].trim().to_string();
            sections.entry(current.clone()).or_default();
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) => {
                sections
                    .entry(current.clone())
                    .or_default()
                    .insert(key.trim().to_string(), value.trim().to_string());
            }
            None => {
                return Err(ConfigError::Malformed {
                    line: idx + 1,
                    content: line.to_string(),
                });
            }
        }
    }

    Ok(sections)
}

fn resolve(
    sections: &HashMap<String, HashMap<String, String>>,
    section: &'static str,
    key: &'static str,
    env_var: &str,
) -> Result<String, ConfigError> {
    if let Ok(value) = env::var(env_var) {
        if !value.is_empty() {
            return Ok(value);
        }
    }

    sections
        .get(section)
        .and_then(|entries| entries.get(key))
        .filter(|value| !value.is_empty())
        .cloned()
        .ok_or(ConfigError::MissingKey { section, key })
}

/// Loads environment variables from an optional `.env` file in the
/// configuration directory.
///
/// Creates the directory structure if it doesn't exist. A missing `.env`
/// file is fine; values already present in the environment are left alone.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.config/scroblcli/.env`
/// - macOS: `~/Library/Application Support/scroblcli/.env`
/// - Windows: `%APPDATA%/scroblcli/.env`
pub async fn load_env() -> Result<(), String> {
    let path = config_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the default configuration directory for this application.
pub fn config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("scroblcli");
    path
}

/// Returns the default cache directory, home of the per-user session files.
pub fn cache_dir() -> PathBuf {
    let mut path = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("scroblcli");
    path
}

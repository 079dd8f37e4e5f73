use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for cinelog.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (CINE_* prefix)
/// 3. Config file (~/.config/cinelog/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OMDb API key (required for adding movies).
    ///
    /// Can be set via:
    /// - ENV: CINE_OMDB_API_KEY
    /// - Config: omdb_api_key = "..."
    pub omdb_api_key: Option<String>,

    /// Path to the SQLite database.
    ///
    /// Can be set via:
    /// - CLI: --db /path/to/db
    /// - ENV: CINE_DATABASE_PATH
    /// - Config: database_path = "/path/to/db"
    /// - Default: ~/.local/share/cinelog/cinelog.db
    #[serde(default = "default_db_path")]
    pub database_path: PathBuf,

    /// Directory the generated website is written to.
    ///
    /// Can be set via:
    /// - CLI: cinelog website --out /path
    /// - ENV: CINE_WEBSITE_DIR
    /// - Config: website_dir = "/path"
    /// - Default: ~/.local/share/cinelog/site
    #[serde(default = "default_website_dir")]
    pub website_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            omdb_api_key: None,
            database_path: default_db_path(),
            website_dir: default_website_dir(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/cinelog/config.toml
    /// Reads environment variables with CINE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        // If config file exists, load it
        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        // Set up environment variable scanning with CINE_ prefix
        let env_opts = env::Options::with_top_level("cine");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with custom database path.
    ///
    /// This is used when the --db CLI flag is provided.
    pub fn load_with_db_path(db_path: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.database_path = db_path;
        Ok(config)
    }
}

/// Get the default database path.
///
/// Returns: ~/.local/share/cinelog/cinelog.db (or platform equivalent)
fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cinelog")
        .join("cinelog.db")
}

/// Get the default website output directory.
fn default_website_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cinelog")
        .join("site")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/cinelog/config.toml
/// - macOS: ~/Library/Application Support/cinelog/config.toml
/// - Windows: %APPDATA%\cinelog\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cinelog")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Cinelog Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (CINE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# OMDb API key, required for adding movies
#
# Register for a free API key at: https://www.omdbapi.com/apikey.aspx
#
# Can also be set via:
# - Environment: CINE_OMDB_API_KEY=your-key-here
omdb_api_key = "your-omdb-api-key-here"

# Path to the SQLite database
#
# Can also be set via:
# - CLI: cinelog --db /custom/path.db list
# - Environment: CINE_DATABASE_PATH=/custom/path.db
#
# Default: Platform-specific data directory
#database_path = "/path/to/custom/cinelog.db"

# Directory the generated website is written to
#
# Can also be set via:
# - CLI: cinelog website --out /custom/site
# - Environment: CINE_WEBSITE_DIR=/custom/site
#
# Default: Platform-specific data directory
#website_dir = "/path/to/site"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    // Create parent directory
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    // Write default config
    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.database_path.as_os_str().is_empty());
        assert!(config.omdb_api_key.is_none());
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_with_custom_db_path() {
        let custom_path = PathBuf::from("/tmp/test.db");
        let config = Config::load_with_db_path(custom_path.clone());
        assert!(config.is_ok());
        assert_eq!(config.unwrap().database_path, custom_path);
    }
}

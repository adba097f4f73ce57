//! Configuration module for the example server.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `EXEMPLAR_` and use double
//! underscores to separate nested levels:
//! - `EXEMPLAR_SERVER__PORT=9000` sets `server.port`
//! - `EXEMPLAR_PROVIDERS__TIMEOUT_SECS=10` sets `providers.timeout_secs`
//! - `EXEMPLAR_DEBUG=true` sets `debug`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Directory holding the settings file
pub const CONFIG_DIR: &str = ".exemplar";
pub const CONFIG_FILE: &str = "settings.toml";
pub const ENV_PREFIX: &str = "EXEMPLAR_";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Verbose request logging
    #[serde(default)]
    pub debug: bool,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Documentation providers
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    /// Interface to listen on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum request body size in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,

    /// Allow cross-origin requests
    #[serde(default = "default_true")]
    pub cors: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    /// Seconds to wait for a documentation tool, 0 waits forever
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Provider per language key
    #[serde(default = "default_languages")]
    pub languages: BTreeMap<String, ProviderConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Whether lookups for this language are served
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Executable to run
    pub command: String,

    /// Arguments placed before the package segments and the symbol
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Default level: error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target overrides, e.g. `provider = "debug"`
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

fn default_version() -> u32 {
    1
}
fn default_bind() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8844
}
fn default_body_limit() -> usize {
    10 * 1024 * 1024
}
fn default_true() -> bool {
    true
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_languages() -> BTreeMap<String, ProviderConfig> {
    let mut langs = BTreeMap::new();
    langs.insert(
        crate::provider::go::LANGUAGE.to_string(),
        ProviderConfig {
            enabled: true,
            command: crate::provider::go::GODOC_COMMAND.to_string(),
            args: crate::provider::go::GODOC_ARGS
                .iter()
                .map(|a| a.to_string())
                .collect(),
        },
    );
    langs
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            debug: false,
            server: ServerConfig::default(),
            providers: ProvidersConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            body_limit: default_body_limit(),
            cors: true,
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            languages: default_languages(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: BTreeMap::new(),
        }
    }
}

impl ServerConfig {
    /// `bind:port` socket address string.
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));
        Self::load_from(config_path)
    }

    /// Load configuration from a specific file, still honoring env overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            // Double underscore separates nested levels, single underscore
            // stays inside field names
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            .extract()
            .map_err(Box::new)
    }

    /// Find `.exemplar/settings.toml` searching from the current directory up
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        for ancestor in current.ancestors() {
            let config_dir = ancestor.join(CONFIG_DIR);
            if config_dir.is_dir() {
                return Some(config_dir.join(CONFIG_FILE));
            }
        }

        None
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Create a default settings file in the current directory
    pub fn init_config_file(force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        Self::init_config_in(Path::new("."), force)
    }

    /// Create a default settings file under `root`, refusing to overwrite
    /// an existing one unless `force` is set.
    pub fn init_config_in(
        root: &Path,
        force: bool,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = root.join(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err(format!(
                "Configuration file already exists at {}. Use --force to overwrite",
                config_path.display()
            )
            .into());
        }

        Settings::default().save(&config_path)?;
        Ok(config_path)
    }

    /// Logging config with the debug flag folded in.
    pub fn effective_logging(&self) -> LoggingConfig {
        let mut logging = self.logging.clone();
        if self.debug {
            logging
                .modules
                .insert(env!("CARGO_CRATE_NAME").to_string(), "debug".to_string());
        }
        logging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.version, 1);
        assert_eq!(settings.server.port, 8844);
        assert_eq!(settings.server.body_limit, 10 * 1024 * 1024);
        assert!(settings.server.cors);
        assert!(!settings.debug);
        assert_eq!(settings.providers.timeout_secs, 30);
        let go = &settings.providers.languages["go"];
        assert!(go.enabled);
        assert_eq!(go.command, "godoc");
        assert_eq!(go.args, vec!["-ex"]);
    }

    #[test]
    fn test_load_from_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");

        let toml_content = r#"
debug = true

[server]
port = 9090

[providers]
timeout_secs = 5

[providers.languages.python]
command = "pydoc3"
"#;

        fs::write(&config_path, toml_content).unwrap();

        let settings = Settings::load_from(&config_path).unwrap();
        assert!(settings.debug);
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.bind, "0.0.0.0");
        assert_eq!(settings.providers.timeout_secs, 5);
        // Table merge keeps the default go provider
        assert!(settings.providers.languages.contains_key("go"));
        let python = &settings.providers.languages["python"];
        assert!(python.enabled);
        assert_eq!(python.command, "pydoc3");
        assert!(python.args.is_empty());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from(temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings.server.port, 8844);
    }

    #[test]
    fn test_save_settings() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.server.port = 9999;
        settings.providers.timeout_secs = 0;

        settings.save(&config_path).unwrap();

        let loaded = Settings::load_from(&config_path).unwrap();
        assert_eq!(loaded.server.port, 9999);
        assert_eq!(loaded.providers.timeout_secs, 0);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = Settings::init_config_in(temp_dir.path(), false).unwrap();
        assert!(path.ends_with(".exemplar/settings.toml"));

        fs::write(&path, "debug = true\n").unwrap();
        let err = Settings::init_config_in(temp_dir.path(), false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "debug = true\n");

        Settings::init_config_in(temp_dir.path(), true).unwrap();
        assert!(!Settings::load_from(&path).unwrap().debug);
    }

    #[test]
    fn test_effective_logging() {
        let mut settings = Settings::default();
        assert!(settings.effective_logging().modules.is_empty());
        settings.debug = true;
        let logging = settings.effective_logging();
        assert_eq!(logging.default, "warn");
        assert_eq!(logging.modules["exemplar"], "debug");
    }

    #[test]
    fn test_address() {
        let server = ServerConfig::default();
        assert_eq!(server.address(), "0.0.0.0:8844");
    }
}

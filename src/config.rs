use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::GraphError;
use crate::parse::{BuildOptions, Direction, DuplicatePolicy, DEFAULT_MAX_NAME_LEN};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "REACHGRAPH_CONFIG";

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "reachgraph.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// File the values came from; `None` when built-in defaults apply
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// How graph descriptions are turned into graphs
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default = "default_max_name_len")]
    pub max_name_len: usize,
    #[serde(default)]
    pub max_nodes: Option<usize>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::default(),
            direction: Direction::default(),
            max_name_len: default_max_name_len(),
            max_nodes: None,
        }
    }
}

fn default_max_name_len() -> usize {
    DEFAULT_MAX_NAME_LEN
}

/// Interactive session settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryConfig {
    /// Print the route when a path exists
    #[serde(default)]
    pub show_path: bool,
    /// Replaces the default prompt text
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration
    ///
    /// Loads environment variables from .env file (if present) first, then:
    /// 1. `explicit` path, if given (must exist)
    /// 2. Path in the REACHGRAPH_CONFIG environment variable (must exist)
    /// 3. ./reachgraph.toml, if present
    /// 4. Built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let _ = dotenv::dotenv();

        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from))
            .or_else(|| {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                default_path.is_file().then_some(default_path)
            });

        let config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.source = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.graph.max_name_len == 0 {
            return Err(GraphError::Config(
                "graph.max_name_len must be greater than 0".to_string(),
            ));
        }

        if self.graph.max_nodes == Some(0) {
            return Err(GraphError::Config(
                "graph.max_nodes must be greater than 0 when set".to_string(),
            ));
        }

        if self.logging.log_level.trim().is_empty() {
            return Err(GraphError::Config(
                "logging.log_level must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Log where the configuration came from. Call once the logger is up.
    pub fn log_source(&self) {
        match &self.source {
            Some(path) => log::debug!("Configuration loaded from {}", path.display()),
            None => log::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE),
        }
    }

    /// Parser settings derived from the [graph] section
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            duplicates: self.graph.duplicates,
            direction: self.graph.direction,
            max_name_len: self.graph.max_name_len,
            max_nodes: self.graph.max_nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serialize tests that touch the process-wide environment.
    static CONFIG_TEST_LOCK: Mutex<()> = Mutex::new(());

    const FULL_CONFIG: &str = r#"
[graph]
duplicates = "keep"
direction = "undirected"
max_name_len = 20
max_nodes = 500

[query]
show_path = true
prompt = "route> "

[logging]
log_level = "debug"
"#;

    #[test]
    fn test_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("reachgraph.toml");
        fs::write(&config_path, FULL_CONFIG).unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.source.as_deref(), Some(config_path.as_path()));
        assert_eq!(config.graph.duplicates, DuplicatePolicy::Keep);
        assert_eq!(config.graph.direction, Direction::Undirected);
        assert_eq!(config.graph.max_name_len, 20);
        assert_eq!(config.graph.max_nodes, Some(500));
        assert!(config.query.show_path);
        assert_eq!(config.query.prompt.as_deref(), Some("route> "));
        assert_eq!(config.logging.log_level, "debug");
    }

    #[test]
    fn test_config_defaults_for_missing_sections() {
        let config: Config = toml::from_str("[query]\nshow_path = true\n").unwrap();
        assert_eq!(config.graph.duplicates, DuplicatePolicy::Merge);
        assert_eq!(config.graph.direction, Direction::Directed);
        assert_eq!(config.graph.max_name_len, 40);
        assert_eq!(config.logging.log_level, "warn");
        assert_eq!(config.build_options(), BuildOptions::default());
        assert!(config.source.is_none());
    }

    #[test]
    fn test_config_rejects_unknown_policy() {
        let parsed: std::result::Result<Config, _> =
            toml::from_str("[graph]\nduplicates = \"sometimes\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = Config::default();
        config.graph.max_name_len = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GraphError::Config(ref msg) if msg.contains("max_name_len")));

        let mut config = Config::default();
        config.graph.max_nodes = Some(0);
        assert!(matches!(config.validate(), Err(GraphError::Config(_))));

        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_load_explicit_path() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.toml");
        fs::write(&config_path, FULL_CONFIG).unwrap();

        let config = Config::load(Some(&config_path)).unwrap();
        assert_eq!(config.source.as_deref(), Some(config_path.as_path()));
        let options = config.build_options();
        assert_eq!(options.duplicates, DuplicatePolicy::Keep);
        assert_eq!(options.max_nodes, Some(500));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load(Some(&temp_dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_load_rejects_invalid_values_from_file() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.toml");
        fs::write(&config_path, "[graph]\nmax_name_len = 0\n").unwrap();

        let err = Config::load(Some(&config_path)).unwrap_err();
        assert!(matches!(err.downcast_ref::<GraphError>(), Some(GraphError::Config(_))));
    }

    #[test]
    fn test_load_from_env_var() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("env.toml");
        fs::write(&config_path, "[graph]\nmax_name_len = 8\n").unwrap();

        let original = std::env::var(CONFIG_ENV).ok();
        std::env::set_var(CONFIG_ENV, config_path.to_str().unwrap());
        let config = Config::load(None);
        std::env::remove_var(CONFIG_ENV);
        if let Some(v) = original {
            std::env::set_var(CONFIG_ENV, v);
        }
        assert_eq!(config.unwrap().graph.max_name_len, 8);
    }
}

//! Application configuration for Gander.
//!
//! User config lives at `~/.gander/gander.toml`.
//! CLI flags (and their env vars) override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GanderError, Result};
use crate::types::Budgets;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "gander.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".gander";

// ---------------------------------------------------------------------------
// Config structs (matching gander.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Model identifier recorded in the payload.
    #[serde(default = "default_model")]
    pub model: String,

    /// Hard cap on web searches.
    #[serde(default)]
    pub max_searches: i64,

    /// Hard cap on sources included.
    #[serde(default)]
    pub max_sources: i64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_searches: 0,
            max_sources: 0,
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".into()
}

// ---------------------------------------------------------------------------
// Run config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime configuration for one invocation, merged from config file + CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Brand name, used to detect mentions.
    pub brand: String,
    /// Brand's canonical site URL; its host defines ownership.
    pub brand_url: String,
    /// End-user question to answer.
    pub question: String,
    /// Model identifier.
    pub model: String,
    /// Search and source caps.
    pub budgets: Budgets,
}

impl RunConfig {
    /// Build a run config from the required inputs, taking every optional
    /// setting from the loaded config.
    pub fn new(
        config: &AppConfig,
        brand: impl Into<String>,
        brand_url: impl Into<String>,
        question: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            brand_url: brand_url.into(),
            question: question.into(),
            model: config.defaults.model.clone(),
            budgets: Budgets {
                max_searches: config.defaults.max_searches,
                max_sources: config.defaults.max_sources,
            },
        }
    }

    /// Override the model when a flag supplied one.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model {
            self.model = model;
        }
        self
    }

    /// Override either budget when a flag supplied it.
    pub fn with_budgets(mut self, max_searches: Option<i64>, max_sources: Option<i64>) -> Self {
        if let Some(n) = max_searches {
            self.budgets.max_searches = n;
        }
        if let Some(n) = max_sources {
            self.budgets.max_sources = n;
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.gander/`).
pub fn config_dir() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| GanderError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.gander/gander.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| GanderError::io(path, e))?;

    let config = toml::from_str(&content)
        .map_err(|e| GanderError::config(format!("failed to parse {}: {e}", path.display())))?;
    tracing::debug!(?path, "loaded config file");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = AppConfig::default();
        assert_eq!(config.defaults.model, "gpt-4o-mini");
        assert_eq!(config.defaults.max_searches, 0);
        assert_eq!(config.defaults.max_sources, 0);
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.defaults.model, "gpt-4o-mini");
    }

    #[test]
    fn partial_defaults_section() {
        let config: AppConfig = toml::from_str("[defaults]\nmax_sources = 8\n").expect("parse");
        assert_eq!(config.defaults.max_sources, 8);
        assert_eq!(config.defaults.max_searches, 0);
        assert_eq!(config.defaults.model, "gpt-4o-mini");
    }

    #[test]
    fn load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gander.toml");
        std::fs::write(&path, "[defaults]\nmodel = \"local-model\"\nmax_searches = 2\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.defaults.model, "local-model");
        assert_eq!(config.defaults.max_searches, 2);
    }

    #[test]
    fn load_config_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, GanderError::Io { .. }));
    }

    #[test]
    fn load_config_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gander.toml");
        std::fs::write(&path, "[defaults\nmodel = ").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn run_config_flags_override_file() {
        let mut app = AppConfig::default();
        app.defaults.model = "from-file".into();
        app.defaults.max_searches = 4;
        app.defaults.max_sources = 6;

        let run = RunConfig::new(&app, "Gander", "https://gandergeo.com", "What is it?")
            .with_model(Some("from-flag".into()))
            .with_budgets(None, Some(1));

        assert_eq!(run.model, "from-flag");
        assert_eq!(run.budgets.max_searches, 4);
        assert_eq!(run.budgets.max_sources, 1);
    }

    #[test]
    fn negative_budgets_are_recorded_as_given() {
        let config: AppConfig =
            toml::from_str("[defaults]\nmax_searches = -1\n").expect("parse");
        let run = RunConfig::new(&config, "b", "u", "q").with_budgets(None, Some(-5));
        assert_eq!(run.budgets.max_searches, -1);
        assert_eq!(run.budgets.max_sources, -5);
    }

    #[test]
    fn run_config_keeps_file_values_without_flags() {
        let run = RunConfig::new(&AppConfig::default(), "b", "u", "q")
            .with_model(None)
            .with_budgets(None, None);
        assert_eq!(run.model, "gpt-4o-mini");
        assert_eq!(run.budgets, Budgets::default());
    }
}

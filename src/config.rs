//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/nodechain/nodechain.toml`
//! 3. Explicit config file (`--config <path>`)
//! 4. Environment variables: `NODECHAIN_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::services::ScenarioInput;
use crate::application::{ApplicationError, IoResultExt};

/// Unified configuration for nodechain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Module name used in TypeScript declarations (default: "lib")
    pub module_name: String,
    /// Prefix written before every console log line (default: "logged: ")
    pub log_prefix: String,
    /// Name greeted by the demo scenario
    pub greeting_name: String,
    /// Value of the plain node in the demo scenario
    pub lhs: f64,
    /// Value of the named node in the demo scenario
    pub rhs: f64,
    /// Label of the named node in the demo scenario
    pub rhs_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        let scenario = ScenarioInput::default();
        Self {
            module_name: "lib".into(),
            log_prefix: "logged: ".into(),
            greeting_name: scenario.greeting_name,
            lhs: scenario.lhs,
            rhs: scenario.rhs,
            rhs_label: scenario.rhs_label,
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub module_name: Option<String>,
    pub log_prefix: Option<String>,
    pub greeting_name: Option<String>,
    pub lhs: Option<f64>,
    pub rhs: Option<f64>,
    pub rhs_label: Option<String>,
}

/// Get the XDG config directory for nodechain.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "nodechain").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("nodechain.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).with_path_context("read config", path)?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Scenario input derived from these settings.
    pub fn scenario_input(&self) -> ScenarioInput {
        ScenarioInput {
            greeting_name: self.greeting_name.clone(),
            lhs: self.lhs,
            rhs: self.rhs,
            rhs_label: self.rhs_label.clone(),
        }
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            module_name: overlay
                .module_name
                .clone()
                .unwrap_or_else(|| self.module_name.clone()),
            log_prefix: overlay
                .log_prefix
                .clone()
                .unwrap_or_else(|| self.log_prefix.clone()),
            greeting_name: overlay
                .greeting_name
                .clone()
                .unwrap_or_else(|| self.greeting_name.clone()),
            lhs: overlay.lhs.unwrap_or(self.lhs),
            rhs: overlay.rhs.unwrap_or(self.rhs),
            rhs_label: overlay
                .rhs_label
                .clone()
                .unwrap_or_else(|| self.rhs_label.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path();
        Self::load_from(global.as_deref(), config_file)?.with_env_overrides()
    }

    /// Defaults, then `global` (skipped when absent on disk), then `config_file`.
    ///
    /// Reads neither the environment nor the XDG location.
    pub fn load_from(
        global: Option<&Path>,
        config_file: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        if let Some(path) = config_file {
            debug!("loading config file: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Ok(current)
    }

    /// Apply NODECHAIN_* environment variables as explicit overrides.
    pub fn with_env_overrides(mut self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("NODECHAIN")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("module_name") {
            self.module_name = val;
        }
        if let Ok(val) = config.get_string("log_prefix") {
            self.log_prefix = val;
        }
        if let Ok(val) = config.get_string("greeting_name") {
            self.greeting_name = val;
        }
        if let Ok(val) = config.get_string("rhs_label") {
            self.rhs_label = val;
        }
        // Malformed numbers are errors.
        for (key, slot) in [("lhs", &mut self.lhs), ("rhs", &mut self.rhs)] {
            match config.get_float(key) {
                Ok(val) => *slot = val,
                Err(ConfigError::NotFound(_)) => {}
                Err(e) => return Err(config_err(e)),
            }
        }

        Ok(self)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# nodechain configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/nodechain/nodechain.toml
#   File:   nodechain --config <path>
#   Env:    NODECHAIN_* environment variables (e.g. NODECHAIN_LOG_PREFIX)

# Module name used in TypeScript declarations
# module_name = "lib"

# Prefix of every console log line
# log_prefix = "logged: "

# Demo scenario: greeting, plain node value, named node value and label
# greeting_name = "Rust"
# lhs = 46.0
# rhs = -5.0
# rhs_label = "b"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_match_demo_scenario() {
        let settings = Settings::default();
        assert_eq!(settings.module_name, "lib");
        assert_eq!(settings.log_prefix, "logged: ");
        assert_eq!(settings.scenario_input(), ScenarioInput::default());
    }

    #[test]
    fn given_partial_overlay_when_merging_then_only_specified_fields_change() {
        let base = Settings::default();
        let overlay = RawSettings {
            log_prefix: Some("> ".into()),
            rhs: Some(1.0),
            ..RawSettings::default()
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.log_prefix, "> ");
        assert_eq!(merged.rhs, 1.0);
        assert_eq!(merged.module_name, "lib");
        assert_eq!(merged.lhs, 46.0);
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("template parses");
        assert!(raw.module_name.is_none());
    }

    #[test]
    fn given_settings_when_serialized_then_roundtrips_through_raw() {
        let toml_str = Settings::default().to_toml().unwrap();
        let raw: RawSettings = toml::from_str(&toml_str).unwrap();
        assert_eq!(raw.greeting_name.as_deref(), Some("Rust"));
        assert_eq!(raw.lhs, Some(46.0));
    }
}

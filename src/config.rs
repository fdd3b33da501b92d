//! Export configuration: defaults, YAML config files and CLI overrides.
//!
//! Paths are templates; every `{version}` placeholder is replaced with the
//! configured version label when the configuration is resolved.
//!
//! ```yaml
//! version: "16"
//! input: "D:/Minecraft/Servers/MC{version}Pure/generated/reports/registries.json"
//! registry: "minecraft:entity_type"
//! code_output: "Extra Data/entity_types_code-1.{version}.txt"
//! index_output: "Extra Data/entity_types-1.{version}.json"
//! strict: false
//! ```

use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{ExportError, Result};
use crate::index::DuplicatePolicy;
use crate::registry::DEFAULT_REGISTRY;

/// Placeholder substituted with the version label in path templates
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Top-level export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Game version label, e.g. "16" for 1.16
    pub version: String,
    /// Path template of the generated `registries.json`
    pub input: String,
    /// Registry to export
    pub registry: String,
    /// Path template of the constant fragment
    pub code_output: String,
    /// Path template of the id index JSON
    pub index_output: String,
    /// Fail on duplicate protocol ids instead of overwriting
    pub strict: bool,
    /// Suppress per-entry console output
    pub quiet: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            version: "16".to_string(),
            input: "generated/reports/registries.json".to_string(),
            registry: DEFAULT_REGISTRY.to_string(),
            code_output: "Extra Data/entity_types_code-1.{version}.txt".to_string(),
            index_output: "Extra Data/entity_types-1.{version}.json".to_string(),
            strict: false,
            quiet: false,
        }
    }
}

/// Concrete paths after version substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub input: PathBuf,
    pub code_output: PathBuf,
    pub index_output: PathBuf,
}

impl ExportConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(ExportError::InvalidConfig("version cannot be empty".to_string()));
        }

        if self.registry.trim().is_empty() {
            return Err(ExportError::InvalidConfig("registry cannot be empty".to_string()));
        }

        for (field, value) in [
            ("input", &self.input),
            ("code_output", &self.code_output),
            ("index_output", &self.index_output),
        ] {
            if value.trim().is_empty() {
                return Err(ExportError::InvalidConfig(format!(
                    "{} path cannot be empty",
                    field
                )));
            }
        }

        let paths = self.resolve();
        if paths.code_output == paths.index_output {
            return Err(ExportError::InvalidConfig(format!(
                "code_output and index_output both resolve to {:?}",
                paths.code_output
            )));
        }

        Ok(())
    }

    /// Substitute the version label into every path template
    pub fn resolve(&self) -> ResolvedPaths {
        let expand =
            |template: &str| PathBuf::from(template.replace(VERSION_PLACEHOLDER, &self.version));

        ResolvedPaths {
            input: expand(&self.input),
            code_output: expand(&self.code_output),
            index_output: expand(&self.index_output),
        }
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        if self.strict {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::LastWriteWins
        }
    }
}

/// Load and parse configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<ExportConfig> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path).map_err(|source| ExportError::ConfigRead {
        path: config_path.to_path_buf(),
        source,
    })?;

    let config: ExportConfig =
        serde_yaml::from_reader(file).map_err(|source| ExportError::ConfigParse {
            path: config_path.to_path_buf(),
            source,
        })?;

    config.validate()?;

    Ok(config)
}

/// CLI arguments that can override config file settings
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub version: Option<String>,
    pub input: Option<String>,
    pub registry: Option<String>,
    pub code_output: Option<String>,
    pub index_output: Option<String>,
    pub strict: bool,
    pub quiet: bool,
}

/// Apply CLI overrides to a configuration
pub fn apply_overrides(config: &mut ExportConfig, overrides: &CliOverrides) -> Result<()> {
    if let Some(version) = &overrides.version {
        config.version = version.clone();
    }
    if let Some(input) = &overrides.input {
        config.input = input.clone();
    }
    if let Some(registry) = &overrides.registry {
        config.registry = registry.clone();
    }
    if let Some(code_output) = &overrides.code_output {
        config.code_output = code_output.clone();
    }
    if let Some(index_output) = &overrides.index_output {
        config.index_output = index_output.clone();
    }

    // flags can only switch these on
    config.strict |= overrides.strict;
    config.quiet |= overrides.quiet;

    // Re-validate after applying overrides
    config.validate()?;

    Ok(())
}

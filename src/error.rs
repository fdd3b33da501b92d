//! Error types for registry loading, indexing and output.

use std::path::PathBuf;

/// Errors that can occur while exporting a registry
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to read registry document '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Registry document '{}' is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Registry '{registry}' not found (available: {})", available.join(", "))]
    MissingRegistry {
        registry: String,
        available: Vec<String>,
    },

    #[error("Registry '{registry}' has no 'entries' mapping")]
    MissingEntries { registry: String },

    #[error("Entry '{key}' has no integer 'protocol_id'")]
    MissingProtocolId { key: String },

    #[error("Entry key '{key}' has no ':' namespace separator")]
    MissingSeparator { key: String },

    #[error("Protocol id {protocol_id} is used by both '{first}' and '{second}'")]
    DuplicateProtocolId {
        protocol_id: i64,
        first: String,
        second: String,
    },

    #[error("Failed to serialize identifier index: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file '{}' is not valid YAML: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to write console output: {0}")]
    Console(#[from] std::io::Error),

    #[error("Invalid export configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;

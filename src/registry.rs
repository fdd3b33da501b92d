//! # Registry Document Loading
//!
//! Reads a `registries.json` report produced by the game's data generator and
//! extracts one registry's entries in document order.
//!
//! ## Document Shape
//!
//! ```json
//! {
//!   "minecraft:entity_type": {
//!     "default": "minecraft:pig",
//!     "protocol_id": 6,
//!     "entries": {
//!       "minecraft:cow": { "protocol_id": 5 },
//!       "minecraft:pig": { "protocol_id": 7 }
//!     }
//!   }
//! }
//! ```
//!
//! Only `entries` and each entry's `protocol_id` are read. Any other attribute
//! is ignored. Object key order is preserved (`serde_json` is built with
//! `preserve_order`), so entries come back exactly as the generator wrote them.

use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExportError, Result};

/// Registry exported when none is configured
pub const DEFAULT_REGISTRY: &str = "minecraft:entity_type";

/// A namespaced identifier of the form `namespace:name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocation {
    key: String,
    namespace: String,
    name: String,
}

impl ResourceLocation {
    /// Parse a symbolic key.
    ///
    /// The name is the second `:`-separated segment, so `a:b:c` yields
    /// namespace `a` and name `b`.
    pub fn parse(key: &str) -> Result<Self> {
        let (namespace, rest) = key
            .split_once(':')
            .ok_or_else(|| ExportError::MissingSeparator { key: key.to_string() })?;
        let name = rest.split(':').next().unwrap_or(rest);

        Ok(Self {
            key: key.to_string(),
            namespace: namespace.to_string(),
            name: name.to_string(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full key as written in the source document
    pub fn as_str(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// One entry of a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub location: ResourceLocation,
    pub protocol_id: i64,
}

/// The entries of a single registry, in document order
#[derive(Debug, Clone)]
pub struct Registry {
    pub name: String,
    pub entries: Vec<RegistryEntry>,
}

impl Registry {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Name and entry count of a registry present in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySummary {
    pub name: String,
    pub entry_count: usize,
}

/// Read a protocol id, accepting whole-number floats such as `5.0`
fn read_protocol_id(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// A parsed `registries.json` document
#[derive(Debug)]
pub struct RegistryDocument {
    path: PathBuf,
    root: Map<String, Value>,
}

impl RegistryDocument {
    /// Read and parse a registry document from disk
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Loading registry document from: {:?}", path);

        let text = fs::read_to_string(path).map_err(|source| ExportError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(path, &text)
    }

    /// Parse document text; `path` is only used for error reporting
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let root: Map<String, Value> =
            serde_json::from_str(text).map_err(|source| ExportError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        log::debug!("Document contains {} registries", root.len());

        Ok(Self {
            path: path.to_path_buf(),
            root,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Registries present in the document, in document order
    pub fn summaries(&self) -> Vec<RegistrySummary> {
        self.root
            .iter()
            .map(|(name, value)| RegistrySummary {
                name: name.clone(),
                entry_count: value
                    .get("entries")
                    .and_then(Value::as_object)
                    .map_or(0, Map::len),
            })
            .collect()
    }

    /// Extract the entries of the named registry.
    ///
    /// Entries are checked in order; the first malformed one aborts the
    /// extraction. A missing `protocol_id` is reported before a missing
    /// namespace separator on the same entry.
    pub fn registry(&self, name: &str) -> Result<Registry> {
        let registry = self
            .root
            .get(name)
            .ok_or_else(|| ExportError::MissingRegistry {
                registry: name.to_string(),
                available: self.root.keys().cloned().collect(),
            })?;

        let entries = registry
            .get("entries")
            .and_then(Value::as_object)
            .ok_or_else(|| ExportError::MissingEntries {
                registry: name.to_string(),
            })?;

        let entries = entries
            .iter()
            .map(|(key, attributes)| {
                let protocol_id = attributes
                    .get("protocol_id")
                    .and_then(read_protocol_id)
                    .ok_or_else(|| ExportError::MissingProtocolId { key: key.clone() })?;

                Ok(RegistryEntry {
                    location: ResourceLocation::parse(key)?,
                    protocol_id,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Registry {
            name: name.to_string(),
            entries,
        })
    }
}

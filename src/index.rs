//! Identifier index: protocol id to bare entry name.

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{ExportError, Result};
use crate::registry::{Registry, RegistryEntry};

/// How protocol id collisions are handled while building an index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Later entries replace earlier ones; the id keeps its first position
    #[default]
    LastWriteWins,
    /// Any collision is an error
    Reject,
}

/// Ordered mapping from protocol id to bare name.
///
/// Serializes as a JSON object with stringified integer keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IdentifierIndex {
    ids: IndexMap<i64, String>,
    #[serde(skip)]
    keys: IndexMap<i64, String>,
    #[serde(skip)]
    duplicates: usize,
}

impl IdentifierIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over every entry of a registry
    pub fn build(registry: &Registry, policy: DuplicatePolicy) -> Result<Self> {
        let mut index = Self::new();
        for entry in &registry.entries {
            index.insert(entry, policy)?;
        }
        Ok(index)
    }

    /// Record one entry.
    ///
    /// Under [`DuplicatePolicy::LastWriteWins`] a colliding id is overwritten
    /// in place and counted.
    pub fn insert(&mut self, entry: &RegistryEntry, policy: DuplicatePolicy) -> Result<()> {
        let name = entry.location.name().to_string();
        let key = entry.location.as_str().to_string();

        match self.keys.entry(entry.protocol_id) {
            Entry::Vacant(slot) => {
                slot.insert(key);
                self.ids.insert(entry.protocol_id, name);
            }
            Entry::Occupied(mut slot) => {
                if policy == DuplicatePolicy::Reject {
                    return Err(ExportError::DuplicateProtocolId {
                        protocol_id: entry.protocol_id,
                        first: slot.get().clone(),
                        second: key,
                    });
                }

                log::warn!(
                    "Protocol id {} reassigned from '{}' to '{}'",
                    entry.protocol_id,
                    slot.get(),
                    key
                );
                slot.insert(key);
                self.ids.insert(entry.protocol_id, name);
                self.duplicates += 1;
            }
        }

        Ok(())
    }

    pub fn get(&self, protocol_id: i64) -> Option<&str> {
        self.ids.get(&protocol_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of inserts that overwrote an existing id
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> {
        self.ids.iter().map(|(id, name)| (*id, name.as_str()))
    }
}

//! Entry point registry
//!
//! Flattens a graph's entry points into the manifest the bundler compiles
//! from (`resourceKey -> inputPath`) and answers the reverse query
//! (`resourceKey -> outputPath`) once an entry has been compiled.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::warn;

use crate::domain::entities::{EntryPoint, TemplateGraph};
use crate::domain::value_objects::DuplicatePolicy;
use crate::error::{ConfigError, SamResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPointRegistry {
    entries: Vec<EntryPoint>,
    index: HashMap<String, usize>,
}

impl EntryPointRegistry {
    /// Build the registry for `graph`: nested stacks first, then the root.
    pub fn build(graph: &TemplateGraph, duplicates: DuplicatePolicy) -> SamResult<Self> {
        let mut registry = Self::default();
        let mut owners: HashMap<String, &Path> = HashMap::new();

        for stack in graph.stacks() {
            for entry_point in stack.entry_points() {
                let key = entry_point.resource_key();
                if let Some(first) = owners.insert(key.to_string(), stack.template_path()) {
                    match duplicates {
                        DuplicatePolicy::Reject => {
                            return Err(ConfigError::DuplicateResourceKey {
                                resource: key.to_string(),
                                first: first.to_path_buf(),
                                second: stack.template_path().to_path_buf(),
                            }
                            .into());
                        }
                        DuplicatePolicy::LastWins => {
                            warn!(
                                resource = %key,
                                replaced = %first.display(),
                                by = %stack.template_path().display(),
                                "duplicate logical id, keeping the later entry point"
                            );
                        }
                    }
                }
                registry.insert(entry_point.clone());
            }
        }

        Ok(registry)
    }

    /// Insert, replacing an existing entry with the same key in place
    fn insert(&mut self, entry_point: EntryPoint) {
        match self.index.get(entry_point.resource_key()) {
            Some(&i) => self.entries[i] = entry_point,
            None => {
                self.index
                    .insert(entry_point.resource_key().to_string(), self.entries.len());
                self.entries.push(entry_point);
            }
        }
    }

    /// Compilation inputs in registration order
    pub fn input_paths(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|e| (e.resource_key(), e.input_path()))
    }

    pub fn get(&self, resource_key: &str) -> Option<&EntryPoint> {
        self.index.get(resource_key).map(|&i| &self.entries[i])
    }

    /// Where the compiled output for `resource_key` must be placed.
    ///
    /// Fails for keys that were never registered as inputs.
    pub fn output_path(&self, resource_key: &str) -> SamResult<&Path> {
        self.get(resource_key)
            .map(EntryPoint::output_path)
            .ok_or_else(|| {
                ConfigError::UnknownEntryPoint {
                    resource: resource_key.to_string(),
                }
                .into()
            })
    }

    pub fn entries(&self) -> &[EntryPoint] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One `resourceKey -> inputPath` line per entry point
impl fmt::Display for EntryPointRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, input) in self.input_paths() {
            writeln!(f, "{} -> {}", key, input.display())?;
        }
        Ok(())
    }
}

/// Serializes as the `resourceKey -> inputPath` manifest, in order
impl Serialize for EntryPointRegistry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, input) in self.input_paths() {
            map.serialize_entry(key, input)?;
        }
        map.end()
    }
}

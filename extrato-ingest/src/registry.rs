//! Static mapping from institution id to compiled adapter.

use std::collections::BTreeMap;

use crate::adapter::{AdapterSpec, FormatAdapter};
use crate::error::AdapterError;
use crate::institutions::builtin_specs;

#[derive(Debug, Clone, Default)]
pub struct AdapterRegistry {
    adapters: BTreeMap<String, FormatAdapter>,
}

impl AdapterRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every built-in institution.
    pub fn builtin() -> Result<Self, AdapterError> {
        let mut registry = Self::empty();
        for spec in builtin_specs() {
            registry.insert(spec)?;
        }
        Ok(registry)
    }

    /// Compile and add `spec`, replacing any adapter with the same id.
    pub fn insert(&mut self, spec: AdapterSpec) -> Result<&FormatAdapter, AdapterError> {
        let adapter = FormatAdapter::compile(spec)?;
        let id = adapter.id().to_string();
        self.adapters.insert(id.clone(), adapter);
        self.get(&id)
    }

    pub fn get(&self, id: &str) -> Result<&FormatAdapter, AdapterError> {
        let key = id.trim().to_lowercase();
        self.adapters
            .get(&key)
            .ok_or_else(|| AdapterError::Unknown(id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.adapters.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormatAdapter> {
        self.adapters.values()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

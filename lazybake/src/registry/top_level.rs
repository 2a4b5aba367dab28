//! The top-level model location set.

use std::collections::HashSet;

use tracing::debug;

use super::RegistrySource;
use crate::model::ModelId;

/// Identifiers considered real, renderable top-level registry entries.
///
/// Built once per reload cycle from the fixed cache's identifiers plus every
/// block-state and item model, then never mutated. Safe to share across
/// threads without synchronization.
#[derive(Debug, Clone, Default)]
pub struct TopLevelLocations {
    locations: HashSet<ModelId>,
}

impl TopLevelLocations {
    /// Build the set.
    ///
    /// # Arguments
    ///
    /// * `initial` - Identifiers already present in the fixed cache
    /// * `source` - Block and item registries
    pub fn build(initial: impl IntoIterator<Item = ModelId>, source: &dyn RegistrySource) -> Self {
        let mut locations: HashSet<ModelId> = initial.into_iter().collect();
        let fixed = locations.len();

        locations.extend(source.block_state_models());
        locations.extend(source.item_models());

        debug!(
            fixed_entries = fixed,
            total = locations.len(),
            "Built top-level model location set"
        );

        Self { locations }
    }

    /// Whether `id` is in the set.
    pub fn contains(&self, id: &ModelId) -> bool {
        self.locations.contains(id)
    }

    /// Members whose namespace is one of `namespaces`.
    pub fn in_namespaces(&self, namespaces: &HashSet<String>) -> HashSet<ModelId> {
        self.locations
            .iter()
            .filter(|id| namespaces.contains(id.namespace()))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelId> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{BlockDefinition, StaticRegistry};

    fn id(s: &str) -> ModelId {
        s.parse().unwrap()
    }

    fn locations() -> TopLevelLocations {
        let registry = StaticRegistry::new()
            .with_block(BlockDefinition::new(id("moda:ore"), vec![]))
            .with_item(id("modb:gem"));
        TopLevelLocations::build([id("minecraft:stone#")], &registry)
    }

    #[test]
    fn test_union_of_sources() {
        let set = locations();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&id("minecraft:stone#")));
        assert!(set.contains(&id("moda:ore#")));
        assert!(set.contains(&id("modb:gem#inventory")));
        assert!(!set.contains(&id("modb:gem")));
    }

    #[test]
    fn test_in_namespaces() {
        let set = locations();
        let namespaces: HashSet<String> = ["moda".to_string(), "modb".to_string()].into();
        let filtered = set.in_namespaces(&namespaces);
        assert_eq!(filtered.len(), 2);
        assert!(!filtered.contains(&id("minecraft:stone#")));
    }
}

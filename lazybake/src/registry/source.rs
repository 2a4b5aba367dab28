//! Enumerable registry sources.

use serde::{Deserialize, Serialize};

use crate::model::ModelId;

/// Read-only view of the host's block and item registries.
pub trait RegistrySource {
    /// Model identifier of every possible block state.
    fn block_state_models(&self) -> Vec<ModelId>;

    /// Inventory model identifier of every item.
    fn item_models(&self) -> Vec<ModelId>;
}

/// A block and the variant strings of its possible states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDefinition {
    /// Registry name, without variant.
    pub id: ModelId,

    /// Variant string of every state (`facing=north,lit=false`).
    ///
    /// An empty list means the block has a single property-less state.
    #[serde(default)]
    pub states: Vec<String>,
}

impl BlockDefinition {
    pub fn new(id: ModelId, states: Vec<String>) -> Self {
        Self { id, states }
    }

    /// Model identifiers of every state of this block.
    ///
    /// States whose variant string is malformed are skipped.
    pub fn state_models(&self) -> Vec<ModelId> {
        if self.states.is_empty() {
            return self.id.with_variant("").into_iter().collect();
        }
        self.states
            .iter()
            .filter_map(|state| self.id.with_variant(state.as_str()).ok())
            .collect()
    }
}

/// In-memory [`RegistrySource`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticRegistry {
    #[serde(default)]
    pub blocks: Vec<BlockDefinition>,

    /// Item registry names, without variant.
    #[serde(default)]
    pub items: Vec<ModelId>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block(mut self, block: BlockDefinition) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn with_item(mut self, id: ModelId) -> Self {
        self.items.push(id);
        self
    }
}

impl RegistrySource for StaticRegistry {
    fn block_state_models(&self) -> Vec<ModelId> {
        self.blocks
            .iter()
            .flat_map(BlockDefinition::state_models)
            .collect()
    }

    fn item_models(&self) -> Vec<ModelId> {
        self.items.iter().map(ModelId::inventory).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ModelId {
        s.parse().unwrap()
    }

    #[test]
    fn test_block_without_states_has_empty_variant() {
        let block = BlockDefinition::new(id("minecraft:stone"), vec![]);
        assert_eq!(block.state_models(), vec![id("minecraft:stone#")]);
    }

    #[test]
    fn test_block_states_become_variants() {
        let block = BlockDefinition::new(
            id("mymod:lamp"),
            vec!["lit=false".to_string(), "lit=true".to_string()],
        );
        assert_eq!(
            block.state_models(),
            vec![id("mymod:lamp#lit=false"), id("mymod:lamp#lit=true")]
        );
    }

    #[test]
    fn test_static_registry_enumerates_items_as_inventory() {
        let registry = StaticRegistry::new()
            .with_item(id("mymod:wrench"))
            .with_block(BlockDefinition::new(id("mymod:pipe"), vec![]));

        assert_eq!(registry.item_models(), vec![id("mymod:wrench#inventory")]);
        assert_eq!(registry.block_state_models(), vec![id("mymod:pipe#")]);
    }
}

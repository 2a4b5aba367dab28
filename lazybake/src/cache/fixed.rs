//! The host's fixed baked cache.
//!
//! Keyed by composite [`FixedKey`]s (identifier, transform, uv-lock). The host
//! constructs and owns it; the adaptive cache reads from it, removes from it,
//! and bulk-replaces its canonical entries, but never clears it.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::{BakedModel, FixedKey, ModelId};

/// Fixed cache shared between the host and the adaptive cache.
pub type SharedFixedCache = Arc<RwLock<FixedBakedCache>>;

/// Pre-populated map from composite keys to baked models.
#[derive(Debug, Clone, Default)]
pub struct FixedBakedCache {
    entries: HashMap<FixedKey, BakedModel>,
}

impl FixedBakedCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap this cache for sharing with an adaptive cache.
    pub fn into_shared(self) -> SharedFixedCache {
        Arc::new(RwLock::new(self))
    }

    /// Insert an entry, returning the model it replaced.
    pub fn insert(&mut self, key: FixedKey, model: BakedModel) -> Option<BakedModel> {
        self.entries.insert(key, model)
    }

    pub fn get(&self, key: &FixedKey) -> Option<&BakedModel> {
        self.entries.get(key)
    }

    /// Entry for `id` at canonical orientation.
    pub fn get_canonical(&self, id: &ModelId) -> Option<&BakedModel> {
        self.entries.get(&FixedKey::canonical(id.clone()))
    }

    pub fn remove(&mut self, key: &FixedKey) -> Option<BakedModel> {
        self.entries.remove(key)
    }

    /// Remove the canonical-orientation entry for `id`.
    pub fn remove_canonical(&mut self, id: &ModelId) -> Option<BakedModel> {
        self.entries.remove(&FixedKey::canonical(id.clone()))
    }

    /// Number of entries across all orientations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any entry holds exactly `model`.
    pub fn contains_value(&self, model: &BakedModel) -> bool {
        self.entries.values().any(|m| m == model)
    }

    /// Identifiers of canonical-orientation entries.
    pub fn canonical_ids(&self) -> HashSet<ModelId> {
        self.entries
            .keys()
            .filter(|key| key.is_canonical())
            .map(|key| key.id.clone())
            .collect()
    }

    /// Canonical-orientation entries projected to bare identifiers.
    pub fn canonical_entries(&self) -> Vec<(ModelId, BakedModel)> {
        self.entries
            .iter()
            .filter(|(key, _)| key.is_canonical())
            .map(|(key, model)| (key.id.clone(), model.clone()))
            .collect()
    }

    /// Every model, across all orientations.
    pub fn values(&self) -> Vec<BakedModel> {
        self.entries.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FixedKey, &BakedModel)> {
        self.entries.iter()
    }

    /// Overwrite the canonical entry for `id` if one still exists.
    pub fn replace_canonical(&mut self, id: &ModelId, model: BakedModel) -> bool {
        match self.entries.get_mut(&FixedKey::canonical(id.clone())) {
            Some(current) => {
                *current = model;
                true
            }
            None => false,
        }
    }
}

impl FromIterator<(FixedKey, BakedModel)> for FixedBakedCache {
    fn from_iter<I: IntoIterator<Item = (FixedKey, BakedModel)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Orientation, Rotation, Transform};

    fn id(s: &str) -> ModelId {
        s.parse().unwrap()
    }

    fn rotated(s: &str) -> FixedKey {
        FixedKey::new(
            id(s),
            Orientation::new(Transform::new(Rotation::R0, Rotation::R90), false),
        )
    }

    #[test]
    fn test_canonical_projection_skips_rotated_entries() {
        let stone = BakedModel::new("stone");
        let stone_rotated = BakedModel::new("stone_y90");
        let cache: FixedBakedCache = [
            (FixedKey::canonical(id("minecraft:stone#")), stone.clone()),
            (rotated("minecraft:stone#"), stone_rotated.clone()),
            (rotated("minecraft:log#axis=x"), BakedModel::new("log")),
        ]
        .into_iter()
        .collect();

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.canonical_ids(), HashSet::from([id("minecraft:stone#")]));
        assert_eq!(cache.canonical_entries(), vec![(id("minecraft:stone#"), stone)]);
        assert!(cache.contains_value(&stone_rotated));
        assert_eq!(cache.values().len(), 3);
    }

    #[test]
    fn test_canonical_get_and_remove() {
        let stone = BakedModel::new("stone");
        let mut cache = FixedBakedCache::new();
        cache.insert(FixedKey::canonical(id("minecraft:stone#")), stone.clone());
        cache.insert(rotated("minecraft:stone#"), BakedModel::new("stone_y90"));

        assert_eq!(cache.get_canonical(&id("minecraft:stone#")), Some(&stone));
        assert_eq!(cache.remove_canonical(&id("minecraft:stone#")), Some(stone));
        assert_eq!(cache.get_canonical(&id("minecraft:stone#")), None);
        assert!(cache.get(&rotated("minecraft:stone#")).is_some());
    }

    #[test]
    fn test_replace_canonical_keeps_other_orientations() {
        let mut cache: FixedBakedCache = [
            (FixedKey::canonical(id("moda:a#")), BakedModel::new("a")),
            (rotated("moda:a#"), BakedModel::new("a_y90")),
        ]
        .into_iter()
        .collect();

        let replacement = BakedModel::new("a2");
        assert!(cache.replace_canonical(&id("moda:a#"), replacement.clone()));
        assert!(!cache.replace_canonical(&id("moda:b#"), replacement.clone()));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get_canonical(&id("moda:a#")), Some(&replacement));
        assert_ne!(cache.get(&rotated("moda:a#")), Some(&replacement));
    }
}

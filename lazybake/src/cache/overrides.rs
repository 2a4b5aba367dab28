//! The concurrent override table.
//!
//! Maps identifiers to [`OverrideEntry`]s. An entry, once present, permanently
//! supersedes the fixed cache for that identifier. Backed by `DashMap`: per-key
//! operations are atomic, there are no cross-key transactions.

use dashmap::DashMap;

use crate::model::{BakedModel, ModelId};

/// A resolved outcome for one identifier.
///
/// `model()` is `None` when the identifier is known to be permanently
/// unresolvable and must look absent to callers. Equality follows
/// [`BakedModel`] identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideEntry {
    model: Option<BakedModel>,
}

impl OverrideEntry {
    pub fn new(model: Option<BakedModel>) -> Self {
        Self { model }
    }

    /// Entry holding a visible model.
    pub fn resolved(model: BakedModel) -> Self {
        Self { model: Some(model) }
    }

    /// Entry recording a permanently unresolvable identifier.
    pub fn absent() -> Self {
        Self { model: None }
    }

    pub fn model(&self) -> Option<&BakedModel> {
        self.model.as_ref()
    }

    pub fn into_model(self) -> Option<BakedModel> {
        self.model
    }

    /// Whether the entry holds a visible model.
    pub fn is_present(&self) -> bool {
        self.model.is_some()
    }
}

/// Thread-safe table of override entries.
#[derive(Debug, Default)]
pub struct OverrideTable {
    entries: DashMap<ModelId, OverrideEntry>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ModelId) -> Option<OverrideEntry> {
        self.entries.get(id).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, id: &ModelId) -> bool {
        self.entries.contains_key(id)
    }

    /// Install an entry unconditionally, returning the previous one.
    pub fn insert(&self, id: ModelId, entry: OverrideEntry) -> Option<OverrideEntry> {
        self.entries.insert(id, entry)
    }

    /// Install an entry unless one already exists.
    ///
    /// Returns whichever entry is stored afterwards, so racing writers for the
    /// same identifier all observe the first writer's outcome.
    pub fn insert_if_absent(&self, id: ModelId, entry: OverrideEntry) -> OverrideEntry {
        self.entries.entry(id).or_insert(entry).value().clone()
    }

    pub fn remove(&self, id: &ModelId) -> Option<OverrideEntry> {
        self.entries.remove(id).map(|(_, entry)| entry)
    }

    /// Whether any entry holds exactly `model`.
    pub fn contains_model(&self, model: &BakedModel) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.value().model() == Some(model))
    }

    /// Copy of every entry.
    ///
    /// No shard lock is held once this returns.
    pub fn snapshot(&self) -> Vec<(ModelId, OverrideEntry)> {
        self.entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Overwrite the entry for `id` if one still exists.
    pub fn update(&self, id: &ModelId, entry: OverrideEntry) -> bool {
        match self.entries.get_mut(id) {
            Some(mut current) => {
                *current = entry;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

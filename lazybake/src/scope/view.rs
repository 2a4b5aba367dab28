//! Namespace-scoped registry view.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::cache::{ModelRegistry, RegistryError, ReplaceFn};
use crate::model::{BakedModel, ModelId};

/// A view over a shared registry restricted to one namespace's models.
///
/// `keys()` and `contains_key()` answer from the namespace's visible set;
/// every other operation goes straight to the shared registry, so writes
/// through one view are seen by all views.
pub struct ScopedRegistry {
    namespace: String,
    namespaces: HashSet<String>,
    visible: HashSet<ModelId>,
    delegate: Arc<dyn ModelRegistry>,
}

impl ScopedRegistry {
    pub(crate) fn new(
        namespace: String,
        namespaces: HashSet<String>,
        visible: HashSet<ModelId>,
        delegate: Arc<dyn ModelRegistry>,
    ) -> Self {
        Self {
            namespace,
            namespaces,
            visible,
            delegate,
        }
    }

    /// The namespace this view was built for.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Namespaces whose top-level models this view exposes.
    pub fn visible_namespaces(&self) -> &HashSet<String> {
        &self.namespaces
    }
}

impl ModelRegistry for ScopedRegistry {
    fn len(&self) -> usize {
        self.delegate.len()
    }

    fn contains_key(&self, id: &ModelId) -> bool {
        self.visible.contains(id) || self.delegate.contains_key(id)
    }

    fn contains_value(&self, model: &BakedModel) -> bool {
        self.delegate.contains_value(model)
    }

    fn get(&self, id: &ModelId) -> Option<BakedModel> {
        self.delegate.get(id)
    }

    fn put(&self, id: ModelId, model: BakedModel) -> Option<BakedModel> {
        self.delegate.put(id, model)
    }

    fn remove(&self, id: &ModelId) -> Option<BakedModel> {
        self.delegate.remove(id)
    }

    fn put_all(&self, entries: HashMap<ModelId, BakedModel>) {
        self.delegate.put_all(entries)
    }

    fn clear(&self) -> Result<(), RegistryError> {
        self.delegate.clear()
    }

    fn keys(&self) -> HashSet<ModelId> {
        self.visible.clone()
    }

    fn values(&self) -> Vec<BakedModel> {
        self.delegate.values()
    }

    fn entries(&self) -> Vec<(ModelId, BakedModel)> {
        self.delegate.entries()
    }

    fn replace(&self, id: ModelId, model: BakedModel) -> Option<BakedModel> {
        self.delegate.replace(id, model)
    }

    fn replace_all(&self, f: &ReplaceFn<'_>) {
        self.delegate.replace_all(f)
    }
}

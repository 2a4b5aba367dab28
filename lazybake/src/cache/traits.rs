//! Core trait for model registries.
//!
//! The `ModelRegistry` trait is the associative-container contract the
//! rendering front-end expects from the model registry. Both the
//! [`AdaptiveModelCache`](super::AdaptiveModelCache) and namespace-scoped views
//! implement it, so consumers hold an `Arc<dyn ModelRegistry>` and never care
//! which one they got.
//!
//! # Non-standard Container Semantics
//!
//! The contract mirrors a conventional map, but implementations backed by
//! lazy baking deliberately deviate in places:
//!
//! - **`len()`** may report the size of a backing store rather than the number
//!   of identifiers that `get` can resolve
//! - **`contains_key()`** may answer `true` optimistically for identifiers that
//!   have never been resolved
//! - **`keys()` / `values()` / `entries()`** may not reflect entries that only
//!   exist because of `put` or lazy resolution
//! - **`clear()`** may be unsupported
//!
//! Each implementation documents which of these apply.
//!
//! # Thread Safety
//!
//! All implementations must be `Send + Sync`; every operation takes `&self`.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::model::{BakedModel, ModelId};

/// Errors for registry contract violations.
///
/// Per-identifier resolution failures are never reported here; they are
/// absorbed by the implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The operation is not supported by this registry.
    #[error("Unsupported registry operation: {operation}")]
    Unsupported { operation: &'static str },
}

/// Function applied by [`ModelRegistry::replace_all`].
///
/// Receives the identifier and its current model (`None` for entries recorded
/// as unresolvable) and returns the replacement.
pub type ReplaceFn<'a> = dyn Fn(&ModelId, Option<&BakedModel>) -> Option<BakedModel> + 'a;

/// Associative-container contract over model identifiers.
pub trait ModelRegistry: Send + Sync {
    /// Number of entries, as defined by the implementation.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `id` is (or is believed to be) resolvable.
    fn contains_key(&self, id: &ModelId) -> bool;

    /// Whether any entry holds exactly this model (identity comparison).
    fn contains_value(&self, model: &BakedModel) -> bool;

    /// Resolve `id`.
    ///
    /// # Returns
    ///
    /// - `Some(model)` if the identifier resolves to a model
    /// - `None` if the identifier is absent
    fn get(&self, id: &ModelId) -> Option<BakedModel>;

    /// Install `model` for `id`, returning the model it displaced.
    fn put(&self, id: ModelId, model: BakedModel) -> Option<BakedModel>;

    /// Remove the entry for `id`, returning its model.
    fn remove(&self, id: &ModelId) -> Option<BakedModel>;

    /// Install every entry of `entries`.
    fn put_all(&self, entries: HashMap<ModelId, BakedModel>);

    /// Remove every entry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unsupported`] for registries whose lifetime is
    /// managed elsewhere.
    fn clear(&self) -> Result<(), RegistryError>;

    /// Identifiers enumerated by this registry.
    fn keys(&self) -> HashSet<ModelId>;

    /// Models enumerated by this registry.
    fn values(&self) -> Vec<BakedModel>;

    /// (identifier, model) pairs enumerated by this registry.
    fn entries(&self) -> Vec<(ModelId, BakedModel)>;

    /// Conditionally install `model` for `id`.
    ///
    /// Returns the model now associated with `id` when the replacement was
    /// refused, or the displaced model when it was performed.
    fn replace(&self, id: ModelId, model: BakedModel) -> Option<BakedModel>;

    /// Replace entries with the result of `f`.
    ///
    /// `f` is called without internal locks held and may use the registry.
    /// Returning `None` leaves the key enumerated but unresolvable, so
    /// `len()` and `keys()` are unchanged.
    fn replace_all(&self, f: &ReplaceFn<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_display() {
        let err = RegistryError::Unsupported { operation: "clear" };
        assert_eq!(err.to_string(), "Unsupported registry operation: clear");
    }
}

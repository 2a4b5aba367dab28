//! Cache configuration.
//!
//! [`CacheConfig`] holds the engine constants the cache core needs: which
//! namespace is the engine's own, which identifier is the universal missing
//! model, and which identifiers are never baked as top-level models.
//! [`ConfigFile`] loads these (plus logging settings) from an ini file.

mod file;

pub use file::{config_file_path, ConfigError, ConfigFile, LoggingSettings};

use std::collections::HashSet;

use crate::model::ModelId;

/// The engine's built-in namespace.
///
/// It is always implicitly available and never part of a per-namespace view.
pub const DEFAULT_BUILTIN_NAMESPACE: &str = "minecraft";

/// Path of the engine's universal missing model, inside the built-in namespace.
pub const MISSING_MODEL_PATH: &str = "builtin/missing";

/// Identifiers that are never baked as top-level models.
///
/// Known-bad entries whose bake must be skipped; they always resolve to the
/// sentinel outcome.
pub const DEFAULT_BAKE_SKIPPED: &[&str] = &["custommachinery:block/custom_machine_block"];

/// Configuration for the adaptive model cache and namespace views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Namespace excluded from every namespace-scoped view.
    ///
    /// Does not change how bare identifiers parse; see
    /// [`DEFAULT_NAMESPACE`](crate::model::DEFAULT_NAMESPACE).
    pub builtin_namespace: String,

    /// Identifier that is always a legitimate top-level entry.
    pub missing_model: ModelId,

    /// Identifiers forced to the sentinel outcome without baking.
    pub bake_skipped: HashSet<ModelId>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            builtin_namespace: DEFAULT_BUILTIN_NAMESPACE.to_string(),
            missing_model: default_missing_model(),
            bake_skipped: DEFAULT_BAKE_SKIPPED
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect(),
        }
    }
}

impl CacheConfig {
    /// Set the built-in namespace.
    pub fn with_builtin_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.builtin_namespace = namespace.into();
        self
    }

    /// Set the universal missing-model identifier.
    pub fn with_missing_model(mut self, id: ModelId) -> Self {
        self.missing_model = id;
        self
    }

    /// Replace the bake exclusion list.
    pub fn with_bake_skipped(mut self, ids: impl IntoIterator<Item = ModelId>) -> Self {
        self.bake_skipped = ids.into_iter().collect();
        self
    }

    /// Whether `id` must skip baking.
    pub fn is_bake_skipped(&self, id: &ModelId) -> bool {
        self.bake_skipped.contains(id)
    }
}

fn default_missing_model() -> ModelId {
    ModelId::from_static(DEFAULT_BUILTIN_NAMESPACE, MISSING_MODEL_PATH)
}

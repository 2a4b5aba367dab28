//! One resource-reload cycle.

use std::sync::Arc;

use tracing::info;

use crate::bake::BakeService;
use crate::cache::{AdaptiveModelCache, ModelRegistry, SharedFixedCache};
use crate::config::CacheConfig;
use crate::registry::{RegistrySource, TopLevelLocations};
use crate::scope::{NamespaceManifest, NamespaceScopes, ScopedRegistry};

/// The model registry state of one reload cycle.
///
/// Initialization order:
/// 1. Top-level location set, from the fixed cache and the registries
/// 2. Adaptive model cache over the fixed cache
/// 3. Namespace dependency graph and view factory over the cache
///
/// Dropping the cycle discards every override and memoized view; the next
/// reload starts from scratch.
///
/// # Example
///
/// ```ignore
/// use lazybake::app::ReloadCycle;
///
/// let cycle = ReloadCycle::start(baker, fixed, &registry, &manifests, CacheConfig::default());
///
/// // Hand the cache to the renderer
/// let registry = cycle.registry();
///
/// // Per-mod view for a bake event
/// let view = cycle.view("mymod");
/// ```
pub struct ReloadCycle {
    cache: Arc<AdaptiveModelCache>,
    scopes: NamespaceScopes,
}

impl ReloadCycle {
    /// Build the cache and view factory for a new reload cycle.
    ///
    /// # Arguments
    ///
    /// * `baker` - The baking service for misses
    /// * `fixed` - The host's pre-populated fixed cache
    /// * `source` - Block and item registries
    /// * `manifests` - Dependency declarations of every known namespace
    /// * `config` - Cache configuration
    pub fn start(
        baker: Arc<dyn BakeService>,
        fixed: SharedFixedCache,
        source: &dyn RegistrySource,
        manifests: &[NamespaceManifest],
        config: CacheConfig,
    ) -> Self {
        let initial = fixed.read().canonical_ids();
        let fixed_entries = fixed.read().len();
        let top_level = Arc::new(TopLevelLocations::build(initial, source));

        let builtin_namespace = config.builtin_namespace.clone();
        let cache = Arc::new(AdaptiveModelCache::new(
            baker,
            fixed,
            Arc::clone(&top_level),
            config,
        ));

        let registry: Arc<dyn ModelRegistry> = cache.clone();
        let scopes = NamespaceScopes::new(registry, top_level, manifests, builtin_namespace);

        info!(
            fixed_entries,
            top_level_models = scopes.top_level().len(),
            namespaces = manifests.len(),
            "Model registry reload cycle started"
        );

        Self { cache, scopes }
    }

    /// The adaptive cache of this cycle.
    pub fn cache(&self) -> &Arc<AdaptiveModelCache> {
        &self.cache
    }

    /// The adaptive cache as a registry trait object.
    pub fn registry(&self) -> Arc<dyn ModelRegistry> {
        self.cache.clone()
    }

    pub fn scopes(&self) -> &NamespaceScopes {
        &self.scopes
    }

    /// Memoized view for `namespace`.
    pub fn view(&self, namespace: &str) -> Arc<ScopedRegistry> {
        self.scopes.view(namespace)
    }
}

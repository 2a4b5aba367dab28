//! Per-namespace view construction.

use std::collections::HashSet;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info};

use super::graph::{NamespaceGraph, NamespaceManifest};
use super::view::ScopedRegistry;
use crate::cache::ModelRegistry;
use crate::registry::TopLevelLocations;

/// Builds namespace-scoped views over one shared registry.
///
/// Holds the immutable inputs every view needs (the top-level model location
/// set and the namespace dependency graph) and memoizes views per namespace
/// for the lifetime of the reload cycle.
pub struct NamespaceScopes {
    registry: Arc<dyn ModelRegistry>,
    top_level: Arc<TopLevelLocations>,
    graph: NamespaceGraph,
    builtin_namespace: String,
    views: DashMap<String, Arc<ScopedRegistry>>,
}

impl NamespaceScopes {
    /// Create the view factory.
    ///
    /// # Arguments
    ///
    /// * `registry` - The shared registry every view delegates to
    /// * `top_level` - Identifiers views may expose
    /// * `manifests` - Dependency declarations of every known namespace
    /// * `builtin_namespace` - Engine namespace never exposed by a view
    pub fn new(
        registry: Arc<dyn ModelRegistry>,
        top_level: Arc<TopLevelLocations>,
        manifests: &[NamespaceManifest],
        builtin_namespace: impl Into<String>,
    ) -> Self {
        let graph = NamespaceGraph::build(manifests);
        info!(
            namespaces = graph.namespace_count(),
            dependencies = graph.edge_count(),
            top_level_models = top_level.len(),
            "Built namespace dependency graph"
        );

        Self {
            registry,
            top_level,
            graph,
            builtin_namespace: builtin_namespace.into(),
            views: DashMap::new(),
        }
    }

    /// Namespaces visible from `namespace`: itself plus its direct dependency
    /// neighbours, without the built-in namespace.
    ///
    /// A namespace missing from the graph sees only itself.
    pub fn visible_namespaces(&self, namespace: &str) -> HashSet<String> {
        let mut namespaces = HashSet::from([namespace.to_string()]);
        match self.graph.adjacent(namespace) {
            Some(adjacent) => namespaces.extend(adjacent),
            None => debug!(namespace, "Namespace not in dependency graph, scoping to itself"),
        }
        namespaces.remove(&self.builtin_namespace);
        namespaces
    }

    /// Build a fresh view for `namespace`.
    pub fn wrap_registry(&self, namespace: &str) -> ScopedRegistry {
        let namespaces = self.visible_namespaces(namespace);
        let visible = self.top_level.in_namespaces(&namespaces);
        debug!(
            namespace,
            visible_namespaces = namespaces.len(),
            visible_models = visible.len(),
            "Wrapped model registry for namespace"
        );

        ScopedRegistry::new(
            namespace.to_string(),
            namespaces,
            visible,
            Arc::clone(&self.registry),
        )
    }

    /// The view for `namespace`, built on first request and reused afterwards.
    pub fn view(&self, namespace: &str) -> Arc<ScopedRegistry> {
        if let Some(view) = self.views.get(namespace) {
            return Arc::clone(view.value());
        }
        let view = Arc::new(self.wrap_registry(namespace));
        Arc::clone(
            self.views
                .entry(namespace.to_string())
                .or_insert(view)
                .value(),
        )
    }

    pub fn graph(&self) -> &NamespaceGraph {
        &self.graph
    }

    pub fn top_level(&self) -> &Arc<TopLevelLocations> {
        &self.top_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bake::StaticBaker;
    use crate::cache::{AdaptiveModelCache, FixedBakedCache};
    use crate::config::CacheConfig;
    use crate::model::{BakedModel, FixedKey, ModelId};
    use crate::registry::{BlockDefinition, StaticRegistry};

    fn id(s: &str) -> ModelId {
        s.parse().unwrap()
    }

    struct Fixture {
        scopes: NamespaceScopes,
        cache: Arc<AdaptiveModelCache>,
    }

    fn fixture() -> Fixture {
        let missing = BakedModel::new("missing");
        let baker = Arc::new(
            StaticBaker::new(missing).with_model(id("moda:gear#inventory"), BakedModel::new("gear")),
        );

        let mut fixed = FixedBakedCache::new();
        fixed.insert(FixedKey::canonical(id("minecraft:stone#")), BakedModel::new("stone"));
        fixed.insert(FixedKey::canonical(id("modc:rock#")), BakedModel::new("rock"));
        let fixed = fixed.into_shared();

        let registry = StaticRegistry::new()
            .with_block(BlockDefinition::new(
                id("moda:lamp"),
                vec!["lit=false".to_string(), "lit=true".to_string()],
            ))
            .with_block(BlockDefinition::new(id("modb:pipe"), vec![]))
            .with_item(id("moda:gear"))
            .with_item(id("minecraft:stick"))
            .with_item(id("lonely:thing"));

        let top_level = Arc::new(TopLevelLocations::build(
            fixed.read().canonical_ids(),
            &registry,
        ));
        let cache = Arc::new(AdaptiveModelCache::new(
            baker,
            fixed,
            Arc::clone(&top_level),
            CacheConfig::default(),
        ));

        let manifests = vec![
            NamespaceManifest::new("moda")
                .with_dependency("modb")
                .with_dependency("minecraft"),
            NamespaceManifest::new("modb"),
            NamespaceManifest::new("modc"),
        ];
        let scopes = NamespaceScopes::new(cache.clone(), top_level, &manifests, "minecraft");

        Fixture { scopes, cache }
    }

    #[test]
    fn test_view_includes_dependencies_only() {
        let f = fixture();
        let view = f.scopes.wrap_registry("moda");

        assert_eq!(
            view.keys(),
            HashSet::from([
                id("moda:lamp#lit=false"),
                id("moda:lamp#lit=true"),
                id("moda:gear#inventory"),
                id("modb:pipe#"),
            ])
        );
        assert_eq!(
            view.visible_namespaces(),
            &HashSet::from(["moda".to_string(), "modb".to_string()])
        );
    }

    #[test]
    fn test_dependency_edge_is_undirected() {
        let f = fixture();
        let view = f.scopes.wrap_registry("modb");

        assert!(view.keys().contains(&id("moda:gear#inventory")));
        assert!(view.keys().contains(&id("modb:pipe#")));
        assert!(!view.keys().contains(&id("modc:rock#")));
    }

    #[test]
    fn test_unknown_namespace_sees_only_itself() {
        let f = fixture();
        let view = f.scopes.wrap_registry("lonely");

        assert_eq!(view.keys(), HashSet::from([id("lonely:thing#inventory")]));
        assert_eq!(view.namespace(), "lonely");
    }

    #[test]
    fn test_builtin_namespace_is_never_visible() {
        let f = fixture();
        let view = f.scopes.wrap_registry("minecraft");
        assert!(view.keys().is_empty());
    }

    #[test]
    fn test_contains_key_falls_back_to_delegate() {
        let f = fixture();
        let view = f.scopes.wrap_registry("moda");
        let overlay = id("moda:block/lamp_overlay");

        assert!(view.contains_key(&id("moda:gear#inventory")));
        // Not visible, but the cache optimistically claims it.
        assert!(view.contains_key(&overlay));
        assert_eq!(view.get(&overlay), None);
        assert!(!view.contains_key(&overlay));

        // Visible keys stay contained even once resolved as missing.
        assert!(view.contains_key(&id("modb:pipe#")));
    }

    #[test]
    fn test_operations_delegate_to_shared_cache() {
        let f = fixture();
        let view = f.scopes.wrap_registry("moda");
        let custom = BakedModel::new("custom");

        let rock = f.cache.get(&id("modc:rock#"));
        assert!(rock.is_some());
        assert_eq!(view.put(id("modc:rock#"), custom.clone()), rock);
        assert_eq!(f.cache.get(&id("modc:rock#")), Some(custom.clone()));
        assert_eq!(view.len(), f.cache.len());
        assert!(view.contains_value(&custom));
        assert_eq!(view.values().len(), f.cache.values().len());
        assert!(view.clear().is_err());
    }

    #[test]
    fn test_view_is_memoized() {
        let f = fixture();

        let first = f.scopes.view("moda");
        let second = f.scopes.view("moda");
        assert!(Arc::ptr_eq(&first, &second));

        let other = f.scopes.view("modb");
        assert!(!Arc::ptr_eq(&first, &other));
    }
}

//! Namespace dependency graph.
//!
//! Undirected graph of namespaces (mod ids) with an edge for every declared
//! dependency. Built once per process and never mutated afterwards.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};

/// Dependency declarations of one namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceManifest {
    /// The namespace (mod id).
    pub namespace: String,

    /// Namespaces this one declares a dependency on.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl NamespaceManifest {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependency(mut self, namespace: impl Into<String>) -> Self {
        self.dependencies.push(namespace.into());
        self
    }
}

/// Undirected namespace dependency graph.
#[derive(Debug, Clone, Default)]
pub struct NamespaceGraph {
    /// The underlying undirected graph.
    graph: UnGraph<String, ()>,
    /// Map from namespace to its node index.
    node_map: HashMap<String, NodeIndex>,
}

impl NamespaceGraph {
    /// Build the graph from every known namespace's declarations.
    ///
    /// Every declared namespace becomes a node; every dependency adds an edge,
    /// creating the dependency's node if it was not declared itself.
    pub fn build(manifests: &[NamespaceManifest]) -> Self {
        let mut graph = Self::default();

        for manifest in manifests {
            graph.ensure_node(&manifest.namespace);
        }
        for manifest in manifests {
            for dependency in &manifest.dependencies {
                graph.add_dependency(&manifest.namespace, dependency);
            }
        }

        graph
    }

    fn ensure_node(&mut self, namespace: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(namespace) {
            index
        } else {
            let index = self.graph.add_node(namespace.to_string());
            self.node_map.insert(namespace.to_string(), index);
            index
        }
    }

    fn add_dependency(&mut self, from: &str, to: &str) {
        let from_idx = self.ensure_node(from);
        let to_idx = self.ensure_node(to);
        self.graph.update_edge(from_idx, to_idx, ());
    }

    /// Whether `namespace` is a node of the graph.
    pub fn contains(&self, namespace: &str) -> bool {
        self.node_map.contains_key(namespace)
    }

    /// Namespaces one edge away from `namespace`.
    ///
    /// Returns `None` when `namespace` is not in the graph.
    pub fn adjacent(&self, namespace: &str) -> Option<HashSet<String>> {
        let index = *self.node_map.get(namespace)?;
        Some(
            self.graph
                .neighbors(index)
                .map(|neighbor| self.graph[neighbor].clone())
                .collect(),
        )
    }

    pub fn namespace_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

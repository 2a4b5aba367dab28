//! lazybake - On-demand baked model registry
//!
//! This library replaces an eagerly populated baked-model registry with an
//! adaptive cache. Models are baked the first time something asks for them,
//! failures are remembered, and each content namespace can be handed a
//! registry view scoped to the namespaces it declares dependencies on.
//!
//! # Layout
//!
//! - [`model`]: identifiers, orientations and baked model handles
//! - [`bake`]: the baking service seam
//! - [`registry`]: block and item registries, top-level locations
//! - [`cache`]: the adaptive cache and its backing stores
//! - [`scope`]: namespace dependency graph and scoped views
//! - [`app`]: per-reload wiring
//! - [`config`]: cache settings and the configuration file
//! - [`snapshot`]: JSON registry snapshots

pub mod app;
pub mod bake;
pub mod cache;
pub mod config;
pub mod model;
pub mod registry;
pub mod scope;
pub mod snapshot;

pub use app::ReloadCycle;
pub use bake::{BakeError, BakeService};
pub use cache::{AdaptiveModelCache, CacheStats, ModelRegistry};
pub use config::CacheConfig;
pub use model::{BakedModel, ModelId};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

//! Adaptive model cache.
//!
//! The cache presents the host's associative model-registry contract
//! ([`ModelRegistry`]) over two backing stores:
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              AdaptiveModelCache                 │
//! │                                                 │
//! │  get / put / remove / replace / replace_all     │
//! └──────────┬───────────────────────┬──────────────┘
//!            │                       │
//!            ▼                       ▼
//! ┌─────────────────────┐  ┌─────────────────────────┐
//! │   OverrideTable     │  │   FixedBakedCache       │
//! │                     │  │                         │
//! │ ModelId → outcome   │  │ (id, transform, uvlock) │
//! │ DashMap, lazy       │  │ → model, host-owned     │
//! └─────────────────────┘  └─────────────────────────┘
//! ```
//!
//! Misses are baked on demand through a [`BakeService`](crate::bake::BakeService)
//! and remembered permanently, failures included.

mod adaptive;
mod fixed;
mod overrides;
mod stats;
mod traits;

pub use adaptive::AdaptiveModelCache;
pub use fixed::{FixedBakedCache, SharedFixedCache};
pub use overrides::{OverrideEntry, OverrideTable};
pub use stats::CacheStats;
pub use traits::{ModelRegistry, RegistryError, ReplaceFn};

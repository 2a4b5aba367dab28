//! Registry enumeration and the top-level model location set.
//!
//! The host's block and item registries are external, read-only sources of
//! identifiers. They are consumed once per reload cycle to build
//! [`TopLevelLocations`]: the set of identifiers that are legitimately part of
//! the public model registry surface.

mod source;
mod top_level;

pub use source::{BlockDefinition, RegistrySource, StaticRegistry};
pub use top_level::TopLevelLocations;

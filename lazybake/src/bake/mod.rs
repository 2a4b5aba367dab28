//! Baking service interface.
//!
//! The model-baking engine is an external collaborator. The cache only needs
//! two things from it: a way to bake one identifier at one orientation, and
//! the designated Missing-Model Sentinel it hands out for unresolvable input.
//!
//! [`StaticBaker`] is an in-memory implementation for diagnostics and tests.

mod static_baker;

pub use static_baker::StaticBaker;

use thiserror::Error;

use crate::model::{BakedModel, ModelId, Orientation};

/// Errors a baking service may raise for a single identifier.
///
/// These never reach callers of the cache: they are logged and turned into
/// the sentinel outcome.
#[derive(Debug, Clone, Error)]
pub enum BakeError {
    /// The model exists but could not be baked.
    #[error("Failed to bake {id}: {reason}")]
    Unbakeable { id: ModelId, reason: String },

    /// The baking service has no model by this name.
    #[error("Unknown model {id}")]
    Unknown { id: ModelId },
}

/// External model-baking service.
///
/// Implementations must be `Send + Sync`: parallel resolution calls `bake`
/// from several worker threads at once. A bake is expected to be bounded in
/// time; there is no cancellation.
pub trait BakeService: Send + Sync {
    /// Bake `id` at the given orientation.
    ///
    /// May return [`BakeService::missing_model`] for input that resolves to
    /// nothing, or an error for input that fails outright.
    fn bake(&self, id: &ModelId, orientation: Orientation) -> Result<BakedModel, BakeError>;

    /// The Missing-Model Sentinel shared by every failed bake.
    fn missing_model(&self) -> BakedModel;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bake_error_display() {
        let id: ModelId = "mymod:block/gear".parse().unwrap();
        let err = BakeError::Unbakeable {
            id: id.clone(),
            reason: "missing texture".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to bake mymod:block/gear: missing texture"
        );

        let err = BakeError::Unknown { id };
        assert!(err.to_string().contains("mymod:block/gear"));
    }
}

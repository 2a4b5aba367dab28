//! In-memory baking service.
//!
//! Serves a fixed table of models, fails for a configured set of identifiers,
//! and returns the sentinel for everything else. Every call is counted per
//! identifier so callers can verify how often the cache actually bakes.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tracing::trace;

use super::{BakeError, BakeService};
use crate::model::{BakedModel, ModelId, Orientation};

/// Table-driven [`BakeService`].
pub struct StaticBaker {
    models: HashMap<ModelId, BakedModel>,
    failing: HashSet<ModelId>,
    missing: BakedModel,
    calls: DashMap<ModelId, u64>,
    total_calls: AtomicU64,
}

impl StaticBaker {
    /// Create a baker that knows no models.
    pub fn new(missing: BakedModel) -> Self {
        Self {
            models: HashMap::new(),
            failing: HashSet::new(),
            missing,
            calls: DashMap::new(),
            total_calls: AtomicU64::new(0),
        }
    }

    /// Register a model that bakes successfully.
    pub fn with_model(mut self, id: ModelId, model: BakedModel) -> Self {
        self.models.insert(id, model);
        self
    }

    /// Register an identifier whose bake raises an error.
    pub fn with_failure(mut self, id: ModelId) -> Self {
        self.failing.insert(id);
        self
    }

    /// Model registered for `id`, if any.
    pub fn model(&self, id: &ModelId) -> Option<&BakedModel> {
        self.models.get(id)
    }

    /// Number of `bake` calls made for `id`.
    pub fn bake_count(&self, id: &ModelId) -> u64 {
        self.calls.get(id).map(|count| *count).unwrap_or(0)
    }

    /// Number of `bake` calls made in total.
    pub fn total_bakes(&self) -> u64 {
        self.total_calls.load(Ordering::Relaxed)
    }
}

impl BakeService for StaticBaker {
    fn bake(&self, id: &ModelId, orientation: Orientation) -> Result<BakedModel, BakeError> {
        *self.calls.entry(id.clone()).or_insert(0) += 1;
        self.total_calls.fetch_add(1, Ordering::Relaxed);
        trace!(model = %id, transform = %orientation.transform, "Static bake");

        if self.failing.contains(id) {
            return Err(BakeError::Unbakeable {
                id: id.clone(),
                reason: "configured to fail".to_string(),
            });
        }

        Ok(self
            .models
            .get(id)
            .cloned()
            .unwrap_or_else(|| self.missing.clone()))
    }

    fn missing_model(&self) -> BakedModel {
        self.missing.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ModelId {
        s.parse().unwrap()
    }

    #[test]
    fn test_known_model_bakes() {
        let gear = BakedModel::new("gear");
        let baker = StaticBaker::new(BakedModel::new("missing"))
            .with_model(id("mymod:gear#inventory"), gear.clone());

        let baked = baker
            .bake(&id("mymod:gear#inventory"), Orientation::CANONICAL)
            .unwrap();
        assert_eq!(baked, gear);
        assert_eq!(baker.bake_count(&id("mymod:gear#inventory")), 1);
    }

    #[test]
    fn test_unknown_model_returns_sentinel() {
        let missing = BakedModel::new("missing");
        let baker = StaticBaker::new(missing.clone());

        let baked = baker.bake(&id("mymod:nothing"), Orientation::CANONICAL).unwrap();
        assert_eq!(baked, missing);
        assert_eq!(baker.missing_model(), missing);
    }

    #[test]
    fn test_failure_is_error_and_counted() {
        let baker = StaticBaker::new(BakedModel::new("missing")).with_failure(id("mymod:broken"));

        let result = baker.bake(&id("mymod:broken"), Orientation::CANONICAL);
        assert!(matches!(result, Err(BakeError::Unbakeable { .. })));

        let _ = baker.bake(&id("mymod:broken"), Orientation::CANONICAL);
        assert_eq!(baker.bake_count(&id("mymod:broken")), 2);
        assert_eq!(baker.total_bakes(), 2);
    }
}

//! Adaptive model cache with lazy baking.
//!
//! [`AdaptiveModelCache`] answers registry lookups from two backing stores:
//!
//! ```text
//! get(id)
//!   │
//!   ├─► OverrideTable (DashMap)          hit ─► stored outcome (maybe absent)
//!   │
//!   ├─► excluded id                      ─► treated as sentinel, never baked
//!   │
//!   ├─► FixedBakedCache (canonical key)  hit ─► fixed model
//!   │
//!   └─► BakeService::bake(id, CANONICAL)
//!         │
//!         ├─ ok(model)          ─► override: model
//!         └─ ok(sentinel) / err ─► override: sentinel if top-level, else absent
//! ```
//!
//! Once an override exists for an identifier it wins over everything else, so
//! the baking service sees each identifier at most once per cache.
//!
//! # Non-standard Container Semantics
//!
//! These deviations let the cache stand in for an eagerly baked registry:
//!
//! - `len()` is the fixed cache's size; overrides are replacements, not
//!   additions
//! - `contains_key()` is optimistically `true` until an identifier has been
//!   resolved as absent
//! - `keys()`, `values()` and `entries()` enumerate the fixed cache only
//! - `clear()` is unsupported; the cache is discarded with its reload cycle

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::RwLock;
use rayon::prelude::*;
use tracing::{debug, error, info, warn};

use super::fixed::SharedFixedCache;
use super::overrides::{OverrideEntry, OverrideTable};
use super::stats::{CacheStats, StatsCounters};
use super::traits::{ModelRegistry, RegistryError, ReplaceFn};
use crate::bake::BakeService;
use crate::config::CacheConfig;
use crate::model::{BakedModel, ModelId, Orientation};
use crate::registry::TopLevelLocations;

/// Lazily baking model registry for one reload cycle.
pub struct AdaptiveModelCache {
    /// External baking service.
    baker: Arc<dyn BakeService>,

    /// Host-owned fixed cache keyed by (id, transform, uv-lock).
    fixed: SharedFixedCache,

    /// Permanent per-identifier outcomes.
    overrides: OverrideTable,

    /// Identifiers whose sentinel bakes stay visible.
    top_level: Arc<TopLevelLocations>,

    config: CacheConfig,

    /// Current Missing-Model Sentinel.
    missing: RwLock<BakedModel>,

    stats: StatsCounters,
}

impl AdaptiveModelCache {
    /// Create a cache over `fixed`, baking misses with `baker`.
    ///
    /// The sentinel is taken from [`BakeService::missing_model`]; use
    /// [`set_missing_model`](Self::set_missing_model) to change it.
    pub fn new(
        baker: Arc<dyn BakeService>,
        fixed: SharedFixedCache,
        top_level: Arc<TopLevelLocations>,
        config: CacheConfig,
    ) -> Self {
        let missing = baker.missing_model();
        Self {
            baker,
            fixed,
            overrides: OverrideTable::new(),
            top_level,
            config,
            missing: RwLock::new(missing),
            stats: StatsCounters::default(),
        }
    }

    /// Replace the Missing-Model Sentinel.
    ///
    /// Only affects resolutions made afterwards.
    pub fn set_missing_model(&self, model: BakedModel) {
        *self.missing.write() = model;
    }

    /// The current Missing-Model Sentinel.
    pub fn missing_model(&self) -> BakedModel {
        self.missing.read().clone()
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn top_level(&self) -> &Arc<TopLevelLocations> {
        &self.top_level
    }

    pub fn fixed_cache(&self) -> &SharedFixedCache {
        &self.fixed
    }

    /// Number of recorded override entries, including absent ones.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Snapshot of the resolution counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }

    /// Resolve `ids` in parallel on the rayon pool.
    ///
    /// # Returns
    ///
    /// How many identifiers resolved to a visible model.
    pub fn prewarm(&self, ids: &[ModelId]) -> usize {
        let resolved = ids.par_iter().filter(|id| self.get(id).is_some()).count();
        info!(requested = ids.len(), resolved, "Prewarmed model cache");
        resolved
    }

    /// Whether a sentinel outcome for `id` stays visible.
    fn is_top_level(&self, id: &ModelId) -> bool {
        self.top_level.contains(id) || *id == self.config.missing_model
    }

    /// Bake `id` at canonical orientation, converting failures to the sentinel.
    fn bake_or_missing(&self, id: &ModelId) -> BakedModel {
        if self.config.is_bake_skipped(id) {
            debug!(model = %id, "Model is excluded from baking");
            return self.missing_model();
        }

        self.stats.bake();
        match self.baker.bake(id, Orientation::CANONICAL) {
            Ok(model) => model,
            Err(e) => {
                self.stats.bake_failure();
                error!(model = %id, error = %e, "Exception baking model");
                self.missing_model()
            }
        }
    }

    /// Resolve a miss and record the outcome.
    fn resolve(&self, id: &ModelId) -> Option<BakedModel> {
        let model = self.bake_or_missing(id);

        let entry = if model == self.missing_model() {
            if self.is_top_level(id) {
                self.stats.sentinel_outcome();
                debug!(model = %id, "Top-level model resolved to missing model");
                OverrideEntry::resolved(model)
            } else {
                self.stats.absent_outcome();
                debug!(model = %id, "Non top-level model is missing, recording as absent");
                OverrideEntry::absent()
            }
        } else {
            OverrideEntry::resolved(model)
        };

        self.overrides.insert_if_absent(id.clone(), entry).into_model()
    }
}

impl ModelRegistry for AdaptiveModelCache {
    /// Size of the fixed cache.
    fn len(&self) -> usize {
        self.fixed.read().len()
    }

    /// `true` unless `id` was resolved as absent.
    fn contains_key(&self, id: &ModelId) -> bool {
        match self.overrides.get(id) {
            Some(entry) => entry.is_present(),
            None => true,
        }
    }

    fn contains_value(&self, model: &BakedModel) -> bool {
        self.overrides.contains_model(model) || self.fixed.read().contains_value(model)
    }

    fn get(&self, id: &ModelId) -> Option<BakedModel> {
        if let Some(entry) = self.overrides.get(id) {
            self.stats.override_hit();
            return entry.into_model();
        }

        if self.config.is_bake_skipped(id) {
            return self.resolve(id);
        }

        let fixed_hit = self.fixed.read().get_canonical(id).cloned();
        if let Some(model) = fixed_hit {
            self.stats.fixed_hit();
            return Some(model);
        }

        self.resolve(id)
    }

    fn put(&self, id: ModelId, model: BakedModel) -> Option<BakedModel> {
        let previous = self.overrides.insert(id.clone(), OverrideEntry::resolved(model));
        match previous {
            Some(entry) => entry.into_model(),
            None => self.fixed.read().get_canonical(&id).cloned(),
        }
    }

    fn remove(&self, id: &ModelId) -> Option<BakedModel> {
        match self.overrides.remove(id) {
            Some(entry) => entry.into_model(),
            None => self.fixed.write().remove_canonical(id),
        }
    }

    fn put_all(&self, entries: HashMap<ModelId, BakedModel>) {
        for (id, model) in entries {
            self.overrides.insert(id, OverrideEntry::resolved(model));
        }
    }

    fn clear(&self) -> Result<(), RegistryError> {
        warn!("Attempted to clear the adaptive model cache");
        Err(RegistryError::Unsupported { operation: "clear" })
    }

    /// Identifiers of the fixed cache's canonical entries.
    fn keys(&self) -> HashSet<ModelId> {
        self.fixed.read().canonical_ids()
    }

    /// Raw fixed-cache values.
    fn values(&self) -> Vec<BakedModel> {
        self.fixed.read().values()
    }

    /// Fixed-cache canonical entries projected to bare identifiers.
    fn entries(&self) -> Vec<(ModelId, BakedModel)> {
        self.fixed.read().canonical_entries()
    }

    /// Install `model` only if `id` has no override holding a visible model.
    fn replace(&self, id: ModelId, model: BakedModel) -> Option<BakedModel> {
        match self.overrides.get(&id) {
            Some(entry) if entry.is_present() => entry.into_model(),
            _ => self.put(id, model),
        }
    }

    /// Apply `f` to every override, then to every canonical fixed entry that
    /// was not overridden when the call started.
    ///
    /// `f` runs without any lock held, so it may use this registry. Results
    /// are written back only for entries that still exist. A fixed entry for
    /// which `f` returns `None` keeps its key and is recorded as absent.
    fn replace_all(&self, f: &ReplaceFn<'_>) {
        let overrides = self.overrides.snapshot();
        let fixed: Vec<(ModelId, BakedModel)> = {
            let overridden: HashSet<&ModelId> = overrides.iter().map(|(id, _)| id).collect();
            self.fixed
                .read()
                .canonical_entries()
                .into_iter()
                .filter(|(id, _)| !overridden.contains(id))
                .collect()
        };

        let replaced_overrides: Vec<(ModelId, Option<BakedModel>)> = overrides
            .into_iter()
            .map(|(id, entry)| {
                let model = f(&id, entry.model());
                (id, model)
            })
            .collect();
        let replaced_fixed: Vec<(ModelId, Option<BakedModel>)> = fixed
            .into_iter()
            .map(|(id, model)| {
                let model = f(&id, Some(&model));
                (id, model)
            })
            .collect();

        for (id, model) in replaced_overrides {
            self.overrides.update(&id, OverrideEntry::new(model));
        }

        let mut cleared = Vec::new();
        {
            let mut fixed = self.fixed.write();
            for (id, model) in replaced_fixed {
                match model {
                    Some(model) => {
                        fixed.replace_canonical(&id, model);
                    }
                    None => cleared.push(id),
                }
            }
        }
        for id in cleared {
            self.overrides.insert_if_absent(id, OverrideEntry::absent());
        }
    }
}

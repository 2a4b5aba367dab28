//! Registry snapshot files.
//!
//! A snapshot is a JSON description of a host's model registry state: the
//! namespaces and their dependencies, the block and item registries, the
//! fixed baked cache, and which identifiers the baking service can bake.
//! Loading one yields in-memory collaborators ([`StaticBaker`],
//! [`StaticRegistry`], a shared [`FixedBakedCache`]) ready to start a
//! [`ReloadCycle`](crate::app::ReloadCycle).
//!
//! Models are named by label. Every occurrence of a label resolves to the same
//! [`BakedModel`] handle, so a label used both in `fixed` and in `bakeable`
//! denotes one model.
//!
//! ```json
//! {
//!   "missing_model": "missing",
//!   "namespaces": [{ "namespace": "moda", "dependencies": ["modb"] }],
//!   "blocks": [{ "id": "moda:lamp", "states": ["lit=false", "lit=true"] }],
//!   "items": ["moda:gear"],
//!   "fixed": [{ "id": "minecraft:stone#", "model": "stone" }],
//!   "bakeable": { "moda:gear#inventory": "gear" },
//!   "failing": ["moda:broken#"]
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bake::StaticBaker;
use crate::cache::{FixedBakedCache, SharedFixedCache};
use crate::model::{BakedModel, FixedKey, ModelId, Orientation, Rotation, Transform};
use crate::registry::StaticRegistry;
use crate::scope::NamespaceManifest;

const DEFAULT_MISSING_LABEL: &str = "missing";

/// Errors that can occur while loading a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// I/O error reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid snapshot.
    #[error("Invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// A fixed entry uses a rotation that is not a multiple of 90 degrees.
    #[error("Invalid rotation {degrees} for fixed entry {id}")]
    InvalidRotation { id: ModelId, degrees: u16 },
}

/// One fixed-cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedEntry {
    pub id: ModelId,
    /// X rotation in degrees.
    #[serde(default)]
    pub x: u16,
    /// Y rotation in degrees.
    #[serde(default)]
    pub y: u16,
    #[serde(default)]
    pub uv_lock: bool,
    /// Model label.
    pub model: String,
}

impl FixedEntry {
    fn key(&self) -> Result<FixedKey, SnapshotError> {
        let rotation = |degrees: u16| {
            Rotation::from_degrees(degrees).ok_or_else(|| SnapshotError::InvalidRotation {
                id: self.id.clone(),
                degrees,
            })
        };
        let transform = Transform::new(rotation(self.x)?, rotation(self.y)?);
        Ok(FixedKey::new(
            self.id.clone(),
            Orientation::new(transform, self.uv_lock),
        ))
    }
}

fn default_missing_label() -> String {
    DEFAULT_MISSING_LABEL.to_string()
}

/// Serialized host registry state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Label of the Missing-Model Sentinel.
    #[serde(default = "default_missing_label")]
    pub missing_model: String,

    #[serde(default)]
    pub namespaces: Vec<NamespaceManifest>,

    #[serde(flatten)]
    pub registry: StaticRegistry,

    #[serde(default)]
    pub fixed: Vec<FixedEntry>,

    /// Identifiers the baking service can bake, with their model labels.
    #[serde(default)]
    pub bakeable: BTreeMap<ModelId, String>,

    /// Identifiers whose bake raises an error.
    #[serde(default)]
    pub failing: Vec<ModelId>,
}

/// Collaborators built from a snapshot.
pub struct HostState {
    pub baker: Arc<StaticBaker>,
    pub fixed: SharedFixedCache,
    pub registry: StaticRegistry,
    pub manifests: Vec<NamespaceManifest>,
    /// Every model handle, by label.
    pub models: HashMap<String, BakedModel>,
}

impl RegistrySnapshot {
    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the in-memory collaborators this snapshot describes.
    pub fn into_host_state(self) -> Result<HostState, SnapshotError> {
        let mut models: HashMap<String, BakedModel> = HashMap::new();
        let mut model = |label: &str| {
            models
                .entry(label.to_string())
                .or_insert_with(|| BakedModel::new(label))
                .clone()
        };

        let missing = model(&self.missing_model);

        let mut fixed = FixedBakedCache::new();
        for entry in &self.fixed {
            fixed.insert(entry.key()?, model(&entry.model));
        }

        let mut baker = StaticBaker::new(missing);
        for (id, label) in &self.bakeable {
            baker = baker.with_model(id.clone(), model(label));
        }
        for id in self.failing {
            baker = baker.with_failure(id);
        }

        Ok(HostState {
            baker: Arc::new(baker),
            fixed: fixed.into_shared(),
            registry: self.registry,
            manifests: self.namespaces,
            models,
        })
    }
}

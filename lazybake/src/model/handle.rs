//! Identity-compared handles to baked models.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

struct ModelPayload {
    label: String,
}

/// Opaque handle to a model produced by the baking service.
///
/// Cloning is cheap and yields the *same* model. Equality and hashing are by
/// reference identity: two models baked independently are never equal, even
/// when they carry the same label. Cache entries therefore never treat
/// structurally identical bakes as interchangeable.
#[derive(Clone)]
pub struct BakedModel {
    inner: Arc<ModelPayload>,
}

impl BakedModel {
    /// Create a new model handle.
    ///
    /// The label is only used for logging and diagnostics.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ModelPayload {
                label: label.into(),
            }),
        }
    }

    /// Diagnostic label given at creation.
    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// Whether two handles refer to the same baked model.
    pub fn ptr_eq(&self, other: &BakedModel) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for BakedModel {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for BakedModel {}

impl Hash for BakedModel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.inner) as usize).hash(state);
    }
}

impl fmt::Debug for BakedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BakedModel({} @ {:p})", self.inner.label, Arc::as_ptr(&self.inner))
    }
}

impl fmt::Display for BakedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.label)
    }
}

//! Model identity types.
//!
//! These are the value types every other module speaks in:
//!
//! - [`ModelId`]: the identifier a renderer asks for (`namespace:path#variant`)
//! - [`BakedModel`]: an opaque handle produced by the baking service, compared
//!   by reference identity
//! - [`Orientation`] / [`FixedKey`]: the transform + uv-lock part of the host's
//!   fixed baked-cache keys

mod handle;
mod id;
mod orientation;

pub use handle::BakedModel;
pub use id::{ModelId, ModelIdError, DEFAULT_NAMESPACE, INVENTORY_VARIANT};
pub use orientation::{FixedKey, Orientation, Rotation, Transform};

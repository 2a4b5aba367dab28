//! Orientation and fixed-cache key types.
//!
//! The host's fixed baked cache is keyed by (identifier, transform, uv-lock).
//! Only entries at [`Orientation::CANONICAL`] (identity transform, uv-lock off)
//! correspond to top-level registry lookups.

use std::fmt;

use super::ModelId;

/// Quarter-turn rotation about one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Rotation in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    /// Parse a rotation from degrees. Only multiples of 90 below 360 are valid.
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::R0),
            90 => Some(Rotation::R90),
            180 => Some(Rotation::R180),
            270 => Some(Rotation::R270),
            _ => None,
        }
    }
}

/// Block-model rotation: an X rotation followed by a Y rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Transform {
    pub x: Rotation,
    pub y: Rotation,
}

impl Transform {
    /// The identity transform (`X0_Y0`).
    pub const IDENTITY: Transform = Transform {
        x: Rotation::R0,
        y: Rotation::R0,
    };

    pub fn new(x: Rotation, y: Rotation) -> Self {
        Self { x, y }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}_y{}", self.x.degrees(), self.y.degrees())
    }
}

/// Transform plus uv-lock flag used when baking a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation {
    pub transform: Transform,
    pub uv_lock: bool,
}

impl Orientation {
    /// Default orientation used for top-level model lookups.
    pub const CANONICAL: Orientation = Orientation {
        transform: Transform::IDENTITY,
        uv_lock: false,
    };

    pub fn new(transform: Transform, uv_lock: bool) -> Self {
        Self { transform, uv_lock }
    }

    pub fn is_canonical(&self) -> bool {
        *self == Self::CANONICAL
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Composite key of the host's fixed baked cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedKey {
    pub id: ModelId,
    pub transform: Transform,
    pub uv_lock: bool,
}

impl FixedKey {
    pub fn new(id: ModelId, orientation: Orientation) -> Self {
        Self {
            id,
            transform: orientation.transform,
            uv_lock: orientation.uv_lock,
        }
    }

    /// Key for `id` at canonical orientation.
    pub fn canonical(id: ModelId) -> Self {
        Self::new(id, Orientation::CANONICAL)
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::new(self.transform, self.uv_lock)
    }

    /// Whether this is a default-orientation entry eligible for override
    /// substitution.
    pub fn is_canonical(&self) -> bool {
        self.orientation().is_canonical()
    }
}

impl fmt::Display for FixedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}", self.id, self.transform)?;
        if self.uv_lock {
            f.write_str(", uvlock")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ModelId {
        s.parse().unwrap()
    }

    #[test]
    fn test_canonical_orientation() {
        assert!(Orientation::CANONICAL.is_canonical());
        assert!(Orientation::default().is_canonical());
        assert!(!Orientation::new(Transform::IDENTITY, true).is_canonical());
        assert!(!Orientation::new(Transform::new(Rotation::R90, Rotation::R0), false).is_canonical());
    }

    #[test]
    fn test_fixed_key_canonical() {
        let key = FixedKey::canonical(id("minecraft:stone#"));
        assert!(key.is_canonical());

        let rotated = FixedKey::new(
            id("minecraft:stone#"),
            Orientation::new(Transform::new(Rotation::R0, Rotation::R180), false),
        );
        assert!(!rotated.is_canonical());
        assert_ne!(key, rotated);
    }

    #[test]
    fn test_rotation_degrees() {
        for rotation in [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270] {
            assert_eq!(Rotation::from_degrees(rotation.degrees()), Some(rotation));
        }
        assert_eq!(Rotation::from_degrees(45), None);
    }

    #[test]
    fn test_fixed_key_display() {
        let key = FixedKey::new(
            id("mymod:block/pipe"),
            Orientation::new(Transform::new(Rotation::R90, Rotation::R270), true),
        );
        assert_eq!(key.to_string(), "mymod:block/pipe [x90_y270, uvlock]");
    }
}

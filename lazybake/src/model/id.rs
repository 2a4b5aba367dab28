//! Model identifiers.
//!
//! A [`ModelId`] names a requestable model. The text form follows the host
//! engine's resource-location convention:
//!
//! - `namespace:path` for plain models (`minecraft:block/stone`)
//! - `namespace:path#variant` for block-state and item models
//!   (`minecraft:furnace#facing=north,lit=false`, `minecraft:stick#inventory`)
//!
//! A missing namespace defaults to [`DEFAULT_NAMESPACE`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Namespace assumed when an identifier has no `namespace:` prefix.
///
/// Parsing always uses this value. It is independent of
/// `CacheConfig::builtin_namespace`, which only controls which namespace
/// scoped views hide; write the namespace out when the two differ.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Variant used for item models.
pub const INVENTORY_VARIANT: &str = "inventory";

/// Errors produced when building or parsing a [`ModelId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelIdError {
    /// The path component is empty.
    #[error("Model identifier '{0}' has an empty path")]
    EmptyPath(String),

    /// The namespace contains characters outside `[a-z0-9_.-]`.
    #[error("Invalid namespace '{namespace}' in model identifier")]
    InvalidNamespace { namespace: String },

    /// The path contains characters outside `[a-z0-9_.-/]`.
    #[error("Invalid path '{path}' in model identifier")]
    InvalidPath { path: String },

    /// The variant contains a `#`.
    #[error("Invalid variant '{variant}' in model identifier")]
    InvalidVariant { variant: String },
}

/// Identifier of a requestable model.
///
/// Immutable once built. Ordering is lexicographic over
/// (namespace, path, variant), which keeps listings stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelId {
    namespace: String,
    path: String,
    variant: Option<String>,
}

fn valid_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

fn valid_path_char(c: char) -> bool {
    valid_namespace_char(c) || c == '/'
}

impl ModelId {
    /// Create an identifier without a variant.
    ///
    /// # Errors
    ///
    /// Returns [`ModelIdError`] if the namespace or path is malformed.
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Result<Self, ModelIdError> {
        let namespace = namespace.into();
        let path = path.into();

        if path.is_empty() {
            return Err(ModelIdError::EmptyPath(format!("{}:", namespace)));
        }
        if namespace.is_empty() || !namespace.chars().all(valid_namespace_char) {
            return Err(ModelIdError::InvalidNamespace { namespace });
        }
        if !path.chars().all(valid_path_char) {
            return Err(ModelIdError::InvalidPath { path });
        }

        Ok(Self {
            namespace,
            path,
            variant: None,
        })
    }

    /// Build an identifier from literals known to be valid.
    pub(crate) fn from_static(namespace: &'static str, path: &'static str) -> Self {
        debug_assert!(Self::new(namespace, path).is_ok());
        Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
            variant: None,
        }
    }

    /// Return a copy of this identifier carrying the given variant.
    ///
    /// An empty variant is legal: block states without properties use it.
    pub fn with_variant(&self, variant: impl Into<String>) -> Result<Self, ModelIdError> {
        let variant = variant.into();
        if variant.contains('#') {
            return Err(ModelIdError::InvalidVariant { variant });
        }
        Ok(Self {
            namespace: self.namespace.clone(),
            path: self.path.clone(),
            variant: Some(variant),
        })
    }

    /// The inventory model identifier for an item registered under this name.
    pub fn inventory(&self) -> Self {
        Self {
            namespace: self.namespace.clone(),
            path: self.path.clone(),
            variant: Some(INVENTORY_VARIANT.to_string()),
        }
    }

    /// The namespace (mod id) this identifier belongs to.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// The identifier with its variant stripped.
    pub fn without_variant(&self) -> Self {
        Self {
            namespace: self.namespace.clone(),
            path: self.path.clone(),
            variant: None,
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)?;
        if let Some(variant) = &self.variant {
            write!(f, "#{}", variant)?;
        }
        Ok(())
    }
}

impl FromStr for ModelId {
    type Err = ModelIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (location, variant) = match s.split_once('#') {
            Some((location, variant)) => (location, Some(variant)),
            None => (s, None),
        };

        let (namespace, path) = match location.split_once(':') {
            Some((namespace, path)) => (namespace, path),
            None => (DEFAULT_NAMESPACE, location),
        };

        if path.is_empty() {
            return Err(ModelIdError::EmptyPath(s.to_string()));
        }

        let id = Self::new(namespace, path)?;
        match variant {
            Some(variant) => id.with_variant(variant),
            None => Ok(id),
        }
    }
}

impl TryFrom<String> for ModelId {
    type Error = ModelIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ModelId> for String {
    fn from(id: ModelId) -> Self {
        id.to_string()
    }
}

//! Namespace-scoped registry views.
//!
//! Each namespace (mod) gets a view of the shared model registry whose key set
//! is restricted to top-level models of that namespace and of the namespaces
//! directly adjacent to it in the dependency graph. The engine's built-in
//! namespace is always excluded.
//!
//! ```text
//!  view("moda")   view("modb")   view("modc")
//!       │              │              │
//!       │  keys() / contains_key() from the visible set
//!       │              │              │
//!       └──────────────┼──────────────┘
//!                      ▼
//!          Arc<dyn ModelRegistry>  (everything else)
//! ```

mod graph;
mod scopes;
mod view;

pub use graph::{NamespaceGraph, NamespaceManifest};
pub use scopes::NamespaceScopes;
pub use view::ScopedRegistry;

//! Reload-cycle wiring.
//!
//! [`ReloadCycle`] constructs the adaptive cache and the namespace view
//! factory for one resource reload and hands them out explicitly. There is no
//! process-wide handle to the active cache: collaborators that need it receive
//! an `Arc` from the cycle.

mod reload;

pub use reload::ReloadCycle;

//! `resolve` command: look identifiers up through the adaptive cache.

use std::fmt;
use std::path::Path;

use lazybake::cache::{AdaptiveModelCache, ModelRegistry};
use lazybake::config::ConfigFile;
use lazybake::model::{BakedModel, ModelId};

use super::common::{parse_ids, start_cycle};
use crate::error::CliError;

/// How one identifier resolved.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A real model.
    Model(BakedModel),
    /// The Missing-Model Sentinel.
    Missing,
    /// Nothing is visible for the identifier.
    Absent,
}

impl Outcome {
    fn of(cache: &AdaptiveModelCache, id: &ModelId) -> Self {
        match cache.get(id) {
            Some(model) if model == cache.missing_model() => Outcome::Missing,
            Some(model) => Outcome::Model(model),
            None => Outcome::Absent,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Model(model) => write!(f, "{}", model),
            Outcome::Missing => write!(f, "(missing model)"),
            Outcome::Absent => write!(f, "(absent)"),
        }
    }
}

/// Resolve `ids` and print each outcome and the cache statistics.
pub fn run(
    snapshot: &Path,
    ids: &[String],
    prewarm: bool,
    config: &ConfigFile,
) -> Result<(), CliError> {
    let ids = parse_ids(ids)?;
    let (cycle, state) = start_cycle(snapshot, config)?;
    let cache = cycle.cache();

    if prewarm {
        let top_level: Vec<ModelId> = cycle.scopes().top_level().iter().cloned().collect();
        let resolved = cache.prewarm(&top_level);
        println!("Prewarmed {} of {} top-level models", resolved, top_level.len());
        println!();
    }

    for id in &ids {
        let outcome = Outcome::of(cache, id);
        println!("{} -> {} (baked {}x)", id, outcome, state.baker.bake_count(id));
    }

    println!();
    println!("Fixed entries: {}", cache.len());
    println!("Overrides:     {}", cache.override_count());
    println!("Stats:         {}", cache.stats());

    Ok(())
}

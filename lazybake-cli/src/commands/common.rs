//! Common helpers shared across CLI commands.

use std::path::Path;

use lazybake::app::ReloadCycle;
use lazybake::config::ConfigFile;
use lazybake::model::ModelId;
use lazybake::snapshot::{HostState, RegistrySnapshot};
use tracing::info;

use crate::error::CliError;

/// Load `snapshot` and start a reload cycle over it.
///
/// The host state is returned alongside the cycle so commands can inspect
/// the baker.
pub fn start_cycle(
    snapshot: &Path,
    config: &ConfigFile,
) -> Result<(ReloadCycle, HostState), CliError> {
    info!(snapshot = %snapshot.display(), "Loading registry snapshot");
    let state = RegistrySnapshot::load(snapshot)?.into_host_state()?;

    let cycle = ReloadCycle::start(
        state.baker.clone(),
        state.fixed.clone(),
        &state.registry,
        &state.manifests,
        config.cache.clone(),
    );
    Ok((cycle, state))
}

/// Parse command-line identifiers.
pub fn parse_ids(values: &[String]) -> Result<Vec<ModelId>, CliError> {
    values
        .iter()
        .map(|value| {
            value.parse().map_err(|source| CliError::InvalidId {
                value: value.clone(),
                source,
            })
        })
        .collect()
}

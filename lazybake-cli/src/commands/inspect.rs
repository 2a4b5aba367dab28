//! `inspect` command: list a namespace view.

use std::path::Path;

use lazybake::cache::ModelRegistry;
use lazybake::config::ConfigFile;

use super::common::start_cycle;
use crate::error::CliError;

/// Print the namespaces and models visible to `namespace`.
pub fn run(snapshot: &Path, namespace: &str, config: &ConfigFile) -> Result<(), CliError> {
    let (cycle, _state) = start_cycle(snapshot, config)?;
    let view = cycle.view(namespace);

    let mut namespaces: Vec<&String> = view.visible_namespaces().iter().collect();
    namespaces.sort();
    let mut keys: Vec<String> = view.keys().iter().map(ToString::to_string).collect();
    keys.sort();

    println!("Namespace: {}", view.namespace());
    println!(
        "Visible namespaces: {}",
        namespaces
            .iter()
            .map(|ns| ns.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();
    println!("Models ({}):", keys.len());
    for key in &keys {
        println!("  {}", key);
    }

    Ok(())
}

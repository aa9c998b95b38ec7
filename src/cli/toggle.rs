//! Toggle command implementation.

use crate::cli::args::ToggleArgs;
use crate::cli::output::Output;
use crate::config::Config;
use crate::error::{MirrorError, Result};
use crate::ignore::toggle_exclusion;
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub destination: String,
    /// True when the destination was removed from the ignore filters,
    /// i.e. mirrors are indexed again.
    pub enabled: bool,
}

pub fn run(vault: &Vault, config: &Config, args: &ToggleArgs, output: &Output) -> Result<()> {
    let destination = args
        .destination
        .clone()
        .unwrap_or_else(|| config.destination.clone());

    if destination.is_empty() {
        return Err(MirrorError::Config(
            "please set a destination folder in your settings".to_string(),
        ));
    }

    let store = vault.app_config_store();
    let enabled = toggle_exclusion(&store, &destination)?;

    output.print(&ToggleResponse {
        destination,
        enabled,
    })?;
    Ok(())
}

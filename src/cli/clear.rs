//! Clear command implementation.

use crate::cli::args::ClearArgs;
use crate::cli::output::Output;
use crate::config::Config;
use crate::error::Result;
use crate::generate::{GenerateSettings, Generator};
use crate::vault::Vault;

pub fn run(vault: &Vault, config: &Config, args: &ClearArgs, output: &Output) -> Result<()> {
    let settings = GenerateSettings {
        destination: args
            .destination
            .clone()
            .unwrap_or_else(|| config.destination.clone()),
        name_prefix: config.name_prefix.clone(),
    };

    let report = Generator::new(vault, settings).clear()?;

    for failure in &report.failures {
        output.warn(failure);
    }

    output.print(&report)?;
    Ok(())
}

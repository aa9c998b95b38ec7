//! Generate command implementation.

use crate::cli::args::GenerateArgs;
use crate::cli::output::Output;
use crate::config::Config;
use crate::error::Result;
use crate::generate::{GenerateSettings, Generator};
use crate::vault::Vault;

pub fn run(vault: &Vault, config: &Config, args: &GenerateArgs, output: &Output) -> Result<()> {
    let settings = GenerateSettings {
        destination: args
            .destination
            .clone()
            .unwrap_or_else(|| config.destination.clone()),
        name_prefix: args
            .prefix
            .clone()
            .unwrap_or_else(|| config.name_prefix.clone()),
    };

    output.info("generating mirrors...");
    let report = Generator::new(vault, settings).run()?;

    for failure in &report.failures {
        output.warn(failure);
    }

    output.print(&report)?;
    Ok(())
}

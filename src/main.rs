//! Canvas-mirror CLI entry point.

use canvas_mirror::cli::args::{Cli, Commands};
use canvas_mirror::cli::output::Output;
use canvas_mirror::cli::{clear, generate, list, toggle};
use canvas_mirror::config::Config;
use canvas_mirror::error::MirrorError;
use canvas_mirror::vault::Vault;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), MirrorError> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let vault_path = config.resolve_vault_path(cli.vault.as_deref())?;
    let vault = Vault::new(vault_path)?;

    let output = Output::new(cli.output_format(), cli.quiet);

    match &cli.command {
        Commands::Generate(args) => generate::run(&vault, &config, args, &output),
        Commands::Clear(args) => clear::run(&vault, &config, args, &output),
        Commands::Toggle(args) => toggle::run(&vault, &config, args, &output),
        Commands::List(args) => list::run(&vault, args, &output),
    }
}

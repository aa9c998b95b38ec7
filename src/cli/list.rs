//! List command implementation.

use crate::canvas::load_canvases;
use crate::cli::args::ListArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::ignore::IgnoreStore;
use crate::types::CanvasInfo;
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub canvases: Vec<CanvasInfo>,
    pub total: usize,
}

pub fn run(vault: &Vault, args: &ListArgs, output: &Output) -> Result<()> {
    let ignored = if args.all {
        Vec::new()
    } else {
        vault.app_config_store().ignore_filters()?
    };

    let files = vault.list_files()?;
    let canvases = load_canvases(vault, &files, &ignored)?;

    let infos: Vec<CanvasInfo> = canvases.iter().map(CanvasInfo::from_canvas).collect();
    let response = ListResponse {
        total: infos.len(),
        canvases: infos,
    };

    output.print(&response)?;
    Ok(())
}

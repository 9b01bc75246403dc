//! `compile`: build `.mo` files from `.po` files, then write one JSON
//! catalog per compiled file.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::{CommandResult, CommandSummary, CompileSummary, Conversion};
use crate::catalog::{self, catalog_output_path};
use crate::cli::args::CompileCommand;
use crate::config::load_config;
use crate::error::Error;

pub fn compile(cmd: CompileCommand) -> Result<CommandResult> {
    let cwd = env::current_dir()?;
    let config = load_config(&cwd)?.config;

    let locale_root = cmd
        .common
        .locale_root
        .unwrap_or_else(|| cwd.join(&config.locale_root));
    let output_root = cmd
        .output_dir
        .unwrap_or_else(|| cwd.join(config.output_root()));
    let locales = if cmd.common.locales.is_empty() {
        config.locales.clone()
    } else {
        cmd.common.locales
    };

    let po_files = catalog::find_po_files(&locale_root, &locales)
        .with_context(|| format!("Failed to find catalogs in {}", locale_root.display()))?;
    fs::create_dir_all(&output_root).map_err(|err| Error::output_write(&output_root, err))?;

    let conversions = build_catalogs(&po_files, &output_root)?;

    Ok(CommandSummary::Compile(CompileSummary { conversions }).into())
}

/// Compile and convert every `.po` file. Each file is independent, so they
/// run in parallel; the first failure fails the whole step.
pub fn build_catalogs(po_files: &[PathBuf], output_root: &Path) -> Result<Vec<Conversion>> {
    po_files
        .par_iter()
        .map(|po| build_catalog(po, output_root))
        .collect()
}

fn build_catalog(po: &Path, output_root: &Path) -> Result<Conversion> {
    let mo = catalog::compile(po)?;
    if !mo.exists() {
        return Err(Error::missing_catalog(&mo, "compiled catalog was not written").into());
    }

    let output = catalog_output_path(output_root, &mo);
    let message_count = catalog::convert(&mo, &output)?;

    Ok(Conversion {
        catalog: mo,
        output,
        message_count,
    })
}

//! `make`: walk the source tree, extract messages and update `.po` files.
//!
//! Files under the registered template directories with a registered
//! extension go through marker extraction; everything else with a standard
//! extension is handed to keyword extraction as is.

use std::{
    collections::BTreeSet,
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use super::{CommandResult, CommandSummary, MakeSummary};
use crate::catalog::{self, MessageIndex};
use crate::cli::args::MakeCommand;
use crate::config::{STANDARD_EXTENSIONS, load_config};
use crate::extract::{TemplateExtractor, collect_messages};
use crate::scan::{ScanRegistry, absolute_path};

pub fn make(cmd: MakeCommand) -> Result<CommandResult> {
    let cwd = env::current_dir()?;
    let mut config = load_config(&cwd)?.config;

    if !cmd.template_dirs.is_empty() {
        config.template_dirs = path_strings(&cmd.template_dirs);
    }
    if !cmd.template_exts.is_empty() {
        config.template_exts = cmd.template_exts;
    }
    if let Some(domain) = cmd.domain {
        config.domain = domain;
    }
    let source_root = absolute_path(
        &cmd.source_root
            .unwrap_or_else(|| cwd.join(&config.source_root)),
    );
    let locale_root = cmd
        .common
        .locale_root
        .unwrap_or_else(|| cwd.join(&config.locale_root));
    let locales = if cmd.common.locales.is_empty() {
        config.locales.clone()
    } else {
        cmd.common.locales
    };
    let verbose = cmd.common.verbose;

    let registry = config.scan_registry(&cwd);
    let ignores: Vec<Pattern> = config
        .ignores
        .iter()
        .map(|p| Pattern::new(p))
        .collect::<Result<_, _>>()
        .context("Invalid ignore pattern")?;

    let files = source_files(&source_root, &registry, &ignores, verbose)?;
    let extractor = TemplateExtractor::new(&registry);

    let mut index = MessageIndex::new();
    let mut template_files = 0;
    let mut skipped_files = Vec::new();

    for path in &files {
        let in_scope = extractor.is_in_scope(path)?;
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) if !in_scope => {
                if verbose {
                    eprintln!(
                        "{} Skipping {}: {}",
                        "warning:".bold().yellow(),
                        path.display(),
                        err
                    );
                }
                skipped_files.push(path.clone());
                continue;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        if verbose {
            println!("processing file {}", display_path(path, &source_root));
        }
        if in_scope {
            template_files += 1;
        }

        let extracted = extractor.extract(&source, path)?;
        let reference_path = display_path(path, &source_root);
        for message in collect_messages(&extracted) {
            index.insert(message.msgid, format!("{}:{}", reference_path, message.line));
        }
    }

    let template_path = locale_root.join(format!("{}.pot", config.domain));
    catalog::write_template(&template_path, &index)?;

    let targets: Vec<PathBuf> = if locales.is_empty() {
        let file_name = format!("{}.po", config.domain);
        if locale_root.exists() {
            catalog::find_po_files(&locale_root, &[])?
                .into_iter()
                .filter(|p| p.file_name().is_some_and(|n| *n == *file_name))
                .collect()
        } else {
            Vec::new()
        }
    } else {
        locales
            .iter()
            .map(|locale| catalog::po_path(&locale_root, locale, &config.domain))
            .collect()
    };

    let mut catalogs = Vec::new();
    for po in targets {
        let locale = locale_of(&po);
        let stats = catalog::update_catalog(&po, &locale, &index)?;
        catalogs.push((po, stats));
    }

    Ok(CommandSummary::Make(MakeSummary {
        files_scanned: files.len(),
        template_files,
        skipped_files,
        message_count: index.len(),
        template_path,
        catalogs,
    })
    .into())
}

/// Files to extract from: everything under the source root with a standard
/// or template extension, plus every in-scope template.
fn source_files(
    source_root: &Path,
    registry: &ScanRegistry,
    ignores: &[Pattern],
    verbose: bool,
) -> Result<BTreeSet<PathBuf>> {
    let mut files: BTreeSet<PathBuf> = registry.files()?.iter().cloned().collect();

    for entry in WalkDir::new(source_root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        let path_str = path.to_string_lossy();
        if ignores.iter().any(|p| p.matches(&path_str)) {
            continue;
        }
        if is_standard_file(path) || registry.matches_extension(path) {
            files.insert(absolute_path(path));
        }
    }

    Ok(files)
}

fn is_standard_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| STANDARD_EXTENSIONS.contains(&ext))
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

fn path_strings(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect()
}

/// Locale of `<root>/<locale>/LC_MESSAGES/<domain>.po`.
fn locale_of(po: &Path) -> String {
    po.parent()
        .and_then(Path::parent)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

//! Translation catalogs: `.po` maintenance, `.mo` parsing and JSON output.

pub mod convert;
pub mod mo;
pub mod po;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

pub use convert::{catalog_output_path, convert, to_json};
pub use mo::CompiledCatalog;
pub use po::{MessageIndex, UpdateStats, compile, update_catalog, write_template};

use crate::error::{Error, Result};

/// Directory holding one locale's catalogs under a locale root.
pub const MESSAGES_DIR: &str = "LC_MESSAGES";

/// `<locale_root>/<locale>/LC_MESSAGES/<domain>.po`
pub fn po_path(locale_root: &Path, locale: &str, domain: &str) -> PathBuf {
    locale_root
        .join(locale)
        .join(MESSAGES_DIR)
        .join(format!("{}.po", domain))
}

/// Every `<locale>/LC_MESSAGES/*.po` under `locale_root`, sorted.
///
/// When `locales` is non-empty only those locales are returned.
pub fn find_po_files(locale_root: &Path, locales: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(locale_root).min_depth(3).max_depth(3) {
        let entry = entry.map_err(|err| Error::ScopeResolution {
            path: locale_root.to_path_buf(),
            source: err.into(),
        })?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "po") {
            continue;
        }

        let Some(dir) = path.parent() else { continue };
        if dir.file_name().is_none_or(|name| name != MESSAGES_DIR) {
            continue;
        }
        let locale = dir
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy());
        if !locales.is_empty() && !locale.is_some_and(|l| locales.iter().any(|x| *x == l)) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use super::mo::CompiledCatalog;
use crate::error::{Error, Result};

/// Convert the compiled catalog at `catalog_path` into a flat JSON object at
/// `output_path`, without the metadata entry.
///
/// Missing parent directories of `output_path` are created. Returns the
/// number of messages written.
pub fn convert(catalog_path: &Path, output_path: &Path) -> Result<usize> {
    let catalog = CompiledCatalog::open(catalog_path)?;
    let content = to_json(catalog);
    let count = content.len();

    let serialized = serde_json::to_string(&Value::Object(content))
        .map_err(|err| Error::output_write(output_path, err.into()))?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| Error::output_write(parent, err))?;
    }
    fs::write(output_path, serialized).map_err(|err| Error::output_write(output_path, err))?;

    Ok(count)
}

/// Messages of `catalog` as a JSON object. Never contains the empty key.
pub fn to_json(catalog: CompiledCatalog) -> Map<String, Value> {
    catalog
        .into_messages()
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect()
}

/// Where the JSON for a compiled catalog goes:
/// `<output_root>/<locale-dir>/<locale-subdir>/<basename>.json`, the two
/// locale components being the last two of the catalog's directory
/// (`fr/LC_MESSAGES` for `locale/fr/LC_MESSAGES/django.mo`).
pub fn catalog_output_path(output_root: &Path, catalog_path: &Path) -> PathBuf {
    let mut path = output_root.to_path_buf();

    if let Some(dir) = catalog_path.parent() {
        let components: Vec<_> = dir.components().map(|c| c.as_os_str()).collect();
        for component in &components[components.len().saturating_sub(2)..] {
            path.push(component);
        }
    }

    let basename = catalog_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.push(format!("{}.json", basename));
    path
}

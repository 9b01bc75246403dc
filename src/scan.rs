//! Scan registry: which template files get custom marker extraction.
//!
//! A file is in scope when its absolute path is among the files found by
//! walking every registered directory and keeping names that end with a
//! registered extension. The walk result is cached until the registration
//! changes.

use std::{
    cell::OnceCell,
    collections::HashSet,
    fs, io,
    path::{Component, Path, PathBuf},
};

use walkdir::WalkDir;

use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct ScanRegistry {
    directories: Vec<PathBuf>,
    extensions: Vec<String>,
    resolved: OnceCell<HashSet<PathBuf>>,
}

impl ScanRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry built from a single call to [`ScanRegistry::register`].
    pub fn with_targets<D, E>(directories: D, extensions: E) -> Self
    where
        D: IntoIterator,
        D::Item: AsRef<Path>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let mut registry = Self::new();
        registry.register(directories, extensions);
        registry
    }

    /// Record directory trees and file extensions to scan for markers.
    ///
    /// Extensions accept comma separated lists and get a leading dot when it
    /// is missing. Registering a rule twice has no effect.
    pub fn register<D, E>(&mut self, directories: D, extensions: E)
    where
        D: IntoIterator,
        D::Item: AsRef<Path>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        for dir in directories {
            let dir = dir.as_ref().to_path_buf();
            if !self.directories.contains(&dir) {
                self.directories.push(dir);
            }
        }
        for ext in normalize_extensions(extensions) {
            if !self.extensions.contains(&ext) {
                self.extensions.push(ext);
            }
        }
        self.resolved = OnceCell::new();
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// True if the extension is one of the registered ones.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.extensions.iter().any(|ext| name.ends_with(ext)))
    }

    /// Whether `path` is one of the files discovered under the registered
    /// directories. Pure set membership on absolute, normalized paths.
    pub fn is_in_scope(&self, path: &Path) -> Result<bool> {
        let target = absolute_path(path);
        Ok(self.files()?.contains(&target))
    }

    /// All in-scope files, resolved on first use.
    pub fn files(&self) -> Result<&HashSet<PathBuf>> {
        if let Some(files) = self.resolved.get() {
            return Ok(files);
        }
        let files = self.resolve()?;
        Ok(self.resolved.get_or_init(|| files))
    }

    fn resolve(&self) -> Result<HashSet<PathBuf>> {
        let mut files = HashSet::new();

        for dir in &self.directories {
            let root = absolute_path(dir);
            let metadata = fs::metadata(&root).map_err(|source| Error::ScopeResolution {
                path: dir.clone(),
                source,
            })?;
            if !metadata.is_dir() {
                return Err(Error::ScopeResolution {
                    path: dir.clone(),
                    source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
                });
            }

            for entry in WalkDir::new(&root) {
                let entry = entry.map_err(|err| Error::ScopeResolution {
                    path: dir.clone(),
                    source: err.into(),
                })?;
                if entry.file_type().is_dir() {
                    continue;
                }
                if self.matches_extension(entry.path()) {
                    files.insert(entry.into_path());
                }
            }
        }

        Ok(files)
    }
}

/// Split comma separated extension lists, trim them and add a leading dot.
pub fn normalize_extensions<E>(extensions: E) -> Vec<String>
where
    E: IntoIterator,
    E::Item: AsRef<str>,
{
    let mut normalized = Vec::new();
    for ext in extensions {
        for part in ext.as_ref().split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let ext = if part.starts_with('.') {
                part.to_string()
            } else {
                format!(".{}", part)
            };
            if !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }
    }
    normalized
}

/// Absolute form of `path` with `.` and `..` folded lexically.
pub fn absolute_path(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

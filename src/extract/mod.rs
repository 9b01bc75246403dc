//! Translatable string extraction.
//!
//! Two strategies implement [`Extract`]:
//!
//! - [`MarkerExtractor`]: rewrites `<%_ ... _%>` markers into `_("""...""")`
//!   statements.
//! - [`StandardExtractor`]: the default path, hands the source text to
//!   keyword extraction unchanged.
//!
//! [`TemplateExtractor`] picks one per file using the [`ScanRegistry`] scope
//! predicate. A file is either fully marker-extracted or fully delegated.

pub mod collect;
pub mod marker;

use std::path::Path;

pub use collect::{CollectedMessage, collect_messages};
pub use marker::{ExtractableUnit, MarkerExtractor};

use crate::{error::Result, scan::ScanRegistry};

/// Turn source text into text that keyword extraction can consume.
pub trait Extract {
    fn extract(&self, source: &str, origin: &Path) -> String;
}

/// Default extraction: the source is already in extractable form.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardExtractor;

impl Extract for StandardExtractor {
    fn extract(&self, source: &str, _origin: &Path) -> String {
        source.to_string()
    }
}

/// Routes each file to marker or standard extraction based on scope.
///
/// The standard strategy is pluggable; anything implementing [`Extract`]
/// can stand in for the host framework's own extractor.
pub struct TemplateExtractor<'a, S = StandardExtractor> {
    registry: &'a ScanRegistry,
    standard: S,
}

impl<'a> TemplateExtractor<'a> {
    pub fn new(registry: &'a ScanRegistry) -> Self {
        Self {
            registry,
            standard: StandardExtractor,
        }
    }
}

impl<'a, S: Extract> TemplateExtractor<'a, S> {
    pub fn with_standard(registry: &'a ScanRegistry, standard: S) -> Self {
        Self { registry, standard }
    }

    /// Whether `origin` gets marker extraction.
    pub fn is_in_scope(&self, origin: &Path) -> Result<bool> {
        self.registry.is_in_scope(origin)
    }

    /// The strategy for `origin`: markers in scope, the standard one
    /// otherwise.
    pub fn select(&self, origin: &Path) -> Result<&dyn Extract> {
        let strategy: &dyn Extract = if self.is_in_scope(origin)? {
            &MarkerExtractor
        } else {
            &self.standard
        };
        Ok(strategy)
    }

    /// Run the selected strategy on `source`.
    ///
    /// Scope membership alone decides: an in-scope file without markers
    /// yields an empty string.
    pub fn extract(&self, source: &str, origin: &Path) -> Result<String> {
        Ok(self.select(origin)?.extract(source, origin))
    }
}

//! Textual catalogs: updating `.po` files with extracted messages and
//! compiling them into `.mo`.

use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

use polib::{
    catalog::Catalog,
    message::{Message, MessageView},
    metadata::CatalogMetadata,
    mo_file, po_file,
};

use crate::error::{Error, Result};

/// Extracted msgids with the `path:line` references they were found at.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MessageIndex {
    messages: BTreeMap<String, Vec<String>>,
}

impl MessageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, msgid: impl Into<String>, reference: impl Into<String>) {
        let references = self.messages.entry(msgid.into()).or_default();
        let reference = reference.into();
        if !references.contains(&reference) {
            references.push(reference);
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.messages
            .iter()
            .map(|(msgid, refs)| (msgid.as_str(), refs.as_slice()))
    }
}

/// Outcome of merging extracted messages into one `.po` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateStats {
    pub added: usize,
    pub existing: usize,
    pub created: bool,
}

fn metadata_for(locale: Option<&str>) -> CatalogMetadata {
    let mut metadata = CatalogMetadata::new();
    metadata.mime_version = "1.0".to_string();
    metadata.content_type = "text/plain; charset=UTF-8".to_string();
    metadata.content_transfer_encoding = "8bit".to_string();
    if let Some(locale) = locale {
        metadata.language = locale.to_string();
    }
    metadata
}

fn untranslated(msgid: &str, references: &[String]) -> Message {
    Message::build_singular()
        .with_source(references.join(" "))
        .with_msgid(msgid.to_string())
        .with_msgstr(String::new())
        .done()
}

fn write_po(catalog: &Catalog, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| Error::output_write(parent, err))?;
    }
    po_file::write_to_file(catalog, path).map_err(|err| Error::output_write(path, err))
}

fn parse_po(path: &Path) -> Result<Catalog> {
    po_file::parse(path).map_err(|err| Error::Compile {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

/// Write a fresh template (`.pot`) holding every message, untranslated.
pub fn write_template(path: &Path, messages: &MessageIndex) -> Result<()> {
    let mut catalog = Catalog::new(metadata_for(None));
    for (msgid, references) in messages.iter() {
        catalog.append_or_update(untranslated(msgid, references));
    }
    write_po(&catalog, path)
}

/// Merge `messages` into the `.po` file at `path`, creating it if needed.
///
/// Entries already present keep their translations; new msgids are appended
/// with an empty translation.
pub fn update_catalog(path: &Path, locale: &str, messages: &MessageIndex) -> Result<UpdateStats> {
    let created = !path.exists();
    let mut catalog = if created {
        Catalog::new(metadata_for(Some(locale)))
    } else {
        parse_po(path)?
    };

    let known: HashSet<String> = catalog.messages().map(|m| m.msgid().to_string()).collect();
    let mut added = 0;
    for (msgid, references) in messages.iter() {
        if known.contains(msgid) {
            continue;
        }
        catalog.append_or_update(untranslated(msgid, references));
        added += 1;
    }

    write_po(&catalog, path)?;
    Ok(UpdateStats {
        added,
        existing: known.len(),
        created,
    })
}

/// Compile `po_path` into a sibling `.mo` file and return its path.
pub fn compile(po_path: &Path) -> Result<PathBuf> {
    let mo_path = po_path.with_extension("mo");
    let catalog = parse_po(po_path)?;
    mo_file::write(&catalog, &mo_path).map_err(|err| Error::output_write(&mo_path, err))?;
    Ok(mo_path)
}

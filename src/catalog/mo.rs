//! GNU `.mo` reader.
//!
//! Layout: a magic number (which also gives the byte order), a revision,
//! the message count and the offsets of two tables of `(length, offset)`
//! pairs, one for original strings and one for translations. Keys keep their
//! embedded separators (`\u{4}` after a context, `\0` between singular and
//! plural ids) and plural translations stay joined by `\0`.

use std::{collections::BTreeMap, fs, path::Path};

use encoding_rs::Encoding;
use thiserror::Error;

use crate::error::{Error, Result};

pub const MAGIC: u32 = 0x9504_12de;
const HEADER_LEN: usize = 20;

/// Key of the metadata entry.
pub const HEADER_KEY: &str = "";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("bad magic number {0:#010x}")]
    BadMagic(u32),
    #[error("unsupported revision {0}")]
    UnsupportedRevision(u32),
    #[error("file is corrupt: {0}")]
    Corrupt(&'static str),
    #[error("unknown charset '{0}'")]
    UnknownCharset(String),
    #[error("invalid {0} text")]
    Undecodable(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    fn read_u32(self, bytes: &[u8], offset: usize) -> Result<u32, FormatError> {
        let end = offset
            .checked_add(4)
            .ok_or(FormatError::Corrupt("offset overflow"))?;
        let word: [u8; 4] = bytes
            .get(offset..end)
            .and_then(|slice| slice.try_into().ok())
            .ok_or(FormatError::Corrupt("truncated table"))?;
        Ok(match self {
            ByteOrder::Little => u32::from_le_bytes(word),
            ByteOrder::Big => u32::from_be_bytes(word),
        })
    }
}

/// A compiled catalog: message key to translation, metadata under `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledCatalog {
    entries: BTreeMap<String, String>,
}

impl CompiledCatalog {
    /// Read and parse the catalog at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|err| Error::missing_catalog(path, err))?;
        Self::parse(&bytes).map_err(|err| Error::missing_catalog(path, err))
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, FormatError> {
        let order = match ByteOrder::Little.read_u32(bytes, 0)? {
            MAGIC => ByteOrder::Little,
            other if other.swap_bytes() == MAGIC => ByteOrder::Big,
            other => return Err(FormatError::BadMagic(other)),
        };
        if bytes.len() < HEADER_LEN {
            return Err(FormatError::Corrupt("truncated header"));
        }

        let revision = order.read_u32(bytes, 4)?;
        if !matches!(revision >> 16, 0 | 1) {
            return Err(FormatError::UnsupportedRevision(revision));
        }
        let count = order.read_u32(bytes, 8)? as usize;
        let originals = order.read_u32(bytes, 12)? as usize;
        let translations = order.read_u32(bytes, 16)? as usize;

        // Both tables must fit before the count is trusted for anything.
        let table_end = |start: usize| {
            count
                .checked_mul(8)
                .and_then(|len| start.checked_add(len))
                .filter(|end| *end <= bytes.len())
        };
        if table_end(originals).is_none() || table_end(translations).is_none() {
            return Err(FormatError::Corrupt("truncated table"));
        }

        let mut raw = Vec::with_capacity(count);
        for entry in (0..count).map(|index| index * 8) {
            let key = read_string(bytes, order, originals + entry)?;
            let value = read_string(bytes, order, translations + entry)?;
            raw.push((key, value));
        }

        let charset = raw
            .iter()
            .find(|(key, _)| key.is_empty())
            .and_then(|(_, header)| charset_from_header(&String::from_utf8_lossy(header)));
        let encoding = match &charset {
            Some(label) => Encoding::for_label(label.as_bytes())
                .ok_or_else(|| FormatError::UnknownCharset(label.clone()))?,
            None => encoding_rs::UTF_8,
        };

        let mut entries = BTreeMap::new();
        for (key, value) in raw {
            entries.insert(decode(encoding, key, "key")?, decode(encoding, value, "value")?);
        }

        Ok(Self { entries })
    }

    /// The metadata entry, if the catalog has one.
    pub fn header(&self) -> Option<&str> {
        self.entries.get(HEADER_KEY).map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Consume the catalog, dropping the metadata entry.
    pub fn into_messages(mut self) -> BTreeMap<String, String> {
        self.entries.remove(HEADER_KEY);
        self.entries
    }
}

fn read_string(bytes: &[u8], order: ByteOrder, entry: usize) -> Result<Vec<u8>, FormatError> {
    let len = order.read_u32(bytes, entry)? as usize;
    let offset = order.read_u32(bytes, entry + 4)? as usize;
    let end = offset
        .checked_add(len)
        .ok_or(FormatError::Corrupt("offset overflow"))?;
    bytes
        .get(offset..end)
        .map(<[u8]>::to_vec)
        .ok_or(FormatError::Corrupt("string out of bounds"))
}

fn decode(encoding: &'static Encoding, bytes: Vec<u8>, what: &'static str) -> Result<String, FormatError> {
    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .map(|text| text.into_owned())
        .ok_or(FormatError::Undecodable(what))
}

fn charset_from_header(header: &str) -> Option<String> {
    header.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        if !key.trim().eq_ignore_ascii_case("content-type") {
            return None;
        }
        let (_, rest) = value.split_once("charset=")?;
        let charset = rest
            .split(|c: char| c == ';' || c.is_whitespace())
            .next()
            .unwrap_or_default();
        (!charset.is_empty()).then(|| charset.to_string())
    })
}

/// Encode entries as a little- or big-endian `.mo` file, without a hash
/// table. Entries are sorted by key as the format expects.
#[cfg(test)]
pub(crate) fn encode(entries: &[(&[u8], &[u8])], big_endian: bool) -> Vec<u8> {
    let mut sorted = entries.to_vec();
    sorted.sort();

    let put = |out: &mut Vec<u8>, value: u32| {
        if big_endian {
            out.extend_from_slice(&value.to_be_bytes());
        } else {
            out.extend_from_slice(&value.to_le_bytes());
        }
    };

    let count = sorted.len() as u32;
    let originals = HEADER_LEN as u32;
    let translations = originals + count * 8;
    let mut data_offset = translations + count * 8;

    let mut out = Vec::new();
    put(&mut out, MAGIC);
    put(&mut out, 0);
    put(&mut out, count);
    put(&mut out, originals);
    put(&mut out, translations);

    let mut data = Vec::new();
    let mut tables = (Vec::new(), Vec::new());
    for (key, _) in &sorted {
        put(&mut tables.0, key.len() as u32);
        put(&mut tables.0, data_offset);
        data.extend_from_slice(key);
        data.push(0);
        data_offset += key.len() as u32 + 1;
    }
    for (_, value) in &sorted {
        put(&mut tables.1, value.len() as u32);
        put(&mut tables.1, data_offset);
        data.extend_from_slice(value);
        data.push(0);
        data_offset += value.len() as u32 + 1;
    }

    out.extend(tables.0);
    out.extend(tables.1);
    out.extend(data);
    out
}

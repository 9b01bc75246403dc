//! glotmark - gettext tooling for underscore-style client templates
//!
//! Translatable strings in client templates are wrapped in `<%_ ... _%>`
//! markers. glotmark pulls them into gettext `.po` files alongside the
//! regular `_("...")` calls, and turns compiled `.mo` catalogs into flat
//! JSON objects a client-side template library can load.
//!
//! ## Module Structure
//!
//! - `catalog`: `.po` updates, `.mo` parsing and JSON conversion
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `error`: Error kinds of the pipeline
//! - `extract`: Marker and standard extraction strategies
//! - `scan`: Scan registry deciding which files get marker extraction

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod scan;

pub use error::{Error, Result};

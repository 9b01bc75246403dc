use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::scan::ScanRegistry;

pub const CONFIG_FILE_NAME: &str = ".glotmarkrc.json";

/// Extensions always handed to the standard extractor during `make`.
pub const STANDARD_EXTENSIONS: &[&str] = &["py", "html", "txt"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub template_dirs: Vec<String>,
    #[serde(default = "default_template_exts")]
    pub template_exts: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_locale_root")]
    pub locale_root: String,
    #[serde(default)]
    pub output_dir: Option<String>,
    #[serde(default = "default_domain")]
    pub domain: String,
    #[serde(default)]
    pub locales: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
}

fn default_template_exts() -> Vec<String> {
    ["tpl", "ejs"].map(String::from).to_vec()
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_locale_root() -> String {
    "./locale".to_string()
}

fn default_domain() -> String {
    "django".to_string()
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/.git/**", "**/venv/**"]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_dirs: Vec::new(),
            template_exts: default_template_exts(),
            source_root: default_source_root(),
            locale_root: default_locale_root(),
            output_dir: None,
            domain: default_domain(),
            locales: Vec::new(),
            ignores: default_ignores(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or the
    /// domain is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.domain.trim().is_empty() {
            anyhow::bail!("'domain' must not be empty");
        }

        Ok(())
    }

    /// Scan registry for the configured template directories, resolved
    /// against `base_dir`.
    pub fn scan_registry(&self, base_dir: &Path) -> ScanRegistry {
        ScanRegistry::with_targets(
            self.template_dirs.iter().map(|dir| base_dir.join(dir)),
            &self.template_exts,
        )
    }

    /// Where compiled JSON catalogs go: `outputDir`, else the locale root.
    pub fn output_root(&self) -> &str {
        self.output_dir.as_deref().unwrap_or(&self.locale_root)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

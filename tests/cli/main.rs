use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use serde_json::Value;
use tempfile::TempDir;

mod compile;
mod convert;
mod init;
mod make;

const BIN_NAME: &str = "glotmark";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops config discovery at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: impl AsRef<[u8]>) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn make_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("make");
        cmd
    }

    pub fn compile_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("compile");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn read_json(&self, path: &str) -> Result<Value> {
        let content = self.read_file(path)?;
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Little-endian `.mo` bytes for `entries`, which must be sorted by key.
pub fn mo_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let count = entries.len() as u32;
    let originals = 20u32;
    let translations = originals + count * 8;
    let mut offset = translations + count * 8;

    let mut header = Vec::new();
    for word in [0x9504_12de_u32, 0, count, originals, translations] {
        header.extend_from_slice(&word.to_le_bytes());
    }

    let mut key_table = Vec::new();
    let mut value_table = Vec::new();
    let mut data = Vec::new();
    for (table, pick) in [(&mut key_table, 0), (&mut value_table, 1)] {
        for (key, value) in entries {
            let text = if pick == 0 { key } else { value };
            table.extend_from_slice(&(text.len() as u32).to_le_bytes());
            table.extend_from_slice(&offset.to_le_bytes());
            data.extend_from_slice(text.as_bytes());
            data.push(0);
            offset += text.len() as u32 + 1;
        }
    }

    [header, key_table, value_table, data].concat()
}

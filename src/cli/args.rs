//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `make`: Extract messages from sources and templates into `.po` files
//! - `compile`: Compile `.po` files and convert the results to JSON catalogs
//! - `convert`: Convert a single compiled catalog to JSON
//! - `init`: Initialize glotmark configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Make(cmd)) => cmd.common.verbose,
            Some(Command::Compile(cmd)) => cmd.common.verbose,
            Some(Command::Convert(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Arguments shared by catalog commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory holding <locale>/LC_MESSAGES catalogs (overrides config file)
    #[arg(long)]
    pub locale_root: Option<PathBuf>,

    /// Locale to process, repeatable (default: config file, then all found)
    #[arg(short = 'l', long = "locale")]
    pub locales: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct MakeCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory containing underscore templates, repeatable
    #[arg(short = 't', long = "template-dir")]
    pub template_dirs: Vec<PathBuf>,

    /// Template extension, repeatable or comma separated
    #[arg(short = 'x', long = "template-ext")]
    pub template_exts: Vec<String>,

    /// Source root to walk (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Message domain (overrides config file)
    #[arg(short, long)]
    pub domain: Option<String>,
}

#[derive(Debug, Args)]
pub struct CompileCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory for JSON catalogs (default: config outputDir, then locale root)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ConvertCommand {
    /// Compiled .mo catalog
    pub catalog: PathBuf,

    /// Destination JSON file
    pub output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings, including <%_ ... _%> template markers, into .po files
    Make(MakeCommand),
    /// Compile .po files to .mo and convert them to JSON catalogs
    Compile(CompileCommand),
    /// Convert one compiled .mo catalog to a JSON catalog
    Convert(ConvertCommand),
    /// Initialize a new .glotmarkrc.json configuration file
    Init,
}

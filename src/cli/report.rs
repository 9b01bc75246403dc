//! Human-readable command output.
//!
//! Separate from the pipeline so glotmark can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, CompileSummary, Conversion, InitSummary, MakeSummary,
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Prefix of per-catalog conversion lines.
const CONVERT_TAG: &str = "[underi18n]";

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Make(summary) => print_make(summary, verbose, writer),
        CommandSummary::Compile(summary) => print_compile(summary, verbose, writer),
        CommandSummary::Convert(conversion) => {
            if verbose {
                print_conversion(conversion, writer);
            }
            print_converted(1, writer);
        }
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

fn print_make<W: Write>(summary: &MakeSummary, verbose: bool, writer: &mut W) {
    if !summary.skipped_files.is_empty() && !verbose {
        let _ = writeln!(
            writer,
            "{} {} could not be read (use {} for details)",
            "warning:".bold().yellow(),
            plural(summary.skipped_files.len(), "file"),
            "-v".cyan()
        );
    }

    for (path, stats) in &summary.catalogs {
        let action = if stats.created { "created" } else { "updated" };
        let _ = writeln!(
            writer,
            "  {} {} ({} new)",
            action,
            path.display(),
            stats.added
        );
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} from {} ({} with template markers) into {}",
            plural(summary.message_count, "message"),
            plural(summary.files_scanned, "file"),
            summary.template_files,
            summary.template_path.display()
        )
        .green()
    );
}

fn print_compile<W: Write>(summary: &CompileSummary, verbose: bool, writer: &mut W) {
    if summary.conversions.is_empty() {
        let _ = writeln!(
            writer,
            "{} no .po files found",
            "warning:".bold().yellow()
        );
        return;
    }

    if verbose {
        for conversion in &summary.conversions {
            print_conversion(conversion, writer);
        }
    }
    print_converted(summary.conversions.len(), writer);
}

fn print_conversion<W: Write>(conversion: &Conversion, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} converting {} > {}",
        CONVERT_TAG.cyan(),
        display(&conversion.catalog),
        display(&conversion.output)
    );
}

fn print_converted<W: Write>(count: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Converted {}", plural(count, "catalog")).green()
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

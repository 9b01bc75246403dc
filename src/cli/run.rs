use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, compile::compile, convert::convert, init::init, make::make,
    },
};

/// Dispatch to the handler for the parsed subcommand.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Make(cmd)) => make(cmd),
        Some(Command::Compile(cmd)) => compile(cmd),
        Some(Command::Convert(cmd)) => convert(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

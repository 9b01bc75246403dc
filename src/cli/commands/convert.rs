use anyhow::Result;

use super::{CommandResult, CommandSummary, Conversion};
use crate::cli::args::ConvertCommand;
use crate::catalog;

pub fn convert(cmd: ConvertCommand) -> Result<CommandResult> {
    let message_count = catalog::convert(&cmd.catalog, &cmd.output)?;

    Ok(CommandSummary::Convert(Conversion {
        catalog: cmd.catalog,
        output: cmd.output,
        message_count,
    })
    .into())
}

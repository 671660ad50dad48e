//! CLI command for data export

use std::path::PathBuf;

use clap::Args;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::ExportFormat;

use super::Context;

/// Arguments of the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (defaults to expenses.<format> in the data directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format (defaults to the configured format, csv unless changed)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,
}

/// Handle the export command
pub fn handle_export_command(ctx: &Context, args: ExportArgs) -> ExpenseResult<()> {
    let service = ctx.open_service()?;

    let format = args.format.unwrap_or(ctx.settings.export_format);
    let output = args
        .output
        .unwrap_or_else(|| ctx.paths.export_file(format.extension()));

    let contents = format.render(service.list())?;
    std::fs::write(&output, contents).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to write file {}: {}",
            output.display(),
            e
        ))
    })?;

    println!(
        "Exported {} expenses to: {}",
        service.list().len(),
        output.display()
    );

    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use expense_cli::cli::{
    handle_expense_command, handle_export_command, handle_history_command, Context,
    ExpenseCommands, ExportArgs,
};
use expense_cli::config::paths::DATA_DIR_ENV;
use expense_cli::config::{ExpensePaths, Settings};

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record expenses from the command line, then list, filter, \
                  summarize, update, delete and export them. Data lives in a \
                  single JSON file."
)]
struct Cli {
    /// Directory holding settings, data and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Export expenses to a file
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths, writing default settings if missing
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    // clap has already folded EXPENSE_CLI_DATA_DIR into `data_dir`
    let paths = ExpensePaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_default(&paths)?;
    let ctx = Context::new(paths, settings);

    match command {
        Commands::Expense(cmd) => handle_expense_command(&ctx, cmd)?,
        Commands::Export(args) => handle_export_command(&ctx, args)?,
        Commands::History { limit } => handle_history_command(&ctx, limit)?,
        Commands::Config => {
            if !ctx.paths.settings_file().exists() {
                ctx.settings.save(&ctx.paths)?;
            }

            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", ctx.paths.base_dir().display());
            println!("Data file:      {}", ctx.paths.expenses_file().display());
            println!("Audit log:      {}", ctx.paths.audit_log().display());
            println!("Settings file:  {}", ctx.paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", ctx.settings.currency_symbol);
            println!("  Default category: {}", ctx.settings.default_category);
            println!("  Audit log:        {}", ctx.settings.audit_enabled);
            println!(
                "  Export format:    {}",
                ctx.settings.export_format.extension()
            );
        }
    }

    Ok(())
}

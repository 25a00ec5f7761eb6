//! tablespan CLI - storage-distribution estimation for tables without temporal columns.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "tablespan")]
#[command(about = "Estimates how table storage would spread across calendar buckets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Shared database connection flags.
#[derive(Args)]
pub(crate) struct ConnectArgs {
    /// Database host
    #[arg(long, default_value = "localhost")]
    pub(crate) host: String,

    /// Database port
    #[arg(short = 'P', long, default_value = "3306")]
    pub(crate) port: u16,

    /// User name
    #[arg(short, long, default_value = "root")]
    pub(crate) user: String,

    /// Password. Prompted for interactively when omitted.
    #[arg(short, long)]
    pub(crate) password: Option<String>,

    /// Schema to analyze
    #[arg(short, long)]
    pub(crate) database: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate storage distribution for tables without a temporal column
    Analyze {
        #[command(flatten)]
        connect: ConnectArgs,

        /// Analysis window start (YYYY-MM-DD)
        #[arg(long, default_value = "2000-01-01")]
        start: String,

        /// Analysis window end (YYYY-MM-DD). Defaults to now.
        #[arg(long)]
        end: Option<String>,

        /// Output file path. Defaults to db_no_datetime_estimate_<timestamp>.json
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List tables without any datetime/timestamp column
    List {
        #[command(flatten)]
        connect: ConnectArgs,

        /// Show tables that do have temporal columns, with the column names
        #[arg(long)]
        temporal: bool,
    },

    /// Report empty tables in the output document shape
    EmptyTables {
        #[command(flatten)]
        connect: ConnectArgs,

        /// Output file path. Defaults to db_empty_tables_<timestamp>.json
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Flatten a previously written document into a CSV summary
    Summarize {
        /// The JSON document to flatten
        input: PathBuf,

        /// Output CSV path
        #[arg(short, long, default_value = "db_size_summary.csv")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    display::init_tracing(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Analyze {
            connect,
            start,
            end,
            output,
        } => commands::analyze::analyze(connect, &start, end.as_deref(), output, cli.quiet).await,
        Commands::List { connect, temporal } => commands::list::list_tables(connect, temporal).await,
        Commands::EmptyTables { connect, output } => {
            commands::empty_tables::empty_tables(connect, output, cli.quiet).await
        }
        Commands::Summarize { input, output } => commands::summarize::summarize(&input, &output),
    }
}

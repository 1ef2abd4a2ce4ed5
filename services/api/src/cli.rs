use crate::commands::{run_classify, run_export, run_report, ClassifyArgs, ExportArgs, ReportArgs};
use crate::server;
use campus_leave::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Campus Leave",
    about = "Classify, summarize, and export campus ERP leave records",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Work with leave payloads exported from the ERP backend
    Leave {
        #[command(subcommand)]
        command: LeaveCommand,
    },
}

#[derive(Subcommand, Debug)]
enum LeaveCommand {
    /// Classify a single status/approver combination
    Classify(ClassifyArgs),
    /// Print summary statistics and an optional record listing
    Report(ReportArgs),
    /// Write the filtered records as CSV
    Export(ExportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// JSON leave payload to serve (overrides APP_LEAVE_SNAPSHOT)
    #[arg(long)]
    pub(crate) snapshot: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Leave { command } => match command {
            LeaveCommand::Classify(args) => run_classify(args),
            LeaveCommand::Report(args) => run_report(args),
            LeaveCommand::Export(args) => run_export(args),
        },
    }
}

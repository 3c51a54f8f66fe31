use crate::commands::{run_ask, run_dashboard, run_extract, AskArgs, DashboardArgs, ExtractArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use complysmart::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ComplySmart",
    about = "Serve and inspect the compliance audit dashboard from the command line",
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
    /// Run an audit and print the compliance dashboard
    Dashboard(DashboardArgs),
    /// Ask the audit service a compliance question
    Ask(AskArgs),
    /// Extract category scores from text on a file or stdin
    Extract(ExtractArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Dashboard(args) => run_dashboard(args).await,
        Command::Ask(args) => run_ask(args).await,
        Command::Extract(args) => run_extract(args),
    }
}

use crate::demo::{run_clarity_report, run_demo, ClarityReportArgs, DemoArgs};
use crate::server;
use campus_portal::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Campus Portal",
    about = "Run the campus portal service or inspect clarity data from the command line",
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
    /// Work with the domain clarity index
    Clarity {
        #[command(subcommand)]
        command: ClarityCommand,
    },
    /// Run an end-to-end CLI demo covering scoring and the student feed
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ClarityCommand {
    /// Score an interaction-log export and print the clarity dashboard
    Report(ClarityReportArgs),
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
        Command::Clarity {
            command: ClarityCommand::Report(args),
        } => run_clarity_report(args),
        Command::Demo(args) => run_demo(args),
    }
}

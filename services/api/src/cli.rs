use crate::demo::{run_demo, DemoArgs};
use crate::report::{run_assessment, AssessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use eligibility_engine::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Programme Eligibility Engine",
    about = "Check programme eligibility and score support applications",
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
    /// Assess a beneficiary against programmes read from a JSON file
    Assess(AssessArgs),
    /// Run the assessment on a built-in sample beneficiary and catalogue
    Demo(DemoArgs),
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
        Command::Assess(args) => run_assessment(args),
        Command::Demo(args) => run_demo(args),
    }
}

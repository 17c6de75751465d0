use crate::demo::{run_lead_parse, run_market_rankings, LeadParseArgs, MarketRankArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use growth_ops::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Growth Ops",
    about = "Market prioritization and WhatsApp lead tooling for the aiforjr growth team",
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
    /// Market prioritization tooling
    Markets {
        #[command(subcommand)]
        command: MarketsCommand,
    },
    /// WhatsApp lead tooling
    Leads {
        #[command(subcommand)]
        command: LeadsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum MarketsCommand {
    /// Print the ranked market table with TAM/SAM/SOM totals
    Rank(MarketRankArgs),
}

#[derive(Subcommand, Debug)]
enum LeadsCommand {
    /// Parse pasted lead text and print outreach messages with wa.me links
    Parse(LeadParseArgs),
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
        Command::Markets {
            command: MarketsCommand::Rank(args),
        } => run_market_rankings(args),
        Command::Leads {
            command: LeadsCommand::Parse(args),
        } => run_lead_parse(args),
    }
}

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tix::cmd::config::{self as config_cmd, ConfigArgs};
use tix::cmd::ticket::{self, TicketCommand};
use tix::config::AppConfig;
use tix::context::AppContext;
use tix::error::AppResult;
use tix::infra::HttpTicketGateway;
use tix::store::SyncStore;

#[derive(Parser)]
#[command(name = "tix", author, version, about = "Ticketing client")]
struct Cli {
    /// Base URL of the ticket API (overrides TIX_API_URL and the config file).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ticket(TicketCommand),
    /// Manage CLI configuration.
    Config(ConfigArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(error) = run(cli).await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tix={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> AppResult<()> {
    match cli.command {
        Commands::Config(args) => config_cmd::run(args.command),
        Commands::Ticket(command) => run_ticket(cli.api_url, command).await,
    }
}

async fn run_ticket(api_url: Option<String>, command: TicketCommand) -> AppResult<()> {
    let config = AppConfig::load(api_url)?;
    debug!(api_base_url = %config.api_base_url, "using ticket API");

    let gateway = Arc::new(HttpTicketGateway::new(config.api_base_url.clone()));
    let store = Arc::new(SyncStore::new(gateway));
    let context = AppContext::new(config, store);

    let output = ticket::run(&context, command).await?;
    println!("{output}");

    Ok(())
}

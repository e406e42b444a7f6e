use anyhow::Result;
use clap::{Parser, Subcommand};

use movesem::Scenario;

mod commands;

#[derive(Parser)]
#[command(name = "movesem")]
#[command(about = "Traces the copy, move and destruction operations of owning values")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace); overridden by RUST_LOG
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the given scenarios in order
    Run {
        /// Scenario names (see `list`)
        #[arg(required = true, value_parser = commands::run::parse_scenario)]
        scenarios: Vec<Scenario>,
    },

    /// List the available scenarios
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None => commands::run::run(&Scenario::ALL),
        Some(Commands::Run { scenarios }) => commands::run::run(&scenarios),
        Some(Commands::List) => commands::list::run(),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

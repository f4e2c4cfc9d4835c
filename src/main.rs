//! Trait Guesser - CLI
//!
//! Think of a character; the game asks the most informative yes/no questions until it knows.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use trait_guesser::{
    commands::{GameConfig, analyze_attributes, run_play, run_simulation},
    core::ResponsePolicy,
    dataset::characters,
    interactive::LineConsole,
    output::{print_analysis_result, print_simulation_statistics},
    solver::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "trait_guesser",
    about = "Akinator-style guessing game driven by information theory",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: entropy (default), minimax, random
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: String,

    /// Only accept an exact, lowercase "yes" as an affirmative answer
    #[arg(long, global = true)]
    strict: bool,

    /// Log every scored attribute to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Score every attribute against the full character list
    Analyze,

    /// Play an automated game for every character
    Simulate {
        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to set subscriber")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let config = GameConfig {
        strategy: StrategyType::from_name(&cli.strategy),
        policy: if cli.strict {
            ResponsePolicy::Strict
        } else {
            ResponsePolicy::Lenient
        },
    };
    let entities = characters();

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut console = LineConsole::stdio();
            run_play(&mut console, &entities, &config).context("console I/O failed")?;
        }
        Commands::Analyze => print_analysis_result(&analyze_attributes(&entities)),
        Commands::Simulate { quiet } => {
            let stats = run_simulation(&entities, config.strategy, !quiet);
            print_simulation_statistics(&stats);
        }
    }

    Ok(())
}

//! Wheel of Fortune - CLI
//!
//! Terminal Wheel of Fortune with TUI and line-based modes, plus a bot simulator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wheel_of_fortune::{
    bot::DEFAULT_RECOGNITION,
    commands::{SimulationConfig, run_simple, run_simulation},
    game::{DEFAULT_ROUNDS, DEFAULT_VOWEL_COST, GameConfig, MAX_PLAYERS},
    output::print_simulation_result,
    phrases::{PhraseCatalog, loader::load_from_dir},
};

/// Where the TUI writes logs when `--verbose` is set
const TUI_LOG_FILE: &str = "wheel_of_fortune.log";

#[derive(Parser)]
#[command(
    name = "wheel_of_fortune",
    about = "Spin the wheel, call letters and solve the puzzle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory of phrase files, one `<category>.txt` per category (default: built-in phrases)
    #[arg(long, global = true)]
    phrases: Option<PathBuf>,

    /// Rounds per game
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_ROUNDS,
        value_parser = parse_rounds
    )]
    rounds: usize,

    /// Price of a vowel
    #[arg(long, global = true, default_value_t = DEFAULT_VOWEL_COST)]
    vowel_cost: u32,

    /// Seed for the wheel and phrase selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log game decisions (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Play many bot-only games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Bots per game
        #[arg(short, long, default_value = "3", value_parser = parse_players)]
        players: usize,

        /// Revealed share of the puzzle at which bots solve (0.0 to 1.0)
        #[arg(
            long,
            default_value_t = DEFAULT_RECOGNITION,
            value_parser = parse_ratio
        )]
        recognition: f64,
    },
}

fn parse_rounds(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("'{s}' is not a positive number of rounds")),
    }
}

fn parse_players(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if (1..=MAX_PLAYERS).contains(&n) => Ok(n),
        _ => Err(format!("players must be between 1 and {MAX_PLAYERS}")),
    }
}

fn parse_ratio(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(r) if (0.0..=1.0).contains(&r) => Ok(r),
        _ => Err(format!("'{s}' is not between 0.0 and 1.0")),
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }))
}

/// Install the log subscriber
///
/// The TUI owns the terminal, so it only logs (to a file) when asked to.
fn init_tracing(verbose: bool, tui: bool) -> Result<()> {
    if !tui {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(verbose))
            .with_writer(io::stderr)
            .init();
    } else if verbose {
        let log_file = std::fs::File::create(TUI_LOG_FILE)
            .with_context(|| format!("creating log file {TUI_LOG_FILE}"))?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(verbose))
            .with_writer(std::sync::Arc::new(log_file))
            .with_ansi(false)
            .init();
    }
    Ok(())
}

/// Load the phrase catalog from `--phrases`, or the built-in one
fn load_catalog(dir: Option<&Path>) -> Result<PhraseCatalog> {
    let catalog = match dir {
        Some(dir) => load_from_dir(dir)
            .with_context(|| format!("loading phrases from {}", dir.display()))?,
        None => PhraseCatalog::embedded(),
    };

    anyhow::ensure!(!catalog.is_empty(), "the phrase catalog has no phrases");
    info!(
        categories = catalog.categories().len(),
        phrases = catalog.len(),
        "phrase catalog loaded"
    );
    Ok(catalog)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(cli.verbose, matches!(command, Commands::Play))?;

    let catalog = load_catalog(cli.phrases.as_deref())?;
    let config = GameConfig::new(cli.rounds, cli.vowel_cost);

    match command {
        Commands::Play => run_play_command(&catalog, config, cli.seed),
        Commands::Simple => run_simple(&catalog, config, cli.seed).context("simple mode failed"),
        Commands::Simulate {
            count,
            players,
            recognition,
        } => run_simulate_command(
            &catalog,
            SimulationConfig {
                games: count,
                players,
                recognition,
                seed: cli.seed,
                game: config,
                show_progress: true,
            },
        ),
    }
}

fn run_play_command(catalog: &PhraseCatalog, config: GameConfig, seed: Option<u64>) -> Result<()> {
    use wheel_of_fortune::interactive::run_tui;

    run_tui(catalog, config, seed)
}

fn run_simulate_command(catalog: &PhraseCatalog, config: SimulationConfig) -> Result<()> {
    println!(
        "Simulating {} games with {} bots each...",
        config.games, config.players
    );

    let result = run_simulation(catalog, &config).context("simulation failed")?;
    print_simulation_result(&result);
    Ok(())
}

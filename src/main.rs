//! Dead & Injured - CLI
//!
//! Play the duel in a TUI or on plain stdin/stdout, or let the computer
//! crack secrets on its own.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dead_injured::{
    commands::{
        SolveConfig, analyze_guess, print_test_all_statistics, random_secrets, run_benchmark,
        run_simple, run_test_all, solve_secret,
    },
    game::{GameConfig, MAX_ATTEMPTS, Session},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::StrategyType,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dead_injured",
    about = "Dead & Injured: guess the computer's 4-digit number before it guesses yours",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: heuristic (default), sequential, random
    #[arg(short, long, global = true, default_value = "heuristic")]
    strategy: String,

    /// Seed for the random generator (default: OS entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Attempts each side gets per round (at least 1)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_attempts: u32,

    /// Computer guesses picked at random before it plays the first candidate
    #[arg(short, long, global = true, default_value_t = 2)]
    random_openings: u32,

    /// Where log output goes (filter with RUST_LOG)
    #[arg(long, global = true, default_value = "dead_injured.log")]
    log_file: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (the duel without the TUI)
    Simple,

    /// Let the computer crack a specific secret
    Solve {
        /// The secret to crack
        secret: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a guess splits the 5,040 possible secrets
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Benchmark the computer on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Test the computer on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_logging(path: &str) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("Failed to create log file {path}"))?;

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    let strategy = StrategyType::from_name(&cli.strategy, cli.random_openings);
    info!(seed, strategy = %cli.strategy, max_attempts = cli.max_attempts, "Starting");

    let mut rng = StdRng::seed_from_u64(seed);
    let config = GameConfig::new(cli.max_attempts, strategy.clone());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, rng),
        Commands::Simple => {
            let mut session = Session::new(config, rng);
            run_simple(&mut session).context("Simple mode failed")
        }
        Commands::Solve { secret, verbose } => {
            let mut solve_config = SolveConfig::new(secret);
            solve_config.max_attempts = cli.max_attempts;
            let result = solve_secret(&solve_config, &strategy, &mut rng)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { guess } => {
            let result = analyze_guess(&guess)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} random secrets (seed {seed})...");
            let secrets = random_secrets(count, &mut rng);
            let result = run_benchmark(&strategy, &secrets, cli.max_attempts, &mut rng);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(&cli.strategy, &strategy, cli.max_attempts, limit, seed);
            Ok(())
        }
    }
}

fn run_test_all_command(
    strategy_name: &str,
    strategy: &StrategyType,
    max_attempts: u32,
    limit: Option<usize>,
    seed: u64,
) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Dead & Injured Test ");
    println!("{}", "═".repeat(70));
    println!("\nStrategy: {strategy_name}");
    println!("Max attempts: {max_attempts}");
    println!("Seed: {seed}");
    println!();

    let stats = run_test_all(strategy, max_attempts, limit, seed);
    print_test_all_statistics(&stats);
}

fn run_play_command(config: GameConfig, rng: StdRng) -> Result<()> {
    use dead_injured::interactive::{App, run_tui};

    let app = App::new(Session::new(config, rng));
    run_tui(app)
}

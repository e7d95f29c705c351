//! Robot Mastermind - CLI
//!
//! Strategy play, analysis and timed simulations with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use robot_mastermind::{
    commands::{
        SimulateConfig, SolveConfig, analyze_code, run_simple, run_simulations, run_test_all,
        solve_code,
    },
    core::{Code, Universe},
    output::{
        print_analysis_result, print_simulation_report, print_solve_result,
        print_test_all_statistics,
    },
    simulation::SimulationConfig,
    solver::{StrategyConfig, StrategyKind, StrategyType},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "robot_mastermind",
    about = "Mastermind solver for a button-pressing robot",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: minimax (default), entropy, expected-size, most-parts, simple, dummy, random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: StrategyKind,

    /// Number of buttons in the secret code (1-6)
    #[arg(short, long, global = true, default_value_t = 3)]
    length: usize,

    /// Pick the first best code instead of the one closest to the robot
    #[arg(long, global = true)]
    no_tie_break: bool,

    /// Seed for random secrets and the random strategy
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Solve a specific secret code
    Solve {
        /// The secret, e.g. "0,1,2", "012" or "T0 T1 T2"
        code: Code,

        /// Show verbose output with consistent counts and travel
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a code as an opening guess under every criterion
    Analyze {
        /// Code to analyze
        code: Code,
    },

    /// Run timed robot sessions against random secrets
    Simulate {
        /// Number of sessions
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,

        /// Time limit per session in seconds
        #[arg(short, long, default_value_t = 1000)]
        time_limit: u64,

        /// Robot speed in mm/s
        #[arg(long, default_value_t = 100.0)]
        speed: f64,

        /// Weight of measured thinking time (0 ignores computation)
        #[arg(long, default_value_t = 0.0)]
        cpu_slowness: f64,

        /// Run sessions in parallel
        #[arg(short, long)]
        parallel: bool,
    },

    /// Test the strategy on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(long)]
        limit: Option<usize>,

        /// Give up on a secret after this many guesses
        #[arg(long, default_value_t = 100)]
        max_guesses: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(matches!(command, Commands::Play))?;

    let config = StrategyConfig::new(cli.length, cli.strategy)?
        .with_tie_break(!cli.no_tie_break)
        .with_seed(cli.seed);
    let universe = Universe::new(config.code_length)?;
    info!(
        strategy = %config.kind,
        length = config.code_length,
        tie_break = config.tie_break,
        codes = universe.len(),
        "universe ready"
    );

    match command {
        Commands::Play => run_play_command(&config, &universe),
        Commands::Simple => run_simple(StrategyType::build(&config, &universe)?),
        Commands::Solve { code, verbose } => run_solve_command(&config, &universe, code, verbose),
        Commands::Analyze { code } => {
            let result = analyze_code(&code, &universe)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Simulate {
            count,
            time_limit,
            speed,
            cpu_slowness,
            parallel,
        } => {
            let simulate = SimulateConfig {
                simulations: count,
                simulation: SimulationConfig {
                    time_limit_secs: time_limit,
                    robot_speed: speed,
                    cpu_slowness,
                    code_length: config.code_length,
                    seed: config.seed,
                    ..SimulationConfig::default()
                },
                strategy: config,
                parallel,
                show_progress: true,
            };
            let result = run_simulations(&simulate, &universe)?;
            print_simulation_report(&result);
            Ok(())
        }
        Commands::TestAll { limit, max_guesses } => {
            println!("\n{}", "═".repeat(70));
            println!(" Comprehensive Robot Mastermind Test ");
            println!("{}", "═".repeat(70));
            println!("\nTesting against {} possible secrets", universe.len());
            println!("Strategy: {}\n", config.kind);

            let stats = run_test_all(&config, &universe, limit, max_guesses, true)?;
            print_test_all_statistics(&stats);
            Ok(())
        }
    }
}

/// Log to stderr, or to a file while the TUI owns the terminal
fn init_logging(to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if to_file {
        let log_file = std::fs::File::create("robot_mastermind.log")
            .context("Failed to create log file")?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Arc::new(log_file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn run_solve_command(
    config: &StrategyConfig,
    universe: &Universe,
    code: Code,
    verbose: bool,
) -> Result<()> {
    anyhow::ensure!(
        code.len() == config.code_length,
        "Secret {code} has {} buttons, expected {}",
        code.len(),
        config.code_length
    );

    let mut strategy = StrategyType::build(config, universe)?;
    let result = solve_code(&SolveConfig::new(code), &mut strategy)
        .with_context(|| format!("Failed to solve {code}"))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_play_command(config: &StrategyConfig, universe: &Universe) -> Result<()> {
    use robot_mastermind::interactive::{App, run_tui};

    let app = App::new(StrategyType::build(config, universe)?);
    run_tui(app)
}

//! Leafy CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "leafy")]
#[command(about = "Leafy spanning trees for maximum-leaf spanning tree instances", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve every graph of an input file
    Solve {
        /// Input file
        input: PathBuf,

        /// Where to write the trees (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Solver config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the randomized trial count
        #[arg(long)]
        trials: Option<usize>,

        /// Override the base seed
        #[arg(long)]
        seed: Option<u64>,

        /// Run graphs and trials on one thread
        #[arg(long)]
        sequential: bool,

        /// Print a JSON summary of the winners
        #[arg(long)]
        json: bool,
    },
    /// Validate the format of an input file
    CheckInput {
        input: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate an output file against its input file
    CheckOutput {
        input: PathBuf,
        output: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Generate random instances with a planted leafy tree
    Generate {
        /// Nodes per graph
        #[arg(short, long, default_value = "100")]
        nodes: usize,

        /// Extra edges hiding the planted tree
        #[arg(short = 'm', long, default_value = "400")]
        extra_edges: usize,

        /// Number of graphs
        #[arg(long, default_value = "1")]
        count: usize,

        /// Children per internal node of the planted tree
        #[arg(long, default_value = "4")]
        branch_factor: usize,

        #[arg(long, default_value = "0")]
        seed: u64,

        /// Where to write the instances (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "leafy={log_level},leafy_core={log_level},leafy_io={log_level}"
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Solve {
            input,
            output,
            config,
            trials,
            seed,
            sequential,
            json,
        } => {
            let mut config = commands::load_config(config.as_deref())?;
            if let Some(trials) = trials {
                config.trials = trials;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if sequential {
                config.parallel = false;
            }
            config.validate()?;
            commands::solve(&input, output.as_deref(), config, json)
        }
        Commands::CheckInput { input, config } => {
            let config = commands::load_config(config.as_deref())?;
            commands::check_input(&input, &config)
        }
        Commands::CheckOutput {
            input,
            output,
            config,
        } => {
            let config = commands::load_config(config.as_deref())?;
            commands::check_output(&input, &output, &config)
        }
        Commands::Generate {
            nodes,
            extra_edges,
            count,
            branch_factor,
            seed,
            output,
        } => commands::generate(nodes, extra_edges, count, branch_factor, seed, output.as_deref()),
        Commands::Version => {
            println!("Leafy v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

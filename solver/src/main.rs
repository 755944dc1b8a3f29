#![forbid(unsafe_code)]
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use flowshop::MemeticOptions;
use log::{debug, error};

mod commands;

#[derive(Debug, Parser)]
/// Memetic flow-shop solver
struct App {
    #[clap(flatten)]
    verbose: Verbosity,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search a low-makespan schedule for a Taillard instance file
    Solve {
        #[clap(required = true)]
        instance: PathBuf,
        #[clap(flatten)]
        tuning: Tuning,
    },
    /// Solve every instance in a folder, writing results to a file
    Benchmark {
        #[clap(required = true)]
        instance_folder: PathBuf,
        #[clap(required = true)]
        output: PathBuf,
        #[clap(flatten)]
        tuning: Tuning,
    },
}

/// The tuning surface of the heuristic; everything not exposed here keeps
/// the reference defaults.
#[derive(Debug, Args)]
pub struct Tuning {
    /// Wall-clock search budget in minutes
    #[clap(long, default_value_t = 1.0)]
    time_limit: f64,

    /// Population size, held constant across generations
    #[clap(long, default_value_t = 40)]
    pop_size: usize,

    /// Elite fraction kept when the population is restarted
    #[clap(long, default_value_t = 0.5)]
    preserved_prop: f64,

    /// Disable the local search stage (plain genetic algorithm)
    #[clap(long)]
    no_local_search: bool,

    /// Pair crossover parents by duration rank instead of at random
    #[clap(long)]
    gentrification: bool,
}

impl Tuning {
    fn options(&self) -> MemeticOptions {
        MemeticOptions {
            pop_init_size: self.pop_size,
            time_limit: self.time_limit,
            preserved_prop: self.preserved_prop,
            use_ls: !self.no_local_search,
            gentrification: self.gentrification,
            ..Default::default()
        }
    }
}

fn main() {
    let args: App = App::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    debug!("{args:?}");

    if let Err(err) = match args.command {
        Commands::Solve { instance, tuning } => commands::solve(instance, tuning.options()),
        Commands::Benchmark {
            instance_folder,
            output,
            tuning,
        } => commands::benchmark(instance_folder, output, tuning.options()),
    } {
        error!("An error occurred: {}", err);
    }
}

use std::time::{Duration, Instant};

use log::{debug, info};
use thiserror::Error;

use crate::convergence::{initialize_threshold, is_convergent};
use crate::neighborhood::{create_insert_neighbors, create_swap_neighbors, Move};
use crate::operators::local_search::{local_search, LocalSearchArguments};
use crate::operators::{crossover, initial, mutation};
use crate::population::{best_of, population_statistics, GenerationStatistics};
use crate::problem::Flowshop;
use crate::schedule::Schedule;

/// Tuning knobs of the memetic heuristic, validated once at run start.
#[derive(Debug, Clone)]
pub struct MemeticOptions {
    /// Share of the initial population generated at random.
    pub random_prop: f64,
    /// Share of the initial population derived from priority rules.
    pub deter_prop: f64,
    /// How many of the priority-rule schedules seed the deterministic share.
    pub best_deter: usize,
    pub pop_init_size: usize,
    /// Wall-clock search budget in minutes.
    pub time_limit: f64,
    pub cross_1_point_prob: f64,
    pub cross_2_points_prob: f64,
    pub cross_position_prob: f64,
    /// Pair crossover parents by duration rank instead of at random.
    pub gentrification: bool,
    pub mut_swap_prob: f64,
    pub mut_insert_prob: f64,
    /// Disabling local search turns the run into a plain genetic algorithm.
    pub use_ls: bool,
    pub ls_max_iterations: u32,
    pub ls_swap_prob: f64,
    pub ls_insert_prob: f64,
    pub max_neighbors_nb: usize,
    /// How many of the best members each local search pass refines.
    pub ls_subset_size: usize,
    /// Elite fraction carried over a population restart.
    pub preserved_prop: f64,
}

impl Default for MemeticOptions {
    fn default() -> Self {
        Self {
            random_prop: 0.5,
            deter_prop: 0.5,
            best_deter: 2,
            pop_init_size: 40,
            time_limit: 1.0,
            cross_1_point_prob: 0.4,
            cross_2_points_prob: 0.3,
            cross_position_prob: 0.2,
            gentrification: false,
            mut_swap_prob: 0.3,
            mut_insert_prob: 0.3,
            use_ls: true,
            ls_max_iterations: 30,
            ls_swap_prob: 0.5,
            ls_insert_prob: 0.5,
            max_neighbors_nb: 50,
            ls_subset_size: 5,
            preserved_prop: 0.5,
        }
    }
}

impl MemeticOptions {
    /// Range checks for every parameter; the controller refuses to start on
    /// the first violation.
    pub fn validate(&self) -> Result<(), MemeticError> {
        probability("random_prop", self.random_prop)?;
        probability("deter_prop", self.deter_prop)?;
        probability("cross_1_point_prob", self.cross_1_point_prob)?;
        probability("cross_2_points_prob", self.cross_2_points_prob)?;
        probability("cross_position_prob", self.cross_position_prob)?;
        probability("mut_swap_prob", self.mut_swap_prob)?;
        probability("mut_insert_prob", self.mut_insert_prob)?;
        probability("ls_swap_prob", self.ls_swap_prob)?;
        probability("ls_insert_prob", self.ls_insert_prob)?;
        probability("preserved_prop", self.preserved_prop)?;

        if self.random_prop + self.deter_prop > 1.0 + f64::EPSILON {
            return Err(MemeticError::InvalidParameter {
                name: "random_prop + deter_prop",
                value: self.random_prop + self.deter_prop,
            });
        }
        if self.cross_1_point_prob + self.cross_2_points_prob + self.cross_position_prob
            > 1.0 + f64::EPSILON
        {
            return Err(MemeticError::InvalidParameter {
                name: "crossover probabilities",
                value: self.cross_1_point_prob
                    + self.cross_2_points_prob
                    + self.cross_position_prob,
            });
        }
        if self.pop_init_size < 2 {
            return Err(MemeticError::InvalidParameter {
                name: "pop_init_size",
                value: self.pop_init_size as f64,
            });
        }
        if !self.time_limit.is_finite() || self.time_limit <= 0.0 {
            return Err(MemeticError::InvalidParameter {
                name: "time_limit",
                value: self.time_limit,
            });
        }
        if self.deter_prop > 0.0 && self.best_deter == 0 {
            return Err(MemeticError::InvalidParameter {
                name: "best_deter",
                value: self.best_deter as f64,
            });
        }
        if self.use_ls && self.ls_swap_prob + self.ls_insert_prob <= 0.0 {
            return Err(MemeticError::InvalidParameter {
                name: "ls_swap_prob + ls_insert_prob",
                value: self.ls_swap_prob + self.ls_insert_prob,
            });
        }
        if self.use_ls && self.max_neighbors_nb == 0 {
            return Err(MemeticError::InvalidParameter {
                name: "max_neighbors_nb",
                value: self.max_neighbors_nb as f64,
            });
        }

        Ok(())
    }
}

fn probability(name: &'static str, value: f64) -> Result<(), MemeticError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(MemeticError::InvalidParameter { name, value })
    }
}

#[derive(Debug, Error)]
pub enum MemeticError {
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("population is empty")]
    EmptyPopulation,
    #[error("operator {stage} returned {found} schedules, expected {expected}")]
    OperatorFailure {
        stage: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Everything a finished run reports: the append-only per-generation
/// statistics (one leading entry for the initial population), the best
/// schedule observed anywhere in the run, and the generation indices at
/// which the population was restarted.
#[derive(Debug)]
pub struct RunResult {
    pub statistics: Vec<GenerationStatistics>,
    pub best: Schedule,
    pub restarts: Vec<usize>,
}

/// One generation of the operator pipeline: crossover, mutation, then the
/// optional local search. Each stage consumes the population and returns a
/// new one of the same size.
pub fn update_population(
    flowshop: &Flowshop,
    population: Vec<Schedule>,
    options: &MemeticOptions,
    swap_neighbors: &[Move],
    insert_neighbors: &[Move],
) -> Result<Vec<Schedule>, MemeticError> {
    let expected = population.len();

    let population = crossover::crossover(
        flowshop,
        population,
        options.cross_1_point_prob,
        options.cross_2_points_prob,
        options.cross_position_prob,
        options.gentrification,
    );
    check_stage("crossover", expected, population.len())?;

    let population = mutation::mutation(
        flowshop,
        population,
        options.mut_swap_prob,
        options.mut_insert_prob,
    );
    check_stage("mutation", expected, population.len())?;

    if !options.use_ls {
        return Ok(population);
    }

    let population = local_search(
        population,
        &LocalSearchArguments {
            flowshop,
            max_iterations: options.ls_max_iterations,
            swap_prob: options.ls_swap_prob,
            insert_prob: options.ls_insert_prob,
            max_neighbors: options.max_neighbors_nb,
            swap_neighbors,
            insert_neighbors,
            subset_size: options.ls_subset_size,
        },
    );
    check_stage("local_search", expected, population.len())?;

    Ok(population)
}

fn check_stage(
    stage: &'static str,
    expected: usize,
    found: usize,
) -> Result<(), MemeticError> {
    if found == expected {
        Ok(())
    } else {
        Err(MemeticError::OperatorFailure {
            stage,
            expected,
            found,
        })
    }
}

/// Exploitation-preserving diversification: keeps the lowest-duration
/// `preserved_prop` fraction and refills the rest with fresh random members.
/// Output size always equals input size.
pub fn restart_population(
    population: Vec<Schedule>,
    flowshop: &Flowshop,
    preserved_prop: f64,
) -> Vec<Schedule> {
    let preserved_size = (population.len() as f64 * preserved_prop) as usize;
    let random_size = population.len() - preserved_size;

    let mut restarted = crate::population::extract_best(&population, preserved_size);
    restarted.append(&mut initial::random_initial_pop(flowshop, random_size));
    restarted
}

/// Predictive budget gate: a generation is only started when the elapsed
/// time, the previous generation's cost and a one second safety margin still
/// fit the budget. An in-flight generation is never preempted, so the actual
/// run may overshoot by up to one generation.
pub fn budget_allows(elapsed: Duration, last_generation: Duration, time_limit: Duration) -> bool {
    elapsed + last_generation + Duration::from_secs(1) < time_limit
}

/// Stagnation check over the statistics history: fires when the history
/// holds at least 10 entries, no restart happened in the last 10
/// generations, and the best-of-generation duration was flat across the
/// most recent 10 entries. The restart distance keeps stagnation-triggered
/// restarts at least 10 generations apart.
pub fn is_stagnant(
    statistics: &[GenerationStatistics],
    restarts: &[usize],
    generation: usize,
) -> bool {
    if statistics.len() < 10 {
        return false;
    }
    if let Some(&last_restart) = restarts.last() {
        if generation < last_restart + 10 {
            return false;
        }
    }

    let window = &statistics[statistics.len() - 10..];
    let lowest = window.iter().map(|entry| entry.min).min();
    let highest = window.iter().map(|entry| entry.min).max();
    lowest == highest
}

/// Memetic heuristic for the permutation flow-shop problem: generational
/// crossover/mutation/local-search pipeline with entropy- and
/// stagnation-triggered restarts under a wall-clock budget.
pub fn memetic_heuristic(
    flowshop: &Flowshop,
    options: &MemeticOptions,
) -> Result<RunResult, MemeticError> {
    options.validate()?;
    info!("options: {options:?}");

    let start = Instant::now();
    let time_limit = Duration::from_secs_f64(options.time_limit * 60.0);

    // Structural, derived from the job count alone; shared by every local
    // search invocation of the run.
    let swap_neighbors = create_swap_neighbors(flowshop);
    let insert_neighbors = create_insert_neighbors(flowshop);
    let entropy_threshold = initialize_threshold(options.pop_init_size);

    let mut population = initial::initial_pop(
        flowshop,
        options.random_prop,
        options.deter_prop,
        options.best_deter,
        options.pop_init_size,
    );
    check_stage("initial_pop", options.pop_init_size, population.len())?;

    let mut statistics = vec![population_statistics(&population)];
    let mut overall_best = best_of(&population)
        .ok_or(MemeticError::EmptyPopulation)?
        .clone();
    let mut restarts: Vec<usize> = Vec::new();
    let mut generation = 0_usize;
    let mut generation_time = Duration::ZERO;

    while budget_allows(start.elapsed(), generation_time, time_limit) {
        generation += 1;
        let generation_start = Instant::now();

        population = update_population(
            flowshop,
            population,
            options,
            &swap_neighbors,
            &insert_neighbors,
        )?;

        let generation_best = best_of(&population).ok_or(MemeticError::EmptyPopulation)?;
        if generation_best.duration() < overall_best.duration() {
            debug!(
                "generation {generation}: new best duration {}",
                generation_best.duration()
            );
            overall_best = generation_best.clone();
        }
        statistics.push(population_statistics(&population));

        let stagnant = is_stagnant(&statistics, &restarts, generation);
        if is_convergent(&population, entropy_threshold) || stagnant {
            debug!("generation {generation}: restart (stagnant: {stagnant})");
            restarts.push(generation);
            population = restart_population(population, flowshop, options.preserved_prop);
            check_stage("restart", options.pop_init_size, population.len())?;
        }

        generation_time = generation_start.elapsed();
    }

    info!(
        "best duration: {} after {generation} generations and {} restarts",
        overall_best.duration(),
        restarts.len()
    );

    Ok(RunResult {
        statistics,
        best: overall_best,
        restarts,
    })
}

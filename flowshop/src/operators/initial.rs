use log::debug;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::population::extract_best;
use crate::problem::Flowshop;
use crate::schedule::Schedule;

/// Builds the starting population: a deterministic share derived from
/// priority-rule orders and a random share of shuffled permutations.
///
/// `deter_prop` of `pop_init_size` (rounded down) comes from the `best_deter`
/// lowest-duration rule schedules, repeated with single-swap perturbations
/// once the plain rule orders are used up. `random_prop` sizes the random
/// share; any rounding remainder also lands there, so the output always has
/// exactly `pop_init_size` members.
pub fn initial_pop(
    flowshop: &Flowshop,
    random_prop: f64,
    deter_prop: f64,
    best_deter: usize,
    pop_init_size: usize,
) -> Vec<Schedule> {
    let deter_size = (deter_prop * pop_init_size as f64) as usize;
    let random_size = pop_init_size - deter_size;
    debug!(
        "initial population: {deter_size} deterministic (deter_prop {deter_prop}), \
         {random_size} random (random_prop {random_prop})"
    );

    let mut population = Vec::with_capacity(pop_init_size);
    if deter_size > 0 {
        let seeds = extract_best(&priority_rule_schedules(flowshop), best_deter.max(1));

        for index in 0..deter_size {
            let seed = &seeds[index % seeds.len()];
            if index < seeds.len() {
                population.push(seed.clone());
            } else {
                population.push(perturbed(flowshop, seed));
            }
        }
    }
    population.append(&mut random_initial_pop(flowshop, random_size));

    population
}

/// Pure-random generation mode, also used to refill populations on restart.
pub fn random_initial_pop(flowshop: &Flowshop, size: usize) -> Vec<Schedule> {
    (0..size).map(|_| random_schedule(flowshop)).collect()
}

fn random_schedule(flowshop: &Flowshop) -> Schedule {
    let mut sequence: Vec<usize> = (0..flowshop.jobs()).collect();
    sequence.shuffle(&mut thread_rng());
    Schedule::evaluate(flowshop, sequence)
}

/// Candidate schedules from classic dispatching orders. Sorting keys:
/// total processing time (both directions), first-machine time descending,
/// last-machine time ascending.
fn priority_rule_schedules(flowshop: &Flowshop) -> Vec<Schedule> {
    let jobs: Vec<usize> = (0..flowshop.jobs()).collect();
    let last_machine = flowshop.machines() - 1;

    let mut orders: Vec<Vec<usize>> = vec![jobs.clone(), jobs.clone(), jobs.clone(), jobs];
    orders[0].sort_by_key(|&job| std::cmp::Reverse(flowshop.total_processing_time(job)));
    orders[1].sort_by_key(|&job| flowshop.total_processing_time(job));
    orders[2].sort_by_key(|&job| std::cmp::Reverse(flowshop.processing_time(job, 0)));
    orders[3].sort_by_key(|&job| flowshop.processing_time(job, last_machine));

    orders
        .into_iter()
        .map(|order| Schedule::evaluate(flowshop, order))
        .collect()
}

fn perturbed(flowshop: &Flowshop, seed: &Schedule) -> Schedule {
    let mut rng = thread_rng();
    let mut sequence = seed.sequence().to_vec();

    if sequence.len() >= 2 {
        let i = rng.gen_range(0..sequence.len());
        let j = (i + rng.gen_range(1..sequence.len())) % sequence.len();
        sequence.swap(i, j);
    }

    Schedule::evaluate(flowshop, sequence)
}

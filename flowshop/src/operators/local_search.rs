use log::trace;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use rayon::prelude::*;

use crate::neighborhood::{apply_insert, apply_swap, Move};
use crate::problem::Flowshop;
use crate::schedule::{makespan, Schedule};
use crate::MoveType;

/// Everything a local search pass needs besides the population itself. The
/// neighbor tables are built once per run and shared across invocations.
pub struct LocalSearchArguments<'a> {
    pub flowshop: &'a Flowshop,
    pub max_iterations: u32,
    pub swap_prob: f64,
    pub insert_prob: f64,
    pub max_neighbors: usize,
    pub swap_neighbors: &'a [Move],
    pub insert_neighbors: &'a [Move],
    pub subset_size: usize,
}

/// Refines the `subset_size` lowest-duration members in place in the
/// population order; everyone else passes through untouched.
pub fn local_search(population: Vec<Schedule>, args: &LocalSearchArguments) -> Vec<Schedule> {
    let mut indices: Vec<usize> = (0..population.len()).collect();
    indices.sort_by_key(|&index| population[index].duration());
    indices.truncate(args.subset_size);

    let mut improved = population;
    for index in indices {
        improved[index] = improve_schedule(improved[index].clone(), args);
    }

    improved
}

/// Steepest-descent walk over a sampled neighborhood: per iteration draw the
/// move kind, sample up to `max_neighbors` moves from its table, take the
/// best strictly improving one, stop at a sampled local optimum.
fn improve_schedule(schedule: Schedule, args: &LocalSearchArguments) -> Schedule {
    let mut rng = thread_rng();
    let mut current = schedule;

    for _iteration in 0..args.max_iterations {
        let draw: f64 = rng.gen();
        let move_type = if draw < args.swap_prob {
            MoveType::Swap
        } else if draw < args.swap_prob + args.insert_prob {
            MoveType::Insert
        } else {
            continue;
        };

        let table = match move_type {
            MoveType::Swap => args.swap_neighbors,
            MoveType::Insert => args.insert_neighbors,
        };

        let sampled: Vec<Move> = table
            .choose_multiple(&mut rng, args.max_neighbors)
            .copied()
            .collect();

        let best_neighbor = sampled
            .par_iter()
            .map(|&neighbor| {
                let sequence = match move_type {
                    MoveType::Swap => apply_swap(current.sequence(), neighbor),
                    MoveType::Insert => apply_insert(current.sequence(), neighbor),
                };
                let duration = makespan(args.flowshop, &sequence);
                (sequence, duration)
            })
            .min_by_key(|(_, duration)| *duration);

        match best_neighbor {
            Some((sequence, duration)) if duration < current.duration() => {
                trace!("local search improved {} -> {duration}", current.duration());
                current = Schedule::evaluate(args.flowshop, sequence);
            }
            _ => break,
        }
    }

    current
}

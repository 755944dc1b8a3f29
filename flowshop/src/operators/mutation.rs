use rand::{thread_rng, Rng};

use crate::neighborhood::{apply_insert, apply_swap};
use crate::problem::Flowshop;
use crate::schedule::Schedule;

/// Applies swap and insert mutations independently to every member, each
/// with its own probability. Untouched members are passed through without
/// re-evaluation.
pub fn mutation(
    flowshop: &Flowshop,
    population: Vec<Schedule>,
    mut_swap_prob: f64,
    mut_insert_prob: f64,
) -> Vec<Schedule> {
    let mut rng = thread_rng();

    population
        .into_iter()
        .map(|schedule| {
            if schedule.sequence().len() < 2 {
                return schedule;
            }

            let mut sequence = schedule.sequence().to_vec();
            let mut mutated = false;

            if rng.gen::<f64>() < mut_swap_prob {
                sequence = apply_swap(&sequence, random_move(&mut rng, sequence.len()));
                mutated = true;
            }
            if rng.gen::<f64>() < mut_insert_prob {
                sequence = apply_insert(&sequence, random_move(&mut rng, sequence.len()));
                mutated = true;
            }

            if mutated {
                Schedule::evaluate(flowshop, sequence)
            } else {
                schedule
            }
        })
        .collect()
}

fn random_move(rng: &mut impl Rng, len: usize) -> (usize, usize) {
    let i = rng.gen_range(0..len);
    let j = (i + rng.gen_range(1..len)) % len;
    (i, j)
}

#[cfg(test)]
mod tests {
    use rand::thread_rng;

    use crate::population::tests::toy_population;
    use crate::problem::tests::toy_flowshop;

    use super::{mutation, random_move};

    #[test]
    fn zero_probabilities_leave_population_unchanged() {
        let flowshop = toy_flowshop();
        let population = toy_population();

        let next = mutation(&flowshop, population.clone(), 0.0, 0.0);
        assert_eq!(next, population);
    }

    #[test]
    fn mutation_preserves_size_and_permutations() {
        let flowshop = toy_flowshop();
        let population = toy_population();

        let next = mutation(&flowshop, population, 1.0, 1.0);
        assert_eq!(next.len(), 4);
        for schedule in &next {
            let mut jobs: Vec<usize> = schedule.sequence().to_vec();
            jobs.sort_unstable();
            assert_eq!(jobs, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn random_move_positions_are_distinct() {
        let mut rng = thread_rng();
        for _ in 0..100 {
            let (i, j) = random_move(&mut rng, 5);
            assert_ne!(i, j);
            assert!(i < 5 && j < 5);
        }
    }
}

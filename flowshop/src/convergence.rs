use hashbrown::HashMap;
use log::trace;

use crate::schedule::Schedule;

/// Entropy threshold below which a population counts as collapsed.
///
/// The mean per-position entropy of a fully diverse population approaches
/// `ln(pop_size)` (every member placing a different job at a position), so the
/// threshold is taken as a fixed quarter of that ceiling. Derived from the
/// population size alone, computed once per run.
pub fn initialize_threshold(pop_size: usize) -> f64 {
    (pop_size.max(2) as f64).ln() / 4.0
}

/// Mean Shannon entropy of the job placed at each sequence position across
/// the population. Zero when all members are identical.
pub fn population_entropy(population: &[Schedule]) -> f64 {
    let Some(first) = population.first() else {
        return 0.0;
    };

    let positions = first.sequence().len();
    if positions == 0 {
        return 0.0;
    }

    let total = population.len() as f64;
    let mut entropy_sum = 0.0;

    for position in 0..positions {
        let mut occurrences: HashMap<usize, usize> = HashMap::new();
        for schedule in population {
            *occurrences.entry(schedule.sequence()[position]).or_insert(0) += 1;
        }

        entropy_sum -= occurrences
            .values()
            .map(|&count| {
                let p = count as f64 / total;
                p * p.ln()
            })
            .sum::<f64>();
    }

    entropy_sum / positions as f64
}

/// Whether the population's diversity dropped below `threshold`.
pub fn is_convergent(population: &[Schedule], threshold: f64) -> bool {
    let entropy = population_entropy(population);
    trace!("population entropy: {entropy} (threshold: {threshold})");
    entropy < threshold
}

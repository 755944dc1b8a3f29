use crate::schedule::Schedule;

/// Snapshot of a population's duration spread at one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStatistics {
    pub mean: f64,
    pub min: u32,
    pub max: u32,
}

/// (mean, min, max) over the durations of `population`.
pub fn population_statistics(population: &[Schedule]) -> GenerationStatistics {
    let durations: Vec<u32> = population.iter().map(Schedule::duration).collect();
    let sum: u64 = durations.iter().map(|&duration| duration as u64).sum();

    GenerationStatistics {
        mean: sum as f64 / durations.len().max(1) as f64,
        min: durations.iter().copied().min().unwrap_or(0),
        max: durations.iter().copied().max().unwrap_or(0),
    }
}

/// Minimum-duration member, first encountered on ties.
pub fn best_of(population: &[Schedule]) -> Option<&Schedule> {
    population
        .iter()
        .min_by_key(|schedule| schedule.duration())
}

/// The `count` lowest-duration members, ascending. Stable sort keeps the
/// first-encountered order among equal durations so elite selection is
/// reproducible.
pub fn extract_best(population: &[Schedule], count: usize) -> Vec<Schedule> {
    let mut sorted: Vec<Schedule> = population.to_vec();
    sorted.sort_by_key(|schedule| schedule.duration());
    sorted.truncate(count);
    sorted
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::problem::tests::toy_flowshop;
    use crate::schedule::Schedule;

    use super::{best_of, extract_best, population_statistics};

    pub(crate) fn toy_population() -> Vec<Schedule> {
        let flowshop = toy_flowshop();

        // durations: 24, 25, 24, 26
        vec![
            Schedule::evaluate(&flowshop, vec![0, 1, 2, 3]),
            Schedule::evaluate(&flowshop, vec![1, 0, 3, 2]),
            Schedule::evaluate(&flowshop, vec![1, 2, 0, 3]),
            Schedule::evaluate(&flowshop, vec![3, 2, 1, 0]),
        ]
    }

    #[test]
    fn statistics_mean_min_max() {
        let statistics = population_statistics(&toy_population());

        assert_eq!(statistics.min, 24);
        assert_eq!(statistics.max, 26);
        assert!((statistics.mean - 24.75).abs() < f64::EPSILON);
    }

    #[test]
    fn best_of_first_encountered_on_tie() {
        let population = toy_population();
        assert_eq!(population[0].duration(), population[2].duration());

        let best = best_of(&population).unwrap();
        assert_eq!(best.sequence(), population[0].sequence());
    }

    #[test]
    fn best_of_empty() {
        assert!(best_of(&[]).is_none());
    }

    #[test]
    fn extract_best_sorted_prefix() {
        let population = toy_population();

        let best = extract_best(&population, 2);
        assert_eq!(best.len(), 2);
        assert_eq!(best[0].duration(), 24);
        assert_eq!(best[1].duration(), 24);
        // stable: the two duration-24 members keep population order
        assert_eq!(best[0].sequence(), population[0].sequence());
        assert_eq!(best[1].sequence(), population[2].sequence());
    }

    #[test]
    fn extract_best_caps_at_population_size() {
        let population = toy_population();

        let best = extract_best(&population, 10);
        assert_eq!(best.len(), 4);
        assert_eq!(best[3].duration(), 26);
    }
}

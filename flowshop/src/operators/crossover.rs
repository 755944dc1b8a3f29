use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::population::extract_best;
use crate::problem::Flowshop;
use crate::schedule::Schedule;

/// Recombines the population pairwise and keeps the best `|population|`
/// members of parents and offspring together, so the returned population has
/// the same size as the input.
///
/// Parents are paired adjacent-by-duration when `gentrification` is set
/// (best mates with second best), otherwise paired at random. Per pair one
/// crossover kind is drawn from the cumulative probabilities; a draw beyond
/// their sum leaves the pair without offspring.
pub fn crossover(
    flowshop: &Flowshop,
    population: Vec<Schedule>,
    cross_1_point_prob: f64,
    cross_2_points_prob: f64,
    cross_position_prob: f64,
    gentrification: bool,
) -> Vec<Schedule> {
    if population.len() < 2 || population[0].sequence().len() < 2 {
        return population;
    }

    let target_size = population.len();
    let mut rng = thread_rng();

    let mut parents = population.clone();
    if gentrification {
        parents.sort_by_key(Schedule::duration);
    } else {
        parents.shuffle(&mut rng);
    }

    let mut offspring = Vec::new();
    for pair in parents.chunks(2) {
        let [first, second] = pair else {
            continue;
        };

        let draw: f64 = rng.gen();
        let (child_a, child_b) = if draw < cross_1_point_prob {
            let cut = rng.gen_range(1..first.sequence().len());
            (
                one_point(first.sequence(), second.sequence(), cut),
                one_point(second.sequence(), first.sequence(), cut),
            )
        } else if draw < cross_1_point_prob + cross_2_points_prob {
            let lo = rng.gen_range(0..first.sequence().len() - 1);
            let hi = rng.gen_range(lo + 1..first.sequence().len());
            (
                two_point(first.sequence(), second.sequence(), lo, hi),
                two_point(second.sequence(), first.sequence(), lo, hi),
            )
        } else if draw < cross_1_point_prob + cross_2_points_prob + cross_position_prob {
            let kept: Vec<bool> = (0..first.sequence().len()).map(|_| rng.gen()).collect();
            (
                position_based(first.sequence(), second.sequence(), &kept),
                position_based(second.sequence(), first.sequence(), &kept),
            )
        } else {
            continue;
        };

        offspring.push(Schedule::evaluate(flowshop, child_a));
        offspring.push(Schedule::evaluate(flowshop, child_b));
    }

    let mut merged = population;
    merged.append(&mut offspring);
    extract_best(&merged, target_size)
}

/// Prefix of `a` up to `cut`, remainder in `b`'s order.
pub(crate) fn one_point(a: &[usize], b: &[usize], cut: usize) -> Vec<usize> {
    let prefix = &a[..cut];
    let mut child = prefix.to_vec();
    child.extend(b.iter().copied().filter(|job| !prefix.contains(job)));
    child
}

/// Segment `a[lo..hi]` kept in place, other positions filled in `b`'s order.
pub(crate) fn two_point(a: &[usize], b: &[usize], lo: usize, hi: usize) -> Vec<usize> {
    let segment = &a[lo..hi];
    let mut rest = b.iter().copied().filter(|job| !segment.contains(job));

    (0..a.len())
        .map(|position| {
            if position >= lo && position < hi {
                a[position]
            } else {
                rest.next().unwrap()
            }
        })
        .collect()
}

/// Jobs of `a` kept at the flagged positions, the rest filled in `b`'s order.
pub(crate) fn position_based(a: &[usize], b: &[usize], kept: &[bool]) -> Vec<usize> {
    let pinned: Vec<usize> = a
        .iter()
        .zip(kept)
        .filter_map(|(&job, &keep)| keep.then_some(job))
        .collect();
    let mut rest = b.iter().copied().filter(|job| !pinned.contains(job));

    a.iter()
        .zip(kept)
        .map(|(&job, &keep)| if keep { job } else { rest.next().unwrap() })
        .collect()
}

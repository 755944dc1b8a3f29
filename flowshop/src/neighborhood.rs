use crate::problem::Flowshop;

/// Pair of sequence positions, interpreted by the move kind applying it.
pub type Move = (usize, usize);

/// All unordered position pairs `(i, j)` with `i < j`.
///
/// The tables depend only on the instance's job count, so they are built once
/// per run and shared by every local search invocation.
pub fn create_swap_neighbors(flowshop: &Flowshop) -> Vec<Move> {
    let jobs = flowshop.jobs();
    let mut neighbors = Vec::with_capacity(jobs * (jobs - 1) / 2);

    for i in 0..jobs {
        for j in (i + 1)..jobs {
            neighbors.push((i, j));
        }
    }

    neighbors
}

/// All ordered position pairs `(from, to)` with `from != to`.
pub fn create_insert_neighbors(flowshop: &Flowshop) -> Vec<Move> {
    let jobs = flowshop.jobs();
    let mut neighbors = Vec::with_capacity(jobs * (jobs - 1));

    for from in 0..jobs {
        for to in 0..jobs {
            if from != to {
                neighbors.push((from, to));
            }
        }
    }

    neighbors
}

/// New sequence with the jobs at positions `i` and `j` exchanged.
pub fn apply_swap(sequence: &[usize], (i, j): Move) -> Vec<usize> {
    let mut swapped = sequence.to_vec();
    swapped.swap(i, j);
    swapped
}

/// New sequence with the job at `from` removed and reinserted at `to`.
pub fn apply_insert(sequence: &[usize], (from, to): Move) -> Vec<usize> {
    let mut shifted = sequence.to_vec();
    let job = shifted.remove(from);
    shifted.insert(to, job);
    shifted
}

#[cfg(test)]
mod tests {
    use crate::problem::tests::toy_flowshop;

    use super::{apply_insert, apply_swap, create_insert_neighbors, create_swap_neighbors};

    #[test]
    fn swap_neighbor_count() {
        let neighbors = create_swap_neighbors(&toy_flowshop());

        // 4 jobs -> C(4, 2) pairs
        assert_eq!(neighbors.len(), 6);
        assert!(neighbors.iter().all(|&(i, j)| i < j));
    }

    #[test]
    fn insert_neighbor_count() {
        let neighbors = create_insert_neighbors(&toy_flowshop());

        assert_eq!(neighbors.len(), 12);
        assert!(neighbors.iter().all(|&(from, to)| from != to));
    }

    #[test]
    fn swap_exchanges_positions() {
        assert_eq!(apply_swap(&[0, 1, 2, 3], (0, 2)), vec![2, 1, 0, 3]);
    }

    #[test]
    fn insert_shifts_jobs() {
        assert_eq!(apply_insert(&[0, 1, 2, 3], (0, 2)), vec![1, 2, 0, 3]);
        assert_eq!(apply_insert(&[0, 1, 2, 3], (3, 0)), vec![3, 0, 1, 2]);
    }
}

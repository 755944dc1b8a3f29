use crate::problem::Flowshop;

/// One candidate job ordering together with its makespan.
///
/// Evaluated once at construction and immutable afterwards; operators build
/// new schedules instead of editing existing ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    sequence: Vec<usize>,
    duration: u32,
}

impl Schedule {
    /// Evaluates `sequence` against the problem and freezes the result.
    pub fn evaluate(flowshop: &Flowshop, sequence: Vec<usize>) -> Self {
        let duration = makespan(flowshop, &sequence);
        Self { sequence, duration }
    }

    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Total completion time of the last job on the last machine.
    pub fn duration(&self) -> u32 {
        self.duration
    }
}

/// Completion time of `sequence` on a permutation flow shop.
///
/// `completions[m]` carries the completion time of the previously scheduled
/// job on machine `m`; each job enters machine `m` once both that machine and
/// its own previous operation are free.
pub fn makespan(flowshop: &Flowshop, sequence: &[usize]) -> u32 {
    let mut completions = vec![0_u32; flowshop.machines()];

    for &job in sequence {
        completions[0] += flowshop.processing_time(job, 0);
        for machine in 1..flowshop.machines() {
            completions[machine] =
                completions[machine].max(completions[machine - 1]) + flowshop.processing_time(job, machine);
        }
    }

    completions.last().copied().unwrap_or(0)
}

use taillard_parser::structs::TaillardInstance;

/// Derived problem structure built once from a parsed Taillard instance.
///
/// Keeps the processing times job-major so makespan evaluation walks each
/// job's machine column contiguously, plus the per-job totals the
/// priority-rule generators sort by.
pub struct Flowshop {
    jobs: usize,
    machines: usize,
    /// jobs rows x machines columns
    processing_times: Vec<Vec<u32>>,
    total_processing_times: Vec<u32>,
    lower_bound: u32,
}

impl Flowshop {
    pub fn new(instance: &TaillardInstance) -> Self {
        let processing_times: Vec<Vec<u32>> = (0..instance.jobs)
            .map(|job| {
                (0..instance.machines)
                    .map(|machine| instance.processing_time(machine, job))
                    .collect()
            })
            .collect();

        let total_processing_times = processing_times
            .iter()
            .map(|times| times.iter().sum())
            .collect();

        Self {
            jobs: instance.jobs,
            machines: instance.machines,
            processing_times,
            total_processing_times,
            lower_bound: instance.lower_bound,
        }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    pub fn machines(&self) -> usize {
        self.machines
    }

    /// Processing time of `job` on `machine`.
    pub fn processing_time(&self, job: usize, machine: usize) -> u32 {
        self.processing_times[job][machine]
    }

    /// Sum of a job's processing times over all machines.
    pub fn total_processing_time(&self, job: usize) -> u32 {
        self.total_processing_times[job]
    }

    pub fn lower_bound(&self) -> u32 {
        self.lower_bound
    }
}

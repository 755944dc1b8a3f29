#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaillardInstance {
    // file metadata
    pub jobs: usize,
    pub machines: usize,
    pub initial_seed: u64,
    // published bounds on the optimal makespan
    pub upper_bound: u32,
    pub lower_bound: u32,
    // processing times, machines rows x jobs columns
    pub processing_times: Vec<Vec<u32>>,
}

impl TaillardInstance {
    /// Processing time of `job` on `machine`.
    pub fn processing_time(&self, machine: usize, job: usize) -> u32 {
        self.processing_times[machine][job]
    }
}

use std::{fs, path::PathBuf};

use anyhow::Result;
use flowshop::{memetic_heuristic, Flowshop, MemeticOptions};
use log::{info, trace};
use taillard_parser::parse_taillard;

pub fn solve(instance_path: PathBuf, options: MemeticOptions) -> Result<()> {
    let contents = fs::read_to_string(&instance_path)?;
    trace!("input file contents: {contents}");

    let instance = parse_taillard(contents.as_str())?;
    info!(
        "instance {:?}: {} jobs, {} machines, published bounds [{}, {}]",
        instance_path, instance.jobs, instance.machines, instance.lower_bound, instance.upper_bound
    );

    let flowshop = Flowshop::new(&instance);
    let result = memetic_heuristic(&flowshop, &options)?;

    println!("makespan: {}", result.best.duration());
    println!("sequence: {:?}", result.best.sequence());
    println!(
        "generations: {} ({} restarts)",
        result.statistics.len() - 1,
        result.restarts.len()
    );

    Ok(())
}

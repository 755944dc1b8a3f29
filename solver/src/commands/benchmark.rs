use std::path::PathBuf;

use anyhow::Result;
use flowshop::{memetic_heuristic, Flowshop, MemeticOptions};
use log::info;
use taillard_parser::parse_taillard;

pub fn benchmark(
    instance_folder: PathBuf,
    output: PathBuf,
    options: MemeticOptions,
) -> Result<()> {
    if !instance_folder.is_dir() {
        anyhow::bail!("instance_folder is not a directory")
    }

    let mut results: Vec<String> = Vec::new();
    for entry in instance_folder.read_dir()? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let contents = std::fs::read_to_string(&path)?;
        let instance = parse_taillard(contents.as_str())?;
        let flowshop = Flowshop::new(&instance);

        let result = memetic_heuristic(&flowshop, &options)?;
        info!(
            "{path:?}: makespan {} (lower bound {})",
            result.best.duration(),
            instance.lower_bound
        );
        results.push(format!("{path:?}: {}", result.best.duration()));
    }

    std::fs::write(&output, results.join("\n"))?;
    info!("Wrote benchmark results to: {:?}", output);

    Ok(())
}

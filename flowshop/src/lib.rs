pub mod convergence;
pub mod memetic;
pub mod neighborhood;
pub mod operators;
pub mod population;
pub mod problem;
pub mod schedule;

pub use memetic::{memetic_heuristic, MemeticError, MemeticOptions, RunResult};
pub use problem::Flowshop;
pub use schedule::Schedule;

#[derive(Debug, Clone, Copy)]
pub enum MoveType {
    Swap,
    Insert,
}

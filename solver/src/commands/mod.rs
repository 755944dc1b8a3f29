mod benchmark;
mod solve;

pub use benchmark::benchmark;
pub use solve::solve;

pub mod crossover;
pub mod initial;
pub mod local_search;
pub mod mutation;

// Library exports for the sliding puzzle solver
// The binaries and integration tests drive the search core through these modules

pub mod board;
pub mod config;
pub mod error;
pub mod heuristic;
pub mod run_log;
pub mod search;
pub mod solvability;
pub mod solver;
pub mod types;

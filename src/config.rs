// Configuration module for reading Solver.toml
// Holds the search defaults, input limits and run-log settings used by the solver

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::search::ParallelOptions;
use crate::types::{GoalAcceptance, Strategy};

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub search: SearchConfig,
    pub limits: LimitsConfig,
    pub run_log: RunLogConfig,
}

/// Search defaults applied when a request leaves them open
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    pub default_strategy: Strategy,
    /// Worker threads for parallel strategies; 0 means one per available core
    pub default_threads: usize,
    pub batch_factor: usize,
    pub goal_acceptance: GoalAcceptance,
}

impl SearchConfig {
    /// Resolves a requested worker count against the configured default
    pub fn resolve_threads(&self, requested: Option<usize>) -> usize {
        match requested.unwrap_or(self.default_threads) {
            0 => rayon::current_num_threads(),
            n => n,
        }
    }

    /// Parallel search options for `threads` workers
    pub fn parallel_options(&self, threads: usize) -> ParallelOptions {
        ParallelOptions::new(threads)
            .with_batch_factor(self.batch_factor)
            .with_goal_acceptance(self.goal_acceptance)
    }
}

/// Input validation limits
#[derive(Debug, Deserialize, Clone)]
pub struct LimitsConfig {
    pub min_size: usize,
    pub max_size: usize,
    pub max_threads: usize,
}

/// JSONL run log configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RunLogConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Solver.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Solver.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Solver.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Solver.toml
    pub fn default_hardcoded() -> Self {
        Config {
            search: SearchConfig {
                default_strategy: Strategy::AStarManhattan,
                default_threads: 0,
                batch_factor: 4,
                goal_acceptance: GoalAcceptance::Drained,
            },
            limits: LimitsConfig {
                min_size: 2,
                max_size: 10,
                max_threads: 256,
            },
            run_log: RunLogConfig {
                enabled: false,
                log_file_path: "solver_runs.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            log::warn!(
                "Could not load Solver.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}

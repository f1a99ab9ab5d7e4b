// Solver facade
//
// Takes static configuration at construction and exposes one `solve` call that
// validates a request, applies the solvability gate, runs the selected strategy
// and reports the outcome together with timing and work counters.

use log::{debug, info};
use serde::Serialize;
use std::time::Instant;

use crate::board::Board;
use crate::config::Config;
use crate::error::PuzzleError;
use crate::run_log::RunLog;
use crate::search::{self, ParallelOptions, SearchResult};
use crate::solvability;
use crate::types::{Outcome, Strategy};

/// One puzzle to solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    pub puzzle: String,
    /// Explicit board size. When present the solvability oracle runs before search;
    /// when absent the size is inferred from the cell count and no pre-check is made.
    pub size: Option<usize>,
    /// Falls back to the configured default strategy
    pub strategy: Option<Strategy>,
    /// Falls back to the configured default worker count
    pub threads: Option<usize>,
}

impl SolveRequest {
    pub fn new(puzzle: impl Into<String>) -> Self {
        SolveRequest {
            puzzle: puzzle.into(),
            size: None,
            strategy: None,
            threads: None,
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}

/// Everything known about one finished solve
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub puzzle: String,
    pub size: usize,
    pub strategy: Strategy,
    /// Worker count, for parallel strategies only
    pub threads: Option<usize>,
    pub outcome: Outcome,
    /// Whether the parity oracle ran before search
    pub solvability_checked: bool,
    pub nodes_expanded: usize,
    pub rounds: usize,
    pub elapsed_ms: f64,
}

pub struct Solver {
    config: Config,
    run_log: RunLog,
}

impl Solver {
    /// Creates a new Solver instance with the given configuration
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the solver's lifetime
    pub fn new(config: Config) -> Self {
        let run_log = RunLog::new(config.run_log.enabled, &config.run_log.log_file_path);
        Solver { config, run_log }
    }

    /// Validates and solves one request
    pub fn solve(&self, request: &SolveRequest) -> Result<SolveReport, PuzzleError> {
        let start_time = Instant::now();

        if let Some(size) = request.size {
            self.check_size(size)?;
        }
        let board = Board::parse(&request.puzzle, request.size)?;
        self.check_size(board.size())?;

        let strategy = request
            .strategy
            .unwrap_or(self.config.search.default_strategy);
        let threads = if strategy.is_parallel() {
            Some(self.check_threads(request.threads)?)
        } else {
            None
        };

        info!(
            "Solving {}x{} board {} with {}{}",
            board.size(),
            board.size(),
            board,
            strategy,
            threads.map_or(String::new(), |t| format!(" on {} threads", t))
        );

        let solvability_checked = request.size.is_some();
        let result = if solvability_checked && !solvability::is_solvable(&board)? {
            info!("Board {} fails the parity check; skipping search", board);
            SearchResult::exhausted(0, 0)
        } else {
            let options = self
                .config
                .search
                .parallel_options(threads.unwrap_or(1));
            run_strategy(&board, strategy, &options)?
        };

        let report = SolveReport {
            puzzle: board.to_string(),
            size: board.size(),
            strategy,
            threads,
            outcome: result.outcome,
            solvability_checked,
            nodes_expanded: result.nodes_expanded,
            rounds: result.rounds,
            elapsed_ms: start_time.elapsed().as_secs_f64() * 1000.0,
        };

        info!(
            "{}: {:?} ({} nodes, {:.3}ms)",
            strategy, report.outcome, report.nodes_expanded, report.elapsed_ms
        );
        self.run_log.record(&report);

        Ok(report)
    }

    fn check_size(&self, size: usize) -> Result<(), PuzzleError> {
        let limits = &self.config.limits;
        if size < limits.min_size || size > limits.max_size {
            return Err(PuzzleError::configuration(format!(
                "board size must be between {} and {}, got {}",
                limits.min_size, limits.max_size, size
            )));
        }
        Ok(())
    }

    fn check_threads(&self, requested: Option<usize>) -> Result<usize, PuzzleError> {
        if requested == Some(0) {
            return Err(PuzzleError::configuration("worker count must be at least 1"));
        }

        let threads = self.config.search.resolve_threads(requested);
        let max_threads = self.config.limits.max_threads;
        if threads > max_threads {
            return Err(PuzzleError::configuration(format!(
                "worker count {} exceeds the limit of {}",
                threads, max_threads
            )));
        }
        if requested.is_none() {
            debug!("Using default worker count {}", threads);
        }
        Ok(threads)
    }
}

/// Runs `strategy` on `board`. Sequential strategies ignore `options`.
pub fn run_strategy(
    board: &Board,
    strategy: Strategy,
    options: &ParallelOptions,
) -> Result<SearchResult, PuzzleError> {
    match strategy.heuristic() {
        None if strategy.is_parallel() => search::parallel_bfs(board, options),
        None => search::bfs(board),
        Some(kind) => {
            let target = Board::target(board.size())?;
            let heuristic = kind.build(&target);
            if strategy.is_parallel() {
                search::parallel_astar(board, heuristic.as_ref(), options)
            } else {
                search::astar(board, heuristic.as_ref())
            }
        }
    }
}

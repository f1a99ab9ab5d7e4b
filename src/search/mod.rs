//! Shortest-path search strategies over the implicit board graph.
//!
//! Sequential strategies (`bfs`, `astar`) and their batched shared-memory
//! counterparts (`parallel_bfs`, `parallel_astar`) all return a [`SearchResult`]:
//! the outcome plus a few counters describing how much work was done.

pub mod astar;
pub mod bfs;
pub mod parallel_astar;
pub mod parallel_bfs;
pub mod shared;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::PuzzleError;
use crate::types::{GoalAcceptance, Outcome};

pub use astar::astar;
pub use bfs::bfs;
pub use parallel_astar::parallel_astar;
pub use parallel_bfs::parallel_bfs;

/// A board reached by the search, with its path cost and estimate
#[derive(Debug, Clone)]
pub struct State {
    pub board: Board,
    pub blank: usize,
    /// Moves taken from the start board
    pub g: u32,
    /// Estimated moves remaining (0 for uninformed search)
    pub h: u32,
}

impl State {
    pub fn new(board: Board, blank: usize, g: u32, h: u32) -> Self {
        State { board, blank, g, h }
    }

    /// Start state of a search; locates the blank once
    pub fn root(board: &Board, h: u32) -> Result<Self, PuzzleError> {
        let blank = board.blank_index()?;
        Ok(State::new(board.clone(), blank, 0, h))
    }

    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// Outcome of one search plus work counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub outcome: Outcome,
    /// States taken off the frontier and examined
    pub nodes_expanded: usize,
    /// Synchronized rounds executed (0 for sequential strategies)
    pub rounds: usize,
}

impl SearchResult {
    pub fn solved(moves: u32, nodes_expanded: usize, rounds: usize) -> Self {
        SearchResult {
            outcome: Outcome::Solved { moves },
            nodes_expanded,
            rounds,
        }
    }

    pub fn exhausted(nodes_expanded: usize, rounds: usize) -> Self {
        SearchResult {
            outcome: Outcome::Unsolvable,
            nodes_expanded,
            rounds,
        }
    }
}

/// Knobs shared by the batched parallel strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelOptions {
    /// Worker threads in the pool
    pub threads: usize,
    /// A round takes up to `threads * batch_factor` states
    pub batch_factor: usize,
    pub goal_acceptance: GoalAcceptance,
}

impl ParallelOptions {
    pub fn new(threads: usize) -> Self {
        ParallelOptions {
            threads,
            batch_factor: 4,
            goal_acceptance: GoalAcceptance::default(),
        }
    }

    pub fn with_batch_factor(mut self, batch_factor: usize) -> Self {
        self.batch_factor = batch_factor;
        self
    }

    pub fn with_goal_acceptance(mut self, goal_acceptance: GoalAcceptance) -> Self {
        self.goal_acceptance = goal_acceptance;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.threads * self.batch_factor
    }

    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.threads == 0 {
            return Err(PuzzleError::configuration("worker count must be at least 1"));
        }
        if self.batch_factor == 0 {
            return Err(PuzzleError::configuration("batch factor must be at least 1"));
        }
        Ok(())
    }

    /// Fixed worker pool reused by every round of one search
    pub(crate) fn build_pool(&self) -> Result<rayon::ThreadPool, PuzzleError> {
        self.validate()?;
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|index| format!("slide-worker-{}", index))
            .build()
            .map_err(|e| PuzzleError::configuration(format!("failed to build worker pool: {}", e)))
    }
}

/// Priority-queue entry ordered so that `BinaryHeap` pops the lowest f first,
/// and among equal f the entry inserted first.
#[derive(Debug)]
pub(crate) struct OpenEntry {
    pub f: u32,
    pub seq: u64,
    pub state: State,
}

impl OpenEntry {
    pub fn new(state: State, seq: u64) -> Self {
        OpenEntry {
            f: state.f(),
            seq,
            state,
        }
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

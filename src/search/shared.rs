// Shared structures for the batched parallel searches
//
// Each search invocation owns one instance of every structure below. All mutation
// happens inside the named critical sections, and every check that leads to a
// mutation is performed under the same lock as the mutation itself.

use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::board::Board;

/// Boards already enqueued by parallel BFS
#[derive(Debug, Default)]
pub struct VisitedSet {
    boards: Mutex<HashSet<Board>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        VisitedSet::default()
    }

    /// Check-and-insert. Returns true for the single caller that inserted `board`.
    pub fn claim(&self, board: &Board) -> bool {
        let mut boards = self.boards.lock();
        if boards.contains(board) {
            return false;
        }
        boards.insert(board.clone());
        true
    }

    /// Number of boards claimed so far
    pub fn count(&self) -> usize {
        self.boards.lock().len()
    }
}

/// Boards already expanded by parallel A*, with the cost they were expanded at
#[derive(Debug)]
pub struct ClosedSet {
    expanded: Mutex<HashMap<Board, u32>>,
    reopen_on_improvement: bool,
}

impl ClosedSet {
    /// With `reopen_on_improvement` a closed board can be claimed again at a strictly
    /// lower cost; without it the first claim is final.
    pub fn new(reopen_on_improvement: bool) -> Self {
        ClosedSet {
            expanded: Mutex::new(HashMap::new()),
            reopen_on_improvement,
        }
    }

    /// Check-and-insert. Returns true when the caller owns the expansion of `board` at `g`.
    pub fn claim(&self, board: &Board, g: u32) -> bool {
        let mut expanded = self.expanded.lock();
        match expanded.get_mut(board) {
            Some(known) if self.reopen_on_improvement && g < *known => {
                *known = g;
                true
            }
            Some(_) => false,
            None => {
                expanded.insert(board.clone(), g);
                true
            }
        }
    }

    pub fn count(&self) -> usize {
        self.expanded.lock().len()
    }
}

/// Lowest g at which each board has been enqueued
#[derive(Debug, Default)]
pub struct BestCostTable {
    costs: Mutex<HashMap<Board, u32>>,
}

impl BestCostTable {
    pub fn new() -> Self {
        BestCostTable::default()
    }

    /// Records `g` for `board` if it beats every earlier offer. Returns whether it did.
    pub fn offer(&self, board: &Board, g: u32) -> bool {
        let mut costs = self.costs.lock();
        match costs.get_mut(board) {
            Some(known) if g < *known => {
                *known = g;
                true
            }
            Some(_) => false,
            None => {
                costs.insert(board.clone(), g);
                true
            }
        }
    }

    pub fn get(&self, board: &Board) -> Option<u32> {
        self.costs.lock().get(board).copied()
    }
}

/// Best goal cost reported by any worker
#[derive(Debug, Default)]
pub struct SolutionCell {
    solved: AtomicBool,
    best: Mutex<Option<u32>>,
}

impl SolutionCell {
    pub fn new() -> Self {
        SolutionCell::default()
    }

    /// Lock-free read used by workers to skip work once a goal is known
    pub fn is_solved(&self) -> bool {
        self.solved.load(Ordering::Acquire)
    }

    /// Records a goal at `cost`, keeping the minimum of all reports
    pub fn report(&self, cost: u32) {
        let mut best = self.best.lock();
        if best.map_or(true, |known| cost < known) {
            *best = Some(cost);
        }
        self.solved.store(true, Ordering::Release);
    }

    pub fn best(&self) -> Option<u32> {
        *self.best.lock()
    }
}

/// Expansion counter shared by the workers of one search
#[derive(Debug, Default)]
pub struct ExpansionCounter {
    count: AtomicUsize,
}

impl ExpansionCounter {
    pub fn new() -> Self {
        ExpansionCounter::default()
    }

    pub fn record(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}

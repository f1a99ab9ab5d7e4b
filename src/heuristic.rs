// Heuristic library for informed search
//
// Every estimator here is admissible and consistent with respect to single slides,
// which A* relies on when it refuses to re-expand closed boards.

use crate::board::{Board, BLANK};

/// Cost-to-goal estimate for a board against a fixed target
pub trait Heuristic: Sync {
    fn estimate(&self, board: &Board) -> u32;

    fn name(&self) -> &'static str;
}

/// h1: number of tiles that are not on their target cell
#[derive(Debug, Clone)]
pub struct MisplacedTiles {
    target: Board,
}

impl MisplacedTiles {
    pub fn new(target: &Board) -> Self {
        MisplacedTiles {
            target: target.clone(),
        }
    }
}

impl Heuristic for MisplacedTiles {
    fn estimate(&self, board: &Board) -> u32 {
        board
            .cells()
            .iter()
            .zip(self.target.cells())
            .filter(|&(&cell, &goal)| cell != BLANK && cell != goal)
            .count() as u32
    }

    fn name(&self) -> &'static str {
        "misplaced tiles (h1)"
    }
}

/// h2: sum of Manhattan distances of every tile to its target cell
#[derive(Debug, Clone)]
pub struct Manhattan {
    size: usize,
    /// Target (row, col) indexed by tile rank
    goal_cells: Vec<(u32, u32)>,
}

impl Manhattan {
    pub fn new(target: &Board) -> Self {
        let size = target.size();
        let mut goal_cells = vec![(0, 0); target.cells().len() - 1];
        for (index, &cell) in target.cells().iter().enumerate() {
            if cell != BLANK {
                goal_cells[cell as usize] = ((index / size) as u32, (index % size) as u32);
            }
        }
        Manhattan { size, goal_cells }
    }
}

impl Heuristic for Manhattan {
    fn estimate(&self, board: &Board) -> u32 {
        let mut total = 0;
        for (index, &cell) in board.cells().iter().enumerate() {
            if cell == BLANK {
                continue;
            }
            let (goal_row, goal_col) = self.goal_cells[cell as usize];
            let row = (index / self.size) as u32;
            let col = (index % self.size) as u32;
            total += row.abs_diff(goal_row) + col.abs_diff(goal_col);
        }
        total
    }

    fn name(&self) -> &'static str {
        "Manhattan distance (h2)"
    }
}

/// Selects one of the built-in estimators by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    Misplaced,
    Manhattan,
}

impl HeuristicKind {
    /// Builds the estimator for `target`
    pub fn build(&self, target: &Board) -> Box<dyn Heuristic> {
        match self {
            HeuristicKind::Misplaced => Box::new(MisplacedTiles::new(target)),
            HeuristicKind::Manhattan => Box::new(Manhattan::new(target)),
        }
    }
}

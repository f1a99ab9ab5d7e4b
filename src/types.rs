// Shared value types for the solver
// Moves, search outcomes and strategy selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::heuristic::HeuristicKind;

/// The four directions the blank can slide in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns all directions in successor-generation order
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }

    /// Row and column delta applied to the blank
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction that undoes this one
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final answer of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Solved { moves: u32 },
    Unsolvable,
}

impl Outcome {
    pub fn moves(&self) -> Option<u32> {
        match self {
            Outcome::Solved { moves } => Some(*moves),
            Outcome::Unsolvable => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved { .. })
    }

    /// Integer form used at the process boundary: the move count, or -1
    pub fn sentinel(&self) -> i64 {
        match self {
            Outcome::Solved { moves } => i64::from(*moves),
            Outcome::Unsolvable => -1,
        }
    }
}

/// Search algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "bfs")]
    Bfs,
    #[serde(rename = "astar-h1")]
    AStarMisplaced,
    #[serde(rename = "astar-h2")]
    AStarManhattan,
    #[serde(rename = "parallel-bfs")]
    ParallelBfs,
    #[serde(rename = "parallel-astar-h1")]
    ParallelAStarMisplaced,
    #[serde(rename = "parallel-astar-h2")]
    ParallelAStarManhattan,
}

impl Strategy {
    pub fn all() -> [Strategy; 6] {
        [
            Strategy::Bfs,
            Strategy::AStarMisplaced,
            Strategy::AStarManhattan,
            Strategy::ParallelBfs,
            Strategy::ParallelAStarMisplaced,
            Strategy::ParallelAStarManhattan,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::AStarMisplaced => "astar-h1",
            Strategy::AStarManhattan => "astar-h2",
            Strategy::ParallelBfs => "parallel-bfs",
            Strategy::ParallelAStarMisplaced => "parallel-astar-h1",
            Strategy::ParallelAStarManhattan => "parallel-astar-h2",
        }
    }

    /// Heuristic used by informed strategies, `None` for BFS
    pub fn heuristic(&self) -> Option<HeuristicKind> {
        match self {
            Strategy::Bfs | Strategy::ParallelBfs => None,
            Strategy::AStarMisplaced | Strategy::ParallelAStarMisplaced => {
                Some(HeuristicKind::Misplaced)
            }
            Strategy::AStarManhattan | Strategy::ParallelAStarManhattan => {
                Some(HeuristicKind::Manhattan)
            }
        }
    }

    pub fn is_parallel(&self) -> bool {
        matches!(
            self,
            Strategy::ParallelBfs
                | Strategy::ParallelAStarMisplaced
                | Strategy::ParallelAStarManhattan
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "astar-h1" | "h1" => Ok(Strategy::AStarMisplaced),
            "astar-h2" | "h2" | "astar" => Ok(Strategy::AStarManhattan),
            "parallel-bfs" | "pbfs" => Ok(Strategy::ParallelBfs),
            "parallel-astar-h1" | "ph1" => Ok(Strategy::ParallelAStarMisplaced),
            "parallel-astar-h2" | "ph2" | "parallel-astar" => Ok(Strategy::ParallelAStarManhattan),
            _ => Err(format!(
                "Unknown strategy '{}'. Expected one of: bfs, astar-h1, astar-h2, \
                 parallel-bfs, parallel-astar-h1, parallel-astar-h2",
                s
            )),
        }
    }
}

/// When a batched parallel A* search may stop after a goal has been reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GoalAcceptance {
    /// Stop after the first round that reports a goal and keep the cheapest report of that round
    FirstRound,
    /// Keep running rounds until no open state has f below the best reported cost
    #[default]
    Drained,
}

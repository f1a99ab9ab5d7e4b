// Sequential breadth-first search
//
// Every slide costs one move, so exploring level by level finds the shortest
// solution. Boards are marked visited when enqueued, the goal test runs on dequeue.

use log::{debug, info};
use std::collections::{HashSet, VecDeque};

use crate::board::Board;
use crate::error::PuzzleError;
use crate::search::{SearchResult, State};

pub fn bfs(start: &Board) -> Result<SearchResult, PuzzleError> {
    let target = Board::target(start.size())?;

    let mut frontier: VecDeque<State> = VecDeque::new();
    let mut visited: HashSet<Board> = HashSet::new();

    frontier.push_back(State::root(start, 0)?);
    visited.insert(start.clone());

    let mut nodes_expanded = 0;

    while let Some(current) = frontier.pop_front() {
        nodes_expanded += 1;

        if current.board == target {
            info!(
                "BFS solved in {} moves ({} nodes expanded, {} boards visited)",
                current.g,
                nodes_expanded,
                visited.len()
            );
            return Ok(SearchResult::solved(current.g, nodes_expanded, 0));
        }

        for (board, blank) in current.board.successors(current.blank) {
            if !visited.contains(&board) {
                visited.insert(board.clone());
                frontier.push_back(State::new(board, blank, current.g + 1, 0));
            }
        }
    }

    debug!("BFS exhausted {} reachable boards", visited.len());
    info!("BFS found no solution ({} nodes expanded)", nodes_expanded);
    Ok(SearchResult::exhausted(nodes_expanded, 0))
}

// Sequential A* search
//
// Open states are ordered by f = g + h. The best-cost table only blocks inserting a
// board at a cost no better than one already enqueued; stale duplicates stay in the
// heap and are dropped when dequeued after their board has been closed.
//
// Equal-f entries leave the heap in insertion order. When several optimal paths
// exist, which one is followed depends on that order and is not part of the contract.

use log::info;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::board::Board;
use crate::error::PuzzleError;
use crate::heuristic::Heuristic;
use crate::search::{OpenEntry, SearchResult, State};

pub fn astar<H>(start: &Board, heuristic: &H) -> Result<SearchResult, PuzzleError>
where
    H: Heuristic + ?Sized,
{
    let target = Board::target(start.size())?;

    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut closed: HashSet<Board> = HashSet::new();
    let mut best_cost: HashMap<Board, u32> = HashMap::new();
    let mut seq: u64 = 0;

    open.push(OpenEntry::new(
        State::root(start, heuristic.estimate(start))?,
        seq,
    ));
    best_cost.insert(start.clone(), 0);

    let mut nodes_expanded = 0;

    while let Some(OpenEntry { state: current, .. }) = open.pop() {
        if closed.contains(&current.board) {
            continue;
        }
        closed.insert(current.board.clone());

        nodes_expanded += 1;

        if current.board == target {
            info!(
                "A* ({}) solved in {} moves ({} nodes expanded)",
                heuristic.name(),
                current.g,
                nodes_expanded
            );
            return Ok(SearchResult::solved(current.g, nodes_expanded, 0));
        }

        let new_cost = current.g + 1;
        for (board, blank) in current.board.successors(current.blank) {
            let improves = best_cost
                .get(&board)
                .map_or(true, |&known| new_cost < known);
            if improves {
                best_cost.insert(board.clone(), new_cost);
                let h = heuristic.estimate(&board);
                seq += 1;
                open.push(OpenEntry::new(State::new(board, blank, new_cost, h), seq));
            }
        }
    }

    info!(
        "A* ({}) found no solution ({} nodes expanded)",
        heuristic.name(),
        nodes_expanded
    );
    Ok(SearchResult::exhausted(nodes_expanded, 0))
}

// Batched parallel breadth-first search
//
// The frontier is kept as a current level and a next level. Each round drains up to
// `threads * batch_factor` states from the current level and expands them on the
// worker pool; rounds never mix levels, so every board is first claimed at its
// shortest distance and the result matches sequential BFS for any thread count.

use log::{debug, info};
use parking_lot::Mutex;
use rayon::prelude::*;
use std::collections::VecDeque;

use crate::board::Board;
use crate::error::PuzzleError;
use crate::search::shared::{ExpansionCounter, SolutionCell, VisitedSet};
use crate::search::{ParallelOptions, SearchResult, State};

pub fn parallel_bfs(start: &Board, options: &ParallelOptions) -> Result<SearchResult, PuzzleError> {
    let pool = options.build_pool()?;
    let target = Board::target(start.size())?;
    let batch_size = options.batch_size();

    let visited = VisitedSet::new();
    let solution = SolutionCell::new();
    let expanded = ExpansionCounter::new();

    let mut current_level: VecDeque<State> = VecDeque::new();
    let mut next_level: Vec<State> = Vec::new();

    current_level.push_back(State::root(start, 0)?);
    visited.claim(start);

    let mut rounds = 0;

    while !solution.is_solved() {
        if current_level.is_empty() {
            if next_level.is_empty() {
                break;
            }
            current_level.extend(next_level.drain(..));
        }

        let take = batch_size.min(current_level.len());
        let batch: Vec<State> = current_level.drain(..take).collect();
        rounds += 1;

        debug!(
            "Round {}: expanding {} states at depth {} ({} left in level, {} queued next)",
            rounds,
            batch.len(),
            batch[0].g,
            current_level.len(),
            next_level.len()
        );

        let merged: Mutex<Vec<State>> = Mutex::new(Vec::new());

        pool.install(|| {
            batch
                .par_iter()
                .fold(Vec::new, |mut local: Vec<State>, current| {
                    if solution.is_solved() {
                        return local;
                    }
                    expanded.record();

                    if current.board == target {
                        solution.report(current.g);
                        return local;
                    }

                    for (board, blank) in current.board.successors(current.blank) {
                        if visited.claim(&board) {
                            local.push(State::new(board, blank, current.g + 1, 0));
                        }
                    }
                    local
                })
                .for_each(|local| merged.lock().extend(local));
        });

        next_level.extend(merged.into_inner());
    }

    let nodes_expanded = expanded.total();
    match solution.best() {
        Some(moves) => {
            info!(
                "Parallel BFS ({} threads) solved in {} moves ({} nodes, {} rounds)",
                options.threads, moves, nodes_expanded, rounds
            );
            Ok(SearchResult::solved(moves, nodes_expanded, rounds))
        }
        None => {
            info!(
                "Parallel BFS ({} threads) found no solution after {} boards ({} rounds)",
                options.threads,
                visited.count(),
                rounds
            );
            Ok(SearchResult::exhausted(nodes_expanded, rounds))
        }
    }
}

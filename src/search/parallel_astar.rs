// Batched parallel A* search
//
// Each round pops the `threads * batch_factor` lowest-f states from the open heap and
// expands them on the worker pool. Workers claim boards in the shared closed set,
// filter successors through the shared best-cost table and collect survivors in
// thread-local buffers that are merged back into the heap after the round.
//
// Goal acceptance decides when the search may stop:
// - FirstRound stops after the first round that reports a goal and keeps the cheapest
//   report of that round. A cheaper goal reachable through states expanded in the same
//   round can be missed, so the result may exceed the sequential optimum.
// - Drained keeps running rounds until no open state has f below the best reported
//   cost, and lets a closed board be reclaimed at a lower g. The result then equals the
//   sequential optimum for any thread count.

use log::{debug, info};
use parking_lot::Mutex;
use rayon::prelude::*;
use std::collections::BinaryHeap;

use crate::board::Board;
use crate::error::PuzzleError;
use crate::heuristic::Heuristic;
use crate::search::shared::{BestCostTable, ClosedSet, ExpansionCounter, SolutionCell};
use crate::search::{OpenEntry, ParallelOptions, SearchResult, State};
use crate::types::GoalAcceptance;

pub fn parallel_astar<H>(
    start: &Board,
    heuristic: &H,
    options: &ParallelOptions,
) -> Result<SearchResult, PuzzleError>
where
    H: Heuristic + ?Sized,
{
    let pool = options.build_pool()?;
    let target = Board::target(start.size())?;
    let batch_size = options.batch_size();
    let drained = options.goal_acceptance == GoalAcceptance::Drained;

    let closed = ClosedSet::new(drained);
    let best_cost = BestCostTable::new();
    let solution = SolutionCell::new();
    let expanded = ExpansionCounter::new();

    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut seq: u64 = 0;

    open.push(OpenEntry::new(
        State::root(start, heuristic.estimate(start))?,
        seq,
    ));
    best_cost.offer(start, 0);

    let mut rounds = 0;

    loop {
        let lowest_f = match open.peek() {
            Some(entry) => entry.f,
            None => break,
        };
        let bound = solution.best();
        let finished = match options.goal_acceptance {
            GoalAcceptance::FirstRound => bound.is_some(),
            GoalAcceptance::Drained => bound.map_or(false, |best| lowest_f >= best),
        };
        if finished {
            break;
        }

        let mut batch: Vec<State> = Vec::with_capacity(batch_size);
        while batch.len() < batch_size {
            match open.pop() {
                Some(entry) => batch.push(entry.state),
                None => break,
            }
        }
        rounds += 1;

        debug!(
            "Round {}: expanding {} states, f in {}..={} ({} still open)",
            rounds,
            batch.len(),
            lowest_f,
            batch.last().map_or(lowest_f, State::f),
            open.len()
        );

        let merged: Mutex<Vec<State>> = Mutex::new(Vec::new());

        pool.install(|| {
            batch
                .par_iter()
                .fold(Vec::new, |mut local: Vec<State>, current| {
                    if !drained && solution.is_solved() {
                        return local;
                    }
                    if drained && bound.map_or(false, |best| current.f() >= best) {
                        return local;
                    }
                    if !closed.claim(&current.board, current.g) {
                        return local;
                    }
                    expanded.record();

                    if current.board == target {
                        solution.report(current.g);
                        return local;
                    }

                    let new_cost = current.g + 1;
                    for (board, blank) in current.board.successors(current.blank) {
                        if best_cost.offer(&board, new_cost) {
                            let h = heuristic.estimate(&board);
                            local.push(State::new(board, blank, new_cost, h));
                        }
                    }
                    local
                })
                .for_each(|local| merged.lock().extend(local));
        });

        for state in merged.into_inner() {
            seq += 1;
            open.push(OpenEntry::new(state, seq));
        }
    }

    let nodes_expanded = expanded.total();
    match solution.best() {
        Some(moves) => {
            info!(
                "Parallel A* ({}, {} threads, {:?}) solved in {} moves ({} nodes, {} rounds)",
                heuristic.name(),
                options.threads,
                options.goal_acceptance,
                moves,
                nodes_expanded,
                rounds
            );
            Ok(SearchResult::solved(moves, nodes_expanded, rounds))
        }
        None => {
            info!(
                "Parallel A* ({}, {} threads) found no solution after {} boards ({} rounds)",
                heuristic.name(),
                options.threads,
                closed.count(),
                rounds
            );
            Ok(SearchResult::exhausted(nodes_expanded, rounds))
        }
    }
}

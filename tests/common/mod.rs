// Helpers shared by the integration tests
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use slide_solver::board::{legal_moves, Board};
use slide_solver::types::Direction;

/// Board reached from the target by `steps` random slides that never undo the previous one.
/// Always solvable; its optimal cost is at most `steps`.
pub fn scrambled(size: usize, steps: usize, seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::target(size).expect("supported size");
    let mut blank = board.blank_index().expect("target has one blank");
    let mut last: Option<Direction> = None;

    for _ in 0..steps {
        let moves: Vec<Direction> = legal_moves(blank, size)
            .filter(|dir| last.map_or(true, |prev| *dir != prev.opposite()))
            .collect();
        let dir = moves[rng.random_range(0..moves.len())];
        let (next, next_blank) = board.apply_move(blank, dir).expect("legal move");
        board = next;
        blank = next_blank;
        last = Some(dir);
    }

    board
}

/// Every arrangement of `cells`, in no particular order
pub fn permutations(cells: &[u8]) -> Vec<Vec<u8>> {
    if cells.len() <= 1 {
        return vec![cells.to_vec()];
    }
    let mut result = Vec::new();
    for i in 0..cells.len() {
        let mut rest = cells.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            result.push(tail);
        }
    }
    result
}

// Solvability oracle based on inversion parity
//
// Odd N: solvable iff the inversion count is even.
// Even N: solvable iff inversions + (N - blank row) is odd, blank row counted from the top.

use crate::board::{Board, BLANK};
use crate::error::PuzzleError;

/// Number of pairs (i, j), i < j, of non-blank tiles with tile[i] > tile[j]
pub fn count_inversions(board: &Board) -> usize {
    let tiles: Vec<u8> = board
        .cells()
        .iter()
        .copied()
        .filter(|&cell| cell != BLANK)
        .collect();

    let mut inversions = 0;
    for i in 0..tiles.len() {
        for j in (i + 1)..tiles.len() {
            if tiles[i] > tiles[j] {
                inversions += 1;
            }
        }
    }
    inversions
}

/// Whether the canonical target is reachable from `board`
pub fn is_solvable(board: &Board) -> Result<bool, PuzzleError> {
    let size = board.size();
    let inversions = count_inversions(board);

    if size % 2 == 1 {
        return Ok(inversions % 2 == 0);
    }

    let blank_row = board.row_of(board.blank_index()?);
    Ok((inversions + (size - blank_row)) % 2 == 1)
}

// Board model for NxN sliding-tile puzzles
//
// A board is a row-major sequence of tile ranks. Rank r is the r-th symbol of the
// alphabet (A, B, C, ...), the blank is stored as the BLANK sentinel. Boards are
// immutable values: applying a move always builds a new board, so they can be used
// as keys in visited sets and cost tables.

use std::fmt;

use crate::error::PuzzleError;
use crate::types::Direction;

/// Stored value of the blank cell
pub const BLANK: u8 = u8::MAX;

/// Symbol of the blank cell in text form
pub const BLANK_SYMBOL: char = '#';

/// Smallest board the model accepts
pub const MIN_SUPPORTED_SIZE: usize = 2;

/// Largest board whose ranks still fit below the blank sentinel
pub const MAX_SUPPORTED_SIZE: usize = 15;

/// Number of single-letter symbols before labels switch to `A1`, `A2`, ...
const LETTER_SYMBOLS: usize = 26;

/// Board sizes that can be inferred from the number of cells alone
const INFERRED_SIZES: [(usize, usize); 4] = [(9, 3), (16, 4), (25, 5), (64, 8)];

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Box<[u8]>,
}

impl Board {
    /// Builds a board from tile ranks, validating the alphabet and the single blank
    pub fn from_ranks(size: usize, cells: Vec<u8>) -> Result<Self, PuzzleError> {
        check_supported_size(size)?;

        let expected = size * size;
        if cells.len() != expected {
            return Err(PuzzleError::malformed(format!(
                "board has {} cells but a {}x{} board needs {}",
                cells.len(),
                size,
                size,
                expected
            )));
        }

        let tile_count = expected - 1;
        let mut seen = vec![false; tile_count];
        let mut blanks = 0;

        for &cell in &cells {
            if cell == BLANK {
                blanks += 1;
                continue;
            }
            let rank = cell as usize;
            if rank >= tile_count {
                return Err(PuzzleError::malformed(format!(
                    "symbol '{}' is outside the {}-tile alphabet",
                    symbol_label(cell),
                    tile_count
                )));
            }
            if seen[rank] {
                return Err(PuzzleError::malformed(format!(
                    "symbol '{}' appears more than once",
                    symbol_label(cell)
                )));
            }
            seen[rank] = true;
        }

        if blanks != 1 {
            return Err(PuzzleError::malformed(format!(
                "expected exactly one blank '{}', found {}",
                BLANK_SYMBOL, blanks
            )));
        }

        Ok(Board {
            size,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Canonical goal board: ranks in ascending order with the blank last
    pub fn target(size: usize) -> Result<Self, PuzzleError> {
        check_supported_size(size)?;

        let tile_count = size * size - 1;
        let mut cells: Vec<u8> = (0..tile_count).map(|rank| rank as u8).collect();
        cells.push(BLANK);

        Ok(Board {
            size,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Parses a board from text.
    ///
    /// Accepts either one character per cell (`"ABC#DEFGH"`) or a comma separated token
    /// list (`"0,1,2,#,3,4,5,6,7"`, `"A,B,...,Z,A1,A2,#"`). When `size` is `None` the size
    /// is inferred from the cell count.
    pub fn parse(text: &str, size: Option<usize>) -> Result<Self, PuzzleError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PuzzleError::malformed("board text is empty"));
        }

        let cells = if text.contains(',') {
            text.split(',')
                .map(|token| parse_token(token.trim()))
                .collect::<Result<Vec<u8>, PuzzleError>>()?
        } else {
            text.chars()
                .map(parse_char)
                .collect::<Result<Vec<u8>, PuzzleError>>()?
        };

        let size = match size {
            Some(n) => {
                check_supported_size(n)?;
                if cells.len() != n * n {
                    return Err(PuzzleError::malformed(format!(
                        "puzzle length must be {} for a {}x{} board, got {}",
                        n * n,
                        n,
                        n,
                        cells.len()
                    )));
                }
                n
            }
            None => infer_size(cells.len())?,
        };

        Board::from_ranks(size, cells)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Position of the blank. Fails unless exactly one blank is present.
    pub fn blank_index(&self) -> Result<usize, PuzzleError> {
        let mut found = None;
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == BLANK {
                if found.is_some() {
                    return Err(PuzzleError::invariant("board contains more than one blank"));
                }
                found = Some(index);
            }
        }
        found.ok_or_else(|| PuzzleError::invariant("board contains no blank"))
    }

    /// Zero-based row of a flattened index
    pub fn row_of(&self, index: usize) -> usize {
        index / self.size
    }

    /// Slides the blank in `direction`.
    ///
    /// Returns the new board and blank index, or `None` when the move leaves the grid.
    /// `blank` must be the blank index of `self`.
    pub fn apply_move(&self, blank: usize, direction: Direction) -> Option<(Board, usize)> {
        let next = neighbor(blank, self.size, direction)?;
        let mut cells = self.cells.clone();
        cells.swap(blank, next);
        Some((
            Board {
                size: self.size,
                cells,
            },
            next,
        ))
    }

    /// Directions the blank can slide in, in UP, DOWN, LEFT, RIGHT order
    pub fn available_moves(&self) -> Result<Vec<Direction>, PuzzleError> {
        let blank = self.blank_index()?;
        Ok(legal_moves(blank, self.size).collect())
    }

    /// All boards one slide away, in UP, DOWN, LEFT, RIGHT order
    pub fn successors(&self, blank: usize) -> impl Iterator<Item = (Board, usize)> + '_ {
        legal_moves(blank, self.size).filter_map(move |dir| self.apply_move(blank, dir))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({}x{}, {})", self.size, self.size, self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters_only = self.cells.len() - 1 <= LETTER_SYMBOLS;
        for (index, &cell) in self.cells.iter().enumerate() {
            if !letters_only && index > 0 {
                f.write_str(",")?;
            }
            f.write_str(&symbol_label(cell))?;
        }
        Ok(())
    }
}

/// Human-readable symbol for a stored cell value
pub fn symbol_label(cell: u8) -> String {
    if cell == BLANK {
        return BLANK_SYMBOL.to_string();
    }
    let rank = cell as usize;
    if rank < LETTER_SYMBOLS {
        ((b'A' + cell) as char).to_string()
    } else {
        format!("A{}", rank - (LETTER_SYMBOLS - 1))
    }
}

/// Maps a cell count to the board size, for the sizes that can be inferred
pub fn infer_size(len: usize) -> Result<usize, PuzzleError> {
    INFERRED_SIZES
        .iter()
        .find(|(cells, _)| *cells == len)
        .map(|(_, size)| *size)
        .ok_or_else(|| {
            PuzzleError::malformed(format!(
                "cannot infer board size from {} cells; give the size explicitly",
                len
            ))
        })
}

/// Flattened index of the cell next to `blank` in `direction`, if it is on the grid
pub fn neighbor(blank: usize, size: usize, direction: Direction) -> Option<usize> {
    let row = (blank / size) as isize;
    let col = (blank % size) as isize;
    let (d_row, d_col) = direction.offset();
    let (new_row, new_col) = (row + d_row, col + d_col);
    let bound = size as isize;

    if new_row >= 0 && new_row < bound && new_col >= 0 && new_col < bound {
        Some(new_row as usize * size + new_col as usize)
    } else {
        None
    }
}

/// Moves available to a blank at `blank` on a `size`x`size` grid
pub fn legal_moves(blank: usize, size: usize) -> impl Iterator<Item = Direction> {
    Direction::all()
        .into_iter()
        .filter(move |&dir| neighbor(blank, size, dir).is_some())
}

fn check_supported_size(size: usize) -> Result<(), PuzzleError> {
    if (MIN_SUPPORTED_SIZE..=MAX_SUPPORTED_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(PuzzleError::configuration(format!(
            "board size {} is outside the supported range {}..={}",
            size, MIN_SUPPORTED_SIZE, MAX_SUPPORTED_SIZE
        )))
    }
}

fn parse_char(symbol: char) -> Result<u8, PuzzleError> {
    match symbol {
        BLANK_SYMBOL => Ok(BLANK),
        'A'..='Z' => Ok(symbol as u8 - b'A'),
        other => Err(PuzzleError::malformed(format!("unknown symbol '{}'", other))),
    }
}

fn parse_token(token: &str) -> Result<u8, PuzzleError> {
    let unknown = || PuzzleError::malformed(format!("unknown symbol '{}'", token));

    if token == "#" {
        return Ok(BLANK);
    }

    let rank = if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse::<usize>().map_err(|_| unknown())?
    } else if let Some(suffix) = token.strip_prefix('A').filter(|s| !s.is_empty()) {
        let k = suffix.parse::<usize>().map_err(|_| unknown())?;
        if k == 0 {
            return Err(unknown());
        }
        LETTER_SYMBOLS - 1 + k
    } else {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c @ 'A'..='Z'), None) => (c as u8 - b'A') as usize,
            _ => return Err(unknown()),
        }
    };

    // The sentinel itself is never a valid rank
    if rank >= BLANK as usize {
        return Err(unknown());
    }
    Ok(rank as u8)
}

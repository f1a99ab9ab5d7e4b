// Available moves for one board
//
// Prints the directions the blank can slide in, one per line, in UP, DOWN, LEFT,
// RIGHT order.
//
// Usage:
//   echo "ABCDEFG#IJKHMNOL" | moves        read the board from stdin, infer the size
//   moves <puzzle>                         infer the size from the puzzle length
//   moves <N> <puzzle>                     explicit board size

use std::env;
use std::io::{self, Read};
use std::process;

use slide_solver::board::Board;

fn print_usage() {
    eprintln!("Sliding Puzzle Available Moves");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  moves [board_size] [puzzle]");
    eprintln!();
    eprintln!("When no puzzle is given it is read from stdin.");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("  echo \"ABCDEFG#IJKHMNOL\" | moves");
    eprintln!("  moves 2 A#CB");
}

fn read_puzzle_from_stdin() -> Result<String, String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("Failed to read puzzle from stdin: {}", e))?;
    input
        .split_whitespace()
        .next()
        .map(str::to_string)
        .ok_or_else(|| "No puzzle given on stdin".to_string())
}

fn parse_board(args: &[String]) -> Result<Board, String> {
    let (size, puzzle) = match args {
        [] => (None, read_puzzle_from_stdin()?),
        [puzzle] => (None, puzzle.clone()),
        [size, puzzle] => {
            let n = size
                .parse::<usize>()
                .map_err(|e| format!("Invalid board size '{}': {}", size, e))?;
            (Some(n), puzzle.clone())
        }
        _ => return Err("Too many arguments".to_string()),
    };

    Board::parse(&puzzle, size).map_err(|e| e.to_string())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help") {
        print_usage();
        process::exit(0);
    }

    let moves = parse_board(&args)
        .and_then(|board| board.available_moves().map_err(|e| e.to_string()));

    match moves {
        Ok(moves) => {
            for direction in moves {
                println!("{}", direction);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            process::exit(1);
        }
    }
}

// Command-line front end for the sliding puzzle solver
//
// Usage:
//   slide-solver [OPTIONS]                 read the puzzle from stdin, infer the size
//   slide-solver [OPTIONS] <puzzle>        infer the size from the puzzle length
//   slide-solver [OPTIONS] <N> <puzzle>    explicit size with solvability check
//
// Options:
//   --strategy <name>   bfs, astar-h1, astar-h2, parallel-bfs, parallel-astar-h1, parallel-astar-h2
//   --threads <n>       Worker threads for parallel strategies
//   --config <path>     Path to Solver.toml (default: Solver.toml)
//   --json              Print the full solve report as JSON

use log::info;
use std::env;
use std::io::{self, Read};
use std::process;

use slide_solver::board::Board;
use slide_solver::config::Config;
use slide_solver::solver::{SolveReport, SolveRequest, Solver};
use slide_solver::types::{Outcome, Strategy};

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS] [board_size] <puzzle>", program);
    eprintln!("  Mode 1 (auto-detect): echo \"ABCDEFG#IJKHMNOL\" | {}", program);
    eprintln!("  Mode 2 (specify size): {} 4 ABCDEFG#IJKHMNOL", program);
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --strategy <name>   bfs | astar-h1 | astar-h2 | parallel-bfs |");
    eprintln!("                      parallel-astar-h1 | parallel-astar-h2");
    eprintln!("  --threads <n>       Worker threads for parallel strategies");
    eprintln!("  --config <path>     Path to Solver.toml (default: Solver.toml)");
    eprintln!("  --json              Print the solve report as JSON");
    eprintln!("  --help              Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  3x3 (8-puzzle):   {} 3 ABC#DEFGH", program);
    eprintln!("  4x4 (15-puzzle):  {} 4 ABCDEFG#IJKHMNOL", program);
    eprintln!("  5x5 (24-puzzle):  {} 5 ABCDEFGHIJ#KLMNOPQRSTUVWX", program);
}

/// Parsed command line
struct Args {
    positionals: Vec<String>,
    strategy: Option<Strategy>,
    threads: Option<usize>,
    config_path: Option<String>,
    json: bool,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args {
        positionals: Vec::new(),
        strategy: None,
        threads: None,
        config_path: None,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--strategy" => {
                let value = args.get(i + 1).ok_or("--strategy requires a value")?;
                parsed.strategy = Some(value.parse::<Strategy>()?);
                i += 1;
            }
            "--threads" => {
                let value = args.get(i + 1).ok_or("--threads requires a value")?;
                let threads = value
                    .parse::<usize>()
                    .map_err(|e| format!("Invalid thread count '{}': {}", value, e))?;
                parsed.threads = Some(threads);
                i += 1;
            }
            "--config" => {
                let value = args.get(i + 1).ok_or("--config requires a value")?;
                parsed.config_path = Some(value.clone());
                i += 1;
            }
            "--json" => parsed.json = true,
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option: {}", flag));
            }
            positional => parsed.positionals.push(positional.to_string()),
        }
        i += 1;
    }

    Ok(parsed)
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

fn print_verbose(report: &SolveReport) {
    let separator = "=".repeat(40);
    let rule = "-".repeat(40);

    println!("{}", separator);
    println!(
        "{} Solver - {}x{} Puzzle",
        report.strategy, report.size, report.size
    );
    println!("{}", separator);
    println!("Initial: {}", report.puzzle);
    if let Ok(target) = Board::target(report.size) {
        println!("Target:  {}", target);
    }
    if let Some(threads) = report.threads {
        println!("Threads: {}", threads);
    }
    println!("{}", rule);

    match report.outcome {
        Outcome::Solved { moves } => {
            println!("Solution: {} moves", moves);
            println!("Nodes expanded: {}", report.nodes_expanded);
            println!("Time: {:.3} ms", report.elapsed_ms);
        }
        Outcome::Unsolvable => println!("This puzzle is NOT SOLVABLE"),
    }
    println!("{}", separator);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let raw_args: Vec<String> = env::args().collect();
    let program = raw_args
        .first()
        .cloned()
        .unwrap_or_else(|| "slide-solver".to_string());

    if raw_args.iter().any(|a| a == "--help") {
        print_usage(&program);
        process::exit(0);
    }

    let args = match parse_args(&raw_args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(&program);
            process::exit(1);
        }
    };

    let config = match &args.config_path {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        }),
        None => Config::load_or_default(),
    };

    let mut request = match args.positionals.as_slice() {
        [] => match read_puzzle_from_stdin() {
            Ok(puzzle) => SolveRequest::new(puzzle),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        [puzzle] => SolveRequest::new(puzzle.as_str()),
        [size, puzzle] => match size.parse::<usize>() {
            Ok(n) => SolveRequest::new(puzzle.as_str()).with_size(n),
            Err(e) => {
                eprintln!("Error: Invalid board size '{}': {}", size, e);
                process::exit(1);
            }
        },
        _ => {
            print_usage(&program);
            process::exit(1);
        }
    };
    request.strategy = args.strategy;
    request.threads = args.threads;

    let explicit = request.size.is_some();
    let solver = Solver::new(config);

    let report = match solver.solve(&request) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    info!("Finished in {:.3}ms", report.elapsed_ms);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: Failed to serialize report: {}", e);
                process::exit(1);
            }
        }
    } else if explicit {
        print_verbose(&report);
    } else {
        println!("{}", report.outcome.sentinel());
    }

    if explicit && !report.outcome.is_solved() {
        process::exit(1);
    }
}

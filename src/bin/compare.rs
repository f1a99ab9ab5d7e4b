// Strategy comparison tool
//
// Runs every search strategy on one puzzle and prints cost, expanded nodes and time,
// with the parallel strategies repeated for each requested worker count.
//
// Usage:
//   cargo run --release --bin compare -- <puzzle> [options]
//
// Options:
//   --size <N>             Explicit board size (default: inferred from length)
//   --threads <T1,T2,...>  Worker counts for parallel strategies (default: 1,2,4,8)
//   --skip <S1,S2,...>     Strategies to leave out (e.g. bfs,astar-h1)
//   --config <path>        Path to Solver.toml (default: Solver.toml)

use std::env;
use std::process;

use slide_solver::config::Config;
use slide_solver::solver::{SolveRequest, Solver};
use slide_solver::types::Strategy;

fn print_usage() {
    eprintln!("Sliding Puzzle Strategy Comparison");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  compare <puzzle> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --size <N>              Explicit board size (enables the solvability check)");
    eprintln!("  --threads <T1,T2,...>   Worker counts for parallel strategies (default: 1,2,4,8)");
    eprintln!("  --skip <S1,S2,...>      Strategies to leave out");
    eprintln!("  --config <path>         Path to Solver.toml (default: Solver.toml)");
    eprintln!("  --help                  Show this help message");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("  compare ABCDEFG#IJKHMNOL");
    eprintln!("  compare EABCM#GDKFILNOJH --skip bfs,astar-h1,parallel-bfs --threads 1,4");
}

fn parse_threads(s: &str) -> Result<Vec<usize>, String> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<usize>()
                .map_err(|e| format!("Invalid thread count '{}': {}", t, e))
        })
        .collect()
}

fn parse_strategies(s: &str) -> Result<Vec<Strategy>, String> {
    s.split(',').map(|name| name.trim().parse::<Strategy>()).collect()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.contains(&"--help".to_string()) {
        print_usage();
        process::exit(if args.contains(&"--help".to_string()) {
            0
        } else {
            1
        });
    }

    let puzzle = args[1].clone();
    let mut size = None;
    let mut thread_counts = vec![1, 2, 4, 8];
    let mut skipped: Vec<Strategy> = Vec::new();
    let mut config_path: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        let value = args.get(i + 1);
        let result = match (args[i].as_str(), value) {
            ("--size", Some(v)) => v
                .parse::<usize>()
                .map(|n| size = Some(n))
                .map_err(|e| format!("Invalid board size '{}': {}", v, e)),
            ("--threads", Some(v)) => parse_threads(v).map(|t| thread_counts = t),
            ("--skip", Some(v)) => parse_strategies(v).map(|s| skipped = s),
            ("--config", Some(v)) => {
                config_path = Some(v.clone());
                Ok(())
            }
            (flag, None) if flag.starts_with("--") => Err(format!("{} requires a value", flag)),
            (other, _) => Err(format!("Unknown argument: {}", other)),
        };
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        i += 2;
    }

    let config = match &config_path {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        }),
        None => Config::load_or_default(),
    };
    let solver = Solver::new(config);

    println!(
        "{:<20} {:>8} {:>10} {:>12} {:>8} {:>12}",
        "strategy", "threads", "moves", "nodes", "rounds", "time (ms)"
    );
    println!("{}", "-".repeat(75));

    for strategy in Strategy::all() {
        if skipped.contains(&strategy) {
            continue;
        }

        let runs: Vec<Option<usize>> = if strategy.is_parallel() {
            thread_counts.iter().map(|&t| Some(t)).collect()
        } else {
            vec![None]
        };

        for threads in runs {
            let mut request = SolveRequest::new(puzzle.as_str()).with_strategy(strategy);
            request.size = size;
            request.threads = threads;

            match solver.solve(&request) {
                Ok(report) => println!(
                    "{:<20} {:>8} {:>10} {:>12} {:>8} {:>12.3}",
                    strategy.as_str(),
                    threads.map_or("-".to_string(), |t| t.to_string()),
                    report.outcome.sentinel(),
                    report.nodes_expanded,
                    report.rounds,
                    report.elapsed_ms
                ),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            }
        }
    }
}

//! Solver Facade Tests
//!
//! Request validation, the explicit-size solvability gate, strategy dispatch,
//! report serialization and the JSONL run log.

use std::fs;
use std::path::PathBuf;

use slide_solver::config::Config;
use slide_solver::error::PuzzleError;
use slide_solver::solver::{SolveRequest, Solver};
use slide_solver::types::{Outcome, Strategy};

fn solver() -> Solver {
    Solver::new(Config::default_hardcoded())
}

fn temp_log_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("slide_solver_{}_{}.jsonl", name, std::process::id()))
}

#[test]
fn test_every_strategy_solves_known_board() {
    let solver = solver();
    for strategy in Strategy::all() {
        let request = SolveRequest::new("ABC#DEFGH")
            .with_size(3)
            .with_strategy(strategy)
            .with_threads(2);
        let report = solver.solve(&request).unwrap();

        assert_eq!(report.outcome, Outcome::Solved { moves: 15 }, "{}", strategy);
        assert_eq!(report.strategy, strategy);
        assert_eq!(report.size, 3);
        assert_eq!(report.threads.is_some(), strategy.is_parallel());
    }
}

#[test]
fn test_default_strategy_comes_from_config() {
    let report = solver()
        .solve(&SolveRequest::new("ABCDEFG#IJKHMNOL"))
        .unwrap();
    assert_eq!(report.strategy, Strategy::AStarManhattan);
    assert_eq!(report.outcome, Outcome::Solved { moves: 2 });
    assert!(!report.solvability_checked);
}

#[test]
fn test_explicit_size_runs_parity_gate() {
    let request = SolveRequest::new("BACDEFGHIJKLMNO#")
        .with_size(4)
        .with_strategy(Strategy::Bfs);
    let report = solver().solve(&request).unwrap();

    assert_eq!(report.outcome, Outcome::Unsolvable);
    assert!(report.solvability_checked);
    assert_eq!(report.nodes_expanded, 0, "search must not start");
}

#[test]
fn test_inferred_size_exhausts_reachable_boards() {
    let request = SolveRequest::new("BACDEFGH#").with_strategy(Strategy::Bfs);
    let report = solver().solve(&request).unwrap();

    assert_eq!(report.outcome, Outcome::Unsolvable);
    assert!(!report.solvability_checked);
    // Half of the 9! arrangements are reachable from any 3x3 board
    assert_eq!(report.nodes_expanded, 181_440);
}

#[test]
fn test_two_by_two_needs_explicit_size() {
    let solver = solver();

    let inferred = solver.solve(&SolveRequest::new("#CBA"));
    assert!(matches!(inferred, Err(PuzzleError::MalformedInput { .. })));

    let explicit = solver
        .solve(&SolveRequest::new("#CBA").with_size(2))
        .unwrap();
    assert_eq!(explicit.outcome, Outcome::Solved { moves: 6 });
}

#[test]
fn test_size_limits_are_configuration_errors() {
    let solver = solver();

    for size in [0, 1, 11] {
        let result = solver.solve(&SolveRequest::new("ABC#DEFGH").with_size(size));
        assert!(
            matches!(result, Err(PuzzleError::Configuration { .. })),
            "size {} should be rejected",
            size
        );
    }

    let mut config = Config::default_hardcoded();
    config.limits.max_size = 3;
    let limited = Solver::new(config);
    let result = limited.solve(&SolveRequest::new("ABCDEFG#IJKHMNOL"));
    assert!(matches!(result, Err(PuzzleError::Configuration { .. })));
}

#[test]
fn test_malformed_boards_are_rejected() {
    let solver = solver();

    // Outside the 3x3 alphabet
    let result = solver.solve(&SolveRequest::new("ABC#EFGHI"));
    assert!(matches!(result, Err(PuzzleError::MalformedInput { .. })));

    // Length does not match the explicit size
    let result = solver.solve(&SolveRequest::new("ABC#DEFGH").with_size(4));
    assert!(matches!(result, Err(PuzzleError::MalformedInput { .. })));
}

#[test]
fn test_worker_count_validation() {
    let solver = solver();

    let zero = SolveRequest::new("ABC#DEFGH")
        .with_strategy(Strategy::ParallelBfs)
        .with_threads(0);
    assert!(matches!(
        solver.solve(&zero),
        Err(PuzzleError::Configuration { .. })
    ));

    let too_many = SolveRequest::new("ABC#DEFGH")
        .with_strategy(Strategy::ParallelAStarManhattan)
        .with_threads(10_000);
    assert!(matches!(
        solver.solve(&too_many),
        Err(PuzzleError::Configuration { .. })
    ));

    // Sequential strategies do not use workers
    let sequential = SolveRequest::new("ABC#DEFGH")
        .with_strategy(Strategy::AStarManhattan)
        .with_threads(0);
    assert!(solver.solve(&sequential).is_ok());
}

#[test]
fn test_parallel_default_threads_resolve() {
    let request = SolveRequest::new("ABC#DEFGH").with_strategy(Strategy::ParallelAStarMisplaced);
    let report = solver().solve(&request).unwrap();

    assert_eq!(report.threads, Some(rayon::current_num_threads()));
    assert_eq!(report.outcome, Outcome::Solved { moves: 15 });
    assert!(report.rounds > 0);
}

#[test]
fn test_report_serializes_to_json() {
    let report = solver()
        .solve(&SolveRequest::new("ABCDEFGHIJKLMN#O"))
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["puzzle"], "ABCDEFGHIJKLMN#O");
    assert_eq!(json["strategy"], "astar-h2");
    assert_eq!(json["outcome"]["status"], "solved");
    assert_eq!(json["outcome"]["moves"], 1);
}

#[test]
fn test_run_log_appends_one_line_per_solve() {
    let path = temp_log_path("run_log");
    let _ = fs::remove_file(&path);

    let mut config = Config::default_hardcoded();
    config.run_log.enabled = true;
    config.run_log.log_file_path = path.to_string_lossy().into_owned();
    let solver = Solver::new(config);

    solver.solve(&SolveRequest::new("ABCDE#GHF")).unwrap();
    solver
        .solve(&SolveRequest::new("BACDEFGHIJKLMNO#").with_size(4))
        .unwrap();

    let contents = fs::read_to_string(&path).expect("run log should exist");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["outcome"]["moves"], 1);
    assert!(first["timestamp"].is_string());

    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["outcome"]["status"], "unsolvable");
    assert_eq!(second["solvability_checked"], true);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_strategy_names_parse() {
    assert_eq!("bfs".parse::<Strategy>(), Ok(Strategy::Bfs));
    assert_eq!("astar-h1".parse::<Strategy>(), Ok(Strategy::AStarMisplaced));
    assert_eq!("H2".parse::<Strategy>(), Ok(Strategy::AStarManhattan));
    assert_eq!("parallel-bfs".parse::<Strategy>(), Ok(Strategy::ParallelBfs));
    assert_eq!(
        "parallel-astar-h2".parse::<Strategy>(),
        Ok(Strategy::ParallelAStarManhattan)
    );
    assert!("dfs".parse::<Strategy>().is_err());

    for strategy in Strategy::all() {
        assert_eq!(strategy.as_str().parse::<Strategy>(), Ok(strategy));
    }
}

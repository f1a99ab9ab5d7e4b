// Run log for recording every solve as one JSON line
//
// Failures to open or write the file are logged and never abort a solve.

use log::error;
use parking_lot::Mutex;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Arc;

use crate::solver::SolveReport;

/// Represents a single run log entry
#[derive(Debug, Serialize)]
struct RunLogEntry<'a> {
    #[serde(flatten)]
    report: &'a SolveReport,
    timestamp: String,
}

/// Shared run log state
/// Uses Arc<Mutex<File>> so clones of the solver append to the same file
#[derive(Clone)]
pub struct RunLog {
    file: Arc<Mutex<Option<File>>>,
    enabled: bool,
}

impl RunLog {
    /// Creates a new run log
    /// If enabled is true, opens the log file in append mode
    pub fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return RunLog::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file_path)
        {
            Ok(file) => {
                log::info!("Run logging enabled: {}", log_file_path);
                RunLog {
                    file: Arc::new(Mutex::new(Some(file))),
                    enabled: true,
                }
            }
            Err(e) => {
                error!("Failed to open run log file '{}': {}", log_file_path, e);
                RunLog::disabled()
            }
        }
    }

    /// Creates a disabled run log (no-op)
    pub fn disabled() -> Self {
        RunLog {
            file: Arc::new(Mutex::new(None)),
            enabled: false,
        }
    }

    /// Appends one report to the log
    pub fn record(&self, report: &SolveReport) {
        if !self.enabled {
            return;
        }

        let mut file_guard = self.file.lock();

        if let Some(file) = file_guard.as_mut() {
            let entry = RunLogEntry {
                report,
                timestamp: chrono::Utc::now().to_rfc3339(),
            };

            match serde_json::to_string(&entry) {
                Ok(json_line) => {
                    if let Err(e) = writeln!(file, "{}", json_line) {
                        error!("Failed to write run log entry: {}", e);
                    } else if let Err(e) = file.flush() {
                        error!("Failed to flush run log: {}", e);
                    }
                }
                Err(e) => {
                    error!("Failed to serialize run log entry: {}", e);
                }
            }
        }
    }
}

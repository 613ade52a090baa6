//! Headless mode - print the view of one route as JSON
//!
//! Resolves the initial route exactly as the terminal UI would, waits until
//! every remote call it started has answered, then writes one NDJSON line to
//! stdout and exits. Meant for scripts and end-to-end tests.
//!
//! # Example Output
//!
//! ```json
//! {"event":"view","timestamp":1704700001000,"view":{"path":"/processes/L21h...","route":{"route":"process_detail","key":"L21h..."},...}}
//! ```

pub mod runner;

pub use runner::{capture_view, run_headless};

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use tracing::error;

/// Lines written in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The settled view of the requested route
    View { timestamp: i64, view: Value },

    /// The view could not be produced
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn view(view: Value) -> Self {
        Self::View {
            timestamp: Self::now(),
            view,
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}

//! Migrate command implementation
//!
//! This module implements `nameshift migrate`, which:
//! - Verifies the target root exists (fatal otherwise)
//! - Loads nameshift.toml
//! - Warns and waits out the pre-flight cancellation window
//! - Runs the four migration stages, each its own failure boundary
//! - Returns an exit code reflecting the worst outcome

use crate::cli::args::ColorChoice;
use crate::cli::common::{EXIT_ERROR, EXIT_STAGE_FAILED, EXIT_SUCCESS};
use crate::engine::{Migration, MigrationReport};
use crate::error::MigrateError;
use crate::output::StatusReporter;
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Run the migrate command
///
/// # Returns
///
/// Exit code:
/// - 0: every stage completed
/// - 1: one or more stages failed (the rest still ran)
/// - 2: fatal error before any stage (missing root, bad configuration)
pub fn run_migrate(root: &str, yes: bool, color: ColorChoice) -> i32 {
    let mut reporter = StatusReporter::new(color.for_stderr());

    match run_migrate_inner(root, yes, &mut reporter) {
        Ok(report) => {
            if report.all_ok() {
                EXIT_SUCCESS
            } else {
                eprintln!("Migration finished with {} failed stage(s)", report.failed());
                EXIT_STAGE_FAILED
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Internal implementation of the migrate command
fn run_migrate_inner(
    root: &str,
    yes: bool,
    reporter: &mut StatusReporter,
) -> Result<MigrationReport, MigrateError> {
    let root = Path::new(root);
    if !root.is_dir() {
        return Err(MigrateError::RootNotFound(root.to_path_buf()));
    }

    let config = super::common::load_config()?;

    // The delay is the only cancellation point; once mutation starts
    // there is none.
    reporter.warn("Back up the project before migrating; files are rewritten in place.");
    let delay = config.migration.delay_seconds;
    if !yes && delay > 0 {
        reporter.warn(&format!(
            "Starting in {} second(s). Press Ctrl+C to cancel.",
            delay
        ));
        thread::sleep(Duration::from_secs(delay));
    }

    let migration = Migration::new(root, &config);
    Ok(migration.run(reporter))
}

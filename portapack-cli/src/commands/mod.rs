//! Command implementations for the CLI.
//!
//! Each submodule offers two entry points: an interactive flow used by the
//! menu, which prompts through an [`InputProvider`](crate::input::InputProvider),
//! and a direct `run_*` function used by the matching subcommand.

pub mod about;
pub mod copy;
pub mod dotnet;
pub mod java;
pub mod probe;
pub mod python;

use crate::error::{CliResult, invalid_input};
use crate::terminal::Console;

use portapack_core::{CoreConfig, SyncReport, ToolRunner};

use std::path::Path;

/// Everything a command needs besides its own arguments.
pub struct Context<'a> {
    pub runner: &'a dyn ToolRunner,
    pub config: &'a CoreConfig,
    pub console: &'a Console,
}

/// Runs `job` while a spinner with `message` is shown.
pub(crate) fn with_spinner<T>(console: &Console, message: &str, job: impl FnOnce() -> T) -> T {
    let spinner = console.spinner(message);
    let result = job();
    spinner.finish_and_clear();
    result
}

/// Fails with `message` when `path` is empty.
pub(crate) fn require_non_empty(path: &Path, message: &str) -> CliResult<()> {
    if path.as_os_str().is_empty() {
        return Err(invalid_input(message));
    }
    Ok(())
}

/// Summarises a batch copy: a success line, plus one warning per entry
/// that could not be copied.
pub(crate) fn report_sync(console: &Console, report: &SyncReport) {
    for skipped in &report.failed {
        console.warning(&format!(
            "Skipped '{}': {}",
            skipped.source.display(),
            skipped.error
        ));
    }
    if !report.excluded.is_empty() {
        log::debug!("Excluded from copy: {:?}", report.excluded);
    }
    if report.is_complete() {
        console.success(&format!("Copied {} supporting entries.", report.copied.len()));
    } else {
        console.warning(&format!(
            "Copied {} supporting entries, {} failed.",
            report.copied.len(),
            report.failed.len()
        ));
    }
}

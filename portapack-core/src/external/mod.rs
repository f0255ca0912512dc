// ============================================================================
// portapack-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Probing and Running Third-Party Packagers
//
// This module encapsulates every interaction with external command-line
// tools (pyinstaller, dotnet, jpackage). Callers go through the `ToolRunner`
// trait so tests can substitute a fake runner and inspect the assembled
// arguments without launching real packagers.
//
// KEY COMPONENTS:
// - is_tool_installed: stateless availability probe (`<tool> --version`)
// - ToolCommand / ToolOutput: a program invocation and its captured result
// - ToolRunner: capability trait, implemented by SystemToolRunner
// - require_tool / run_tool: helpers shared by the packaging flows
//
// AI-ASSISTANT-INFO: External tool probing and execution abstraction

use crate::config::{CoreConfig, VERSION_QUERY_ARG};
use crate::error::{CoreError, CoreResult};

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::process::{Command, Stdio};

#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

/// Number of trailing output lines kept in a `ToolFailed` error.
const FAILURE_OUTPUT_LINES: usize = 20;

// ============================================================================
// KNOWN TOOLS
// ============================================================================

/// The external packagers portapack knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    PyInstaller,
    Dotnet,
    Jpackage,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::PyInstaller, Tool::Dotnet, Tool::Jpackage];

    /// Human readable name used in messages.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Tool::PyInstaller => "PyInstaller",
            Tool::Dotnet => "dotnet SDK",
            Tool::Jpackage => "jpackage",
        }
    }

    /// Where to get the tool when it is missing.
    #[must_use]
    pub fn install_hint(self) -> &'static str {
        match self {
            Tool::PyInstaller => "Install it with `pip install pyinstaller`.",
            Tool::Dotnet => "Please install it from https://dotnet.microsoft.com/download",
            Tool::Jpackage => "Please install JDK 14 or higher from https://adoptium.net/",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks whether `tool_name` can be launched and answers a version query.
///
/// Runs `<tool_name> --version` with stdout and stderr discarded. Returns
/// `false` when the executable is not on the search path, cannot be started,
/// or exits with a non-zero status. Never returns an error.
///
/// ```rust,no_run
/// use portapack_core::is_tool_installed;
///
/// if !is_tool_installed("dotnet") {
///     eprintln!("dotnet is not available");
/// }
/// ```
pub fn is_tool_installed(tool_name: &str) -> bool {
    let result = Command::new(tool_name)
        .arg(VERSION_QUERY_ARG)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(status) if status.success() => {
            log::debug!("Found dependency: {}", tool_name);
            true
        }
        Ok(status) => {
            log::debug!("Dependency '{}' answered the version query with {}", tool_name, status);
            false
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Dependency '{}' not found.", tool_name);
            false
        }
        Err(e) => {
            log::debug!("Failed to start dependency check for '{}': {}", tool_name, e);
            false
        }
    }
}

// ============================================================================
// COMMAND MODEL
// ============================================================================

/// A single external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<OsString>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(&mut self, arg: impl AsRef<OsStr>) -> &mut Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self.arg(arg);
        }
        self
    }

    /// Arguments as lossy UTF-8 strings, mostly for assertions and logs.
    #[must_use]
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in self.args_lossy() {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Exit status and captured streams of a finished tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// The last lines the tool printed, stderr preferred.
    #[must_use]
    pub fn tail(&self, lines: usize) -> String {
        let source = if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        };
        let all: Vec<&str> = source.lines().collect();
        let start = all.len().saturating_sub(lines);
        all[start..].join("\n")
    }
}

// ============================================================================
// TOOL RUNNER CAPABILITY
// ============================================================================

/// Runs external commands to completion.
pub trait ToolRunner {
    /// Availability probe, see [`is_tool_installed`].
    fn is_installed(&self, program: &str) -> bool;

    /// Runs `command`, blocking until it exits.
    ///
    /// A non-zero exit is not an error at this level; it is reported through
    /// [`ToolOutput::exit_code`]. Failing to launch the program is.
    fn run(&self, command: &ToolCommand) -> CoreResult<ToolOutput>;
}

/// Production runner backed by `std::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct SystemToolRunner;

impl ToolRunner for SystemToolRunner {
    fn is_installed(&self, program: &str) -> bool {
        is_tool_installed(program)
    }

    fn run(&self, command: &ToolCommand) -> CoreResult<ToolOutput> {
        log::debug!("Spawning: {}", command);
        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    CoreError::ToolMissing {
                        tool: command.program.clone(),
                        hint: "Make sure it is installed and on the search path.".to_string(),
                    }
                } else {
                    CoreError::CommandStart {
                        tool: command.program.clone(),
                        source: e,
                    }
                }
            })?;

        Ok(ToolOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

// ============================================================================
// SHARED HELPERS
// ============================================================================

/// Fails with `ToolMissing` unless the configured program for `tool` answers
/// the version probe.
pub fn require_tool<R: ToolRunner + ?Sized>(
    runner: &R,
    config: &CoreConfig,
    tool: Tool,
) -> CoreResult<()> {
    let program = config.program(tool);
    if runner.is_installed(program) {
        return Ok(());
    }
    log::warn!("{} ({}) not found in PATH.", tool, program);
    Err(CoreError::ToolMissing {
        tool: program.to_string(),
        hint: tool.install_hint().to_string(),
    })
}

/// Runs `command` and turns a non-zero exit into `ToolFailed`.
pub fn run_tool<R: ToolRunner + ?Sized>(runner: &R, command: &ToolCommand) -> CoreResult<ToolOutput> {
    log::info!("Running: {}", command);
    let output = runner.run(command)?;

    for line in output.stdout.lines() {
        log::debug!("[{}] {}", command.program, line);
    }
    for line in output.stderr.lines() {
        log::debug!("[{} stderr] {}", command.program, line);
    }

    if !output.success() {
        log::warn!("{} failed with exit code {:?}", command.program, output.exit_code);
        return Err(CoreError::ToolFailed {
            tool: command.program.clone(),
            exit_code: output.exit_code,
            output: output.tail(FAILURE_OUTPUT_LINES),
        });
    }

    Ok(output)
}

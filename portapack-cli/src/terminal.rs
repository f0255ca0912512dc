// ============================================================================
// portapack-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: User-facing messages and styling
//
// Everything the user is meant to read goes through a `Console` value that
// main builds once and hands to every flow. Each message is also forwarded
// to the `log` facade under CONSOLE_LOG_TARGET, so a log file records the
// session while the stderr log chain skips what was already printed.
//
// KEY COMPONENTS:
// - styling: symbols and layout constants
// - Console: headings, status lines, prompts, screen clearing, spinners
// - should_use_color: --no-color / NO_COLOR / tty detection
//
// AI-ASSISTANT-INFO: Terminal UI components and styling for the CLI

use console::Term;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::Level;
use owo_colors::OwoColorize;

use std::cell::RefCell;
use std::io::{self, Write};
use std::time::Duration;

/// Log target used for messages the Console has already shown to the user.
pub const CONSOLE_LOG_TARGET: &str = "portapack::console";

// ============================================================================
// STYLING CONSTANTS
// ============================================================================

pub mod styling {
    pub const SUCCESS_SYMBOL: &str = "✓";
    pub const ERROR_SYMBOL: &str = "✗";
    pub const WARNING_SYMBOL: &str = "!";
    pub const INFO_SYMBOL: &str = "»";

    pub const STATUS_INDENT: &str = "  ";
    pub const SPINNER_TICK_MS: u64 = 100;
    pub const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";
}

/// Decides whether output should be colored.
///
/// Colors are off when `--no-color` was passed, when `NO_COLOR` is set to
/// anything, or when stdout is not a terminal.
pub fn should_use_color(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::colors_enabled()
}

// ============================================================================
// CONSOLE
// ============================================================================

/// Styled writer for user-facing output.
pub struct Console {
    out: RefCell<Box<dyn Write>>,
    use_color: bool,
    is_terminal: bool,
}

impl Console {
    /// Console writing to the process's standard output.
    pub fn stdout(use_color: bool) -> Self {
        Self {
            out: RefCell::new(Box::new(io::stdout())),
            use_color,
            is_terminal: Term::stdout().is_term(),
        }
    }

    /// Console writing to an arbitrary sink. Never clears the screen and
    /// never draws spinners.
    pub fn with_writer(writer: Box<dyn Write>, use_color: bool) -> Self {
        Self {
            out: RefCell::new(writer),
            use_color,
            is_terminal: false,
        }
    }

    /// Bold title followed by an underline of matching width.
    pub fn heading(&self, title: &str) {
        log::info!(target: CONSOLE_LOG_TARGET, "{}", title);
        let rule = "-".repeat(title.chars().count());
        if self.use_color {
            self.emit(&title.bold().to_string());
        } else {
            self.emit(title);
        }
        self.emit(&rule);
    }

    /// Unstyled line, also used for blank spacing.
    pub fn line(&self, text: &str) {
        if !text.is_empty() {
            log::debug!(target: CONSOLE_LOG_TARGET, "{}", text);
        }
        self.emit(text);
    }

    pub fn info(&self, message: &str) {
        self.status(Level::Info, styling::INFO_SYMBOL, message);
    }

    pub fn success(&self, message: &str) {
        self.status(Level::Info, styling::SUCCESS_SYMBOL, message);
    }

    pub fn warning(&self, message: &str) {
        self.status(Level::Warn, styling::WARNING_SYMBOL, message);
    }

    pub fn error(&self, message: &str) {
        self.status(Level::Error, styling::ERROR_SYMBOL, message);
    }

    /// Clears the screen when writing to a terminal; a no-op otherwise.
    pub fn clear_screen(&self) {
        if !self.is_terminal {
            return;
        }
        if let Err(e) = Term::stdout().clear_screen() {
            log::debug!("Could not clear the screen: {}", e);
        }
    }

    /// Starts a spinner on stderr. Hidden unless stderr is a terminal.
    ///
    /// The caller finishes it with `finish_and_clear`.
    pub fn spinner(&self, message: &str) -> ProgressBar {
        log::info!(target: CONSOLE_LOG_TARGET, "{}", message);
        if !self.is_terminal || !Term::stderr().is_term() {
            self.info(message);
            return ProgressBar::hidden();
        }

        let style = ProgressStyle::with_template(styling::SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(styling::SPINNER_TICK_MS));
        spinner
    }

    fn status(&self, level: Level, symbol: &str, message: &str) {
        log::log!(target: CONSOLE_LOG_TARGET, level, "{}", message);
        let symbol = if self.use_color {
            match level {
                Level::Error => symbol.red().bold().to_string(),
                Level::Warn => symbol.yellow().bold().to_string(),
                _ if symbol == styling::SUCCESS_SYMBOL => symbol.green().bold().to_string(),
                _ => symbol.cyan().to_string(),
            }
        } else {
            symbol.to_string()
        };
        self.emit(&format!("{}{} {}", styling::STATUS_INDENT, symbol, message));
    }

    fn emit(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            log::debug!("Failed to write to the terminal: {}", e);
        }
    }
}

// ============================================================================
// TEST SUPPORT
// ============================================================================

/// In-memory sink shared between a test and the Console writing into it.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CapturedOutput(std::rc::Rc<RefCell<Vec<u8>>>);

#[cfg(test)]
impl CapturedOutput {
    pub(crate) fn console() -> (Console, CapturedOutput) {
        let captured = CapturedOutput::default();
        let console = Console::with_writer(Box::new(captured.clone()), false);
        (console, captured)
    }

    pub(crate) fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

#[cfg(test)]
impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lines_without_color() {
        let (console, captured) = CapturedOutput::console();
        console.success("Folder copied");
        console.error("Source path does not exist.");
        console.warning("Invalid choice, please try again.");

        let text = captured.text();
        assert!(text.contains("  ✓ Folder copied\n"));
        assert!(text.contains("  ✗ Source path does not exist.\n"));
        assert!(text.contains("  ! Invalid choice, please try again.\n"));
    }

    #[test]
    fn test_heading_is_underlined() {
        let (console, captured) = CapturedOutput::console();
        console.heading("Portable App Packager");
        assert_eq!(captured.text(), "Portable App Packager\n---------------------\n");
    }

    #[test]
    fn test_no_color_flag_wins() {
        assert!(!should_use_color(true));
    }

    #[test]
    fn test_spinner_is_hidden_off_terminal() {
        let (console, captured) = CapturedOutput::console();
        let spinner = console.spinner("Running pyinstaller...");
        assert!(spinner.is_hidden());
        spinner.finish_and_clear();
        assert!(captured.text().contains("Running pyinstaller..."));
    }
}

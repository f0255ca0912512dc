// portapack-cli/src/input.rs
//
// Line-oriented prompting. Flows never touch stdin directly; they ask an
// `InputProvider`, which lets the menu be driven by a script in tests.

use crate::error::{CliError, CliResult};

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Source of user answers.
pub trait InputProvider {
    /// Shows `prompt` and reads one line without its line terminator.
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Reads answers from the process's standard input.
#[derive(Debug, Default)]
pub struct StdinInput;

impl InputProvider for StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            // Keep the shell prompt off the dangling question.
            writeln!(stdout)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Pre-recorded answers. Records every prompt it is asked.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}

// ============================================================================
// PROMPT HELPERS
// ============================================================================

/// Asks for a value and trims surrounding whitespace.
pub fn ask(input: &mut dyn InputProvider, prompt: &str) -> CliResult<String> {
    match input.read_line(prompt)? {
        Some(answer) => Ok(answer.trim().to_string()),
        None => Err(CliError::InputClosed),
    }
}

/// Asks for a path. Quotes left over from drag-and-drop are removed.
pub fn ask_path(input: &mut dyn InputProvider, prompt: &str) -> CliResult<PathBuf> {
    let answer = ask(input, prompt)?;
    Ok(PathBuf::from(strip_quotes(&answer)))
}

/// Asks a y/n question. Only `y` (any case) counts as yes.
pub fn confirm(input: &mut dyn InputProvider, prompt: &str) -> CliResult<bool> {
    Ok(ask(input, prompt)?.eq_ignore_ascii_case("y"))
}

/// Waits for Enter. End of input is not an error here.
pub fn pause(input: &mut dyn InputProvider, prompt: &str) -> CliResult<bool> {
    Ok(input.read_line(prompt)?.is_some())
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

// portapack-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for unit tests and when the "test-mocks" feature is enabled.

use super::{ToolCommand, ToolOutput, ToolRunner};
use crate::error::{CoreError, CoreResult};

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Scripted result for one program.
#[derive(Debug, Clone)]
enum MockBehaviour {
    Exit(ToolOutput),
    NotFound,
}

/// Mock implementation of `ToolRunner`.
///
/// Programs are not installed until `install` is called. Every `run` call is
/// recorded; programs without a scripted behaviour exit with status 0.
#[derive(Clone, Default)]
pub struct MockToolRunner {
    installed: Rc<RefCell<HashSet<String>>>,
    behaviours: Rc<RefCell<HashMap<String, MockBehaviour>>>,
    received_calls: Rc<RefCell<Vec<ToolCommand>>>,
    probes: Rc<RefCell<Vec<String>>>,
}

impl MockToolRunner {
    pub fn new() -> Self {
        Default::default()
    }

    /// Marks `program` as answering the availability probe.
    pub fn install(&self, program: &str) -> &Self {
        self.installed.borrow_mut().insert(program.to_string());
        self
    }

    /// Makes `program` exit with `code`, printing `stderr`.
    pub fn set_exit(&self, program: &str, code: i32, stderr: &str) -> &Self {
        let output = ToolOutput {
            exit_code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        };
        self.behaviours
            .borrow_mut()
            .insert(program.to_string(), MockBehaviour::Exit(output));
        self
    }

    /// Makes launching `program` fail as if it was not on the search path.
    pub fn set_not_found(&self, program: &str) -> &Self {
        self.behaviours
            .borrow_mut()
            .insert(program.to_string(), MockBehaviour::NotFound);
        self
    }

    pub fn get_received_calls(&self) -> Vec<ToolCommand> {
        self.received_calls.borrow().clone()
    }

    /// Program names passed to `is_installed`, in order.
    pub fn get_probes(&self) -> Vec<String> {
        self.probes.borrow().clone()
    }
}

impl ToolRunner for MockToolRunner {
    fn is_installed(&self, program: &str) -> bool {
        self.probes.borrow_mut().push(program.to_string());
        self.installed.borrow().contains(program)
    }

    fn run(&self, command: &ToolCommand) -> CoreResult<ToolOutput> {
        self.received_calls.borrow_mut().push(command.clone());
        log::info!("MockToolRunner: {}", command);

        match self.behaviours.borrow().get(&command.program) {
            Some(MockBehaviour::Exit(output)) => Ok(output.clone()),
            Some(MockBehaviour::NotFound) => Err(CoreError::ToolMissing {
                tool: command.program.clone(),
                hint: "mock: not installed".to_string(),
            }),
            None => Ok(ToolOutput {
                exit_code: Some(0),
                ..Default::default()
            }),
        }
    }
}

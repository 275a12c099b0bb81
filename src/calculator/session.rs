//! A calculator session: one memory, fed line after line.

use crate::error::{CalcError, Result};
use crate::input::{Command, tokenize};
use crate::memory::Memory;

/// Outcome of executing one line of commands.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// The commands the line was tokenized into.
    pub commands: Vec<Command>,
    /// Memory snapshot after each command. Empty unless tracing is on.
    pub trace: Vec<Memory>,
    /// Display value after the last applied command.
    pub display: String,
    /// Recoverable error that cut the line short. The failing command was
    /// rolled back and the commands after it were skipped.
    pub error: Option<CalcError>,
}

/// Owns the calculator memory for the lifetime of a session.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    memory: Memory,
    trace: bool,
}

impl Calculator {
    /// Create a calculator in the all-clear state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator that records a snapshot after every command.
    pub fn with_trace(trace: bool) -> Self {
        Self {
            memory: Memory::new(),
            trace,
        }
    }

    /// Current calculator memory.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// The value on screen, rendered as plain decimal text.
    pub fn display_value(&self) -> Result<String> {
        self.memory.display_value()
    }

    /// Tokenize and execute a line.
    ///
    /// A line with an unknown character is rejected as a whole and memory is
    /// not touched.
    pub fn execute_line(&mut self, line: &str) -> Result<Evaluation> {
        let commands = tokenize(line)?;
        self.execute(commands)
    }

    /// Execute commands in order.
    ///
    /// If a command fails with a recoverable error, memory is restored to
    /// what it was right before that command, the rest of the line is
    /// skipped and the error is recorded in the evaluation. Commands before
    /// the failing one stay applied. Fatal errors are returned as `Err`.
    pub fn execute(&mut self, commands: Vec<Command>) -> Result<Evaluation> {
        let mut trace = Vec::new();
        let mut error = None;

        for command in &commands {
            let before = self.memory.clone();
            if let Err(err) = self.memory.apply(command) {
                if err.is_fatal() {
                    return Err(err);
                }
                tracing::debug!(%command, error = %err, "rolling back command");
                self.memory = before;
                error = Some(err);
                break;
            }

            if self.trace {
                trace.push(self.memory.clone());
            }
        }

        Ok(Evaluation {
            display: self.memory.display_value()?,
            commands,
            trace,
            error,
        })
    }
}

//! The read-print loop.
//!
//! Reads one line at a time, feeds it to the calculator and prints the
//! display value. Generic over its streams so sessions can be scripted.

use crate::calculator::{Calculator, Evaluation};
use crate::config::Config;
use crate::error::CalcError;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Interactive session over a reader and two writers.
pub struct Repl {
    calculator: Calculator,
    config: Config,
}

impl Repl {
    /// Create a loop with a fresh calculator; debug mode turns on tracing.
    pub fn new(config: Config) -> Self {
        Self {
            calculator: Calculator::with_trace(config.debug),
            config,
        }
    }

    /// The calculator driven by this loop.
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Run until the quit sentinel or end of input.
    ///
    /// Bad lines are reported on `errors` and the loop continues. A fatal
    /// calculator error stops the loop and is returned.
    pub fn run<R, W, E>(&mut self, input: R, output: &mut W, errors: &mut E) -> Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        if self.config.banner {
            writeln!(
                output,
                "Simple calculator. Enter '{}' to quit.",
                self.config.quit
            )?;
            writeln!(output)?;
        }

        let mut display = self.calculator.display_value()?;
        self.prompt(output, &display)?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if line == self.config.quit {
                break;
            }

            match self.calculator.execute_line(&line) {
                Ok(evaluation) => {
                    if self.config.debug {
                        write_trace(output, &evaluation)?;
                    }
                    if let Some(err) = &evaluation.error {
                        report(errors, err)?;
                    }
                    display = evaluation.display;
                }
                Err(err) if err.is_fatal() => {
                    return Err(err).context(format!("Calculator failed on input {:?}", line));
                }
                Err(err) => {
                    tracing::debug!(line = %line, error = %err, "rejected input line");
                    report(errors, &err)?;
                    display = self.calculator.display_value()?;
                }
            }

            self.prompt(output, &display)?;
        }

        writeln!(output)?;
        output.flush()?;
        Ok(())
    }

    fn prompt<W: Write>(&self, output: &mut W, display: &str) -> Result<()> {
        writeln!(output, "{}", display)?;
        write!(output, "{}", self.config.prompt)?;
        output.flush()?;
        Ok(())
    }
}

fn write_trace<W: Write>(output: &mut W, evaluation: &Evaluation) -> Result<()> {
    let commands: Vec<String> = evaluation.commands.iter().map(|c| c.to_string()).collect();
    writeln!(output, "Commands: [{}]", commands.join(", "))?;
    for snapshot in &evaluation.trace {
        writeln!(output, "{}", snapshot)?;
    }
    Ok(())
}

fn report<E: Write>(errors: &mut E, err: &CalcError) -> Result<()> {
    let outcome = match err {
        CalcError::InvalidInput { .. } => "Calculator state is unchanged",
        _ => "The failing button and the rest of the line were ignored",
    };
    writeln!(errors, "[ERROR] {}. {}.", err, outcome)?;
    errors.flush()?;
    Ok(())
}

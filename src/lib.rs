//! keycalc: a keypress-at-a-time desktop calculator.
//!
//! Input characters are tokenized into commands, which drive a small memory
//! state machine with two precedence tiers and exact decimal arithmetic.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod memory;
pub mod repl;

pub use calculator::{Calculator, Evaluation};
pub use error::{CalcError, Result};
pub use input::{Command, CommandKind, tokenize};
pub use memory::{Memory, Operator};

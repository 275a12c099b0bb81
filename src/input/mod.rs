//! Input module mapping raw keypresses to calculator commands.
//!
//! This module provides functionality to:
//! - Classify a single character as a calculator button
//! - Tokenize a whole line, rejecting it if any character is unknown

mod command;
mod tokenizer;

pub use command::{Command, CommandKind};
pub use tokenizer::tokenize;

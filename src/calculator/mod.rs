//! Calculator module for running a keypress session.
//!
//! This module provides functionality to:
//! - Execute tokenized lines against a persistent memory
//! - Roll back commands that fail on bad input
//! - Record state snapshots for debug output

mod session;

pub use session::{Calculator, Evaluation};

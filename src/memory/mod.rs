//! Calculator memory module.
//!
//! This module provides:
//! - The memory state machine that consumes commands
//! - Operators with two precedence tiers and exact decimal arithmetic
//! - Conversions between display text and decimal values

mod number;
mod operator;
mod state;

pub use number::{parse_display, to_plain_string};
pub use operator::{Operator, Precedence};
pub use state::{Deferred, Memory};

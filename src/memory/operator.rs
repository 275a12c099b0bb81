//! Binary operators and their two precedence tiers.

use crate::error::{CalcError, Result};
use bigdecimal::BigDecimal;
use num_traits::Zero;
use std::fmt;

/// Precedence tier of an operator. `High` binds tighter than `Low`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Low,
    High,
}

/// One of the four arithmetic buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Get the operator for a button character, if it is one.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// The button character for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Name used in debug output, e.g. `Multiply(*)`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }

    /// Multiply and divide bind tighter than add and subtract.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Multiply | Self::Divide => Precedence::High,
            Self::Add | Self::Subtract => Precedence::Low,
        }
    }

    /// Compute `first OP second` exactly.
    ///
    /// An exact quotient keeps the scale `first.scale - second.scale` unless
    /// it needs more digits (`6.0/2` is `3.0`, `1/4` is `0.25`). A quotient
    /// with no finite expansion is rounded by `bigdecimal` to its default
    /// precision.
    pub fn apply(self, first: &BigDecimal, second: &BigDecimal) -> Result<BigDecimal> {
        let result = match self {
            Self::Add => first + second,
            Self::Subtract => first - second,
            Self::Multiply => first * second,
            Self::Divide => {
                if second.is_zero() {
                    return Err(CalcError::DivisionByZero);
                }
                divide(first, second)
            }
        };
        Ok(result)
    }
}

fn divide(first: &BigDecimal, second: &BigDecimal) -> BigDecimal {
    let quotient = first / second;
    if &(&quotient * second) != first {
        return quotient.normalized();
    }

    let preferred_scale = scale_of(first) - scale_of(second);
    let shortest = quotient.normalized();
    let scale = scale_of(&shortest).max(preferred_scale);
    shortest.with_scale(scale)
}

fn scale_of(value: &BigDecimal) -> i64 {
    value.as_bigint_and_exponent().1
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

//! Errors raised at the boundary of the factorial computations.

use thiserror::Error;

/// The input could not be represented as an integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid argument '{input}': {reason}")]
pub struct InvalidArgument {
    pub input: String,
    pub reason: String,
}
impl InvalidArgument {
    pub fn new(input: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no factorial for key {key} in a table bounded by {bound}")]
pub struct KeyNotFound {
    pub key: u64,
    pub bound: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{arg}! overflows u128")]
pub struct Overflow {
    pub arg: u64,
}

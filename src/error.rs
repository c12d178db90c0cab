use std::fmt;

/// Errors surfaced across the `sweepplan` library boundary.
///
/// Per the error handling design, most failure modes documented in the
/// specification (a degenerate split, a multi-part merge union, an
/// empty-overlap cell, a depth cap) are *not* errors: they are recovered
/// locally and show up only as [`crate::diagnostics::PassRecord`] entries
/// or as an omitted cell/partition. `CppError` exists only for failures at
/// the pipeline boundary itself.
#[derive(Debug)]
pub enum CppError {
    /// The input polygon, a grid parameter, or a tolerance is invalid.
    InvalidInput(String),
}

impl fmt::Display for CppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for CppError {}

pub type Result<T> = std::result::Result<T, CppError>;

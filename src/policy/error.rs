//! Policy error types.

use thiserror::Error;

/// Errors that can occur when loading or validating an enrollment policy
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PolicyError {
    /// Policy JSON could not be parsed
    #[error("Policy parsing failed: {0}")]
    Parse(String),

    /// Minimum passing score is negative or not a number
    #[error("Minimum passing score must be a non-negative number, got {0}")]
    InvalidMinScore(f64),

    /// GPA borders are negative or out of order
    #[error("GPA borders must satisfy 0 <= unqualified ({unqualified}) <= privileged ({privileged})")]
    InvalidBorders { unqualified: f64, privileged: f64 },

    /// Unit ceilings are out of order
    #[error(
        "Unit ceilings must satisfy unqualified ({unqualified}) <= general ({general}) <= privileged ({privileged})"
    )]
    InvalidCeilings {
        unqualified: u32,
        general: u32,
        privileged: u32,
    },
}

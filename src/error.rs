//! Error types and exit codes for lattice path analysis.

use std::process::ExitCode;
use thiserror::Error;

/// Errors raised at the analysis boundary.
///
/// The counters themselves never validate their input; everything here is
/// detected before a counter is called, or while writing a report.
#[derive(Error, Debug)]
pub enum PathError {
    #[error("grid size {value} is outside the allowed range [{min}, {max}]")]
    InputOutOfRange { value: usize, min: usize, max: usize },

    #[error("computation too large: naive recursion at size {size} exceeds the ceiling of {limit}")]
    ComputationTooLarge { size: usize, limit: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PathError {
    /// Convert error to a process exit code:
    /// - 1: IO or serialisation failure
    /// - 2: input outside the allowed range
    /// - 3: computation refused as too large
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Raw status byte behind [`PathError::exit_code`].
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Io(_) | Self::Json(_) => 1,
            Self::InputOutOfRange { .. } => 2,
            Self::ComputationTooLarge { .. } => 3,
        }
    }
}

/// Result type alias for lattice path operations.
pub type Result<T> = std::result::Result<T, PathError>;

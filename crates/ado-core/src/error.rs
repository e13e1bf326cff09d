//! Error taxonomy for the instruction-processing boundary.

use thiserror::Error;

/// Errors surfaced at the instruction-processing boundary.
///
/// Bad *content* never produces an error: synthesis degrades to fewer or zero
/// work items, and invalid overrides are ignored. Only input that is
/// structurally unusable (not parseable at all) fails, and that failure is
/// kept distinct from structural validation issues, which are reported as an
/// itemized list instead.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The input could not be processed at all (e.g. not valid JSON where a
    /// JSON payload is required).
    #[error("cannot process input: {0}")]
    InvalidInput(String),
}

impl CoreError {
    /// Wrap a parse failure as the "cannot process" condition.
    pub fn invalid(reason: impl std::fmt::Display) -> Self {
        Self::InvalidInput(reason.to_string())
    }
}

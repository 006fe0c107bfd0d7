//! Typed error definitions for unaccent.
//! Core rename/transliteration operations never raise; these cover the
//! orchestrator's own failure modes, with stable codes for structured logs.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnaccentError {
    #[error("Target path not found: {0}")]
    TargetNotFound(PathBuf),

    #[error("Target is neither a file nor a directory: {0}")]
    TargetInvalid(PathBuf),

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl UnaccentError {
    /// Stable machine-readable code for log consumers.
    pub fn code(&self) -> &'static str {
        match self {
            UnaccentError::TargetNotFound(_) => "target_not_found",
            UnaccentError::TargetInvalid(_) => "target_invalid",
            UnaccentError::Interrupted => "interrupted",
        }
    }
}

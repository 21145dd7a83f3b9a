//! Error type for the CodeBoard client.
//!
//! # Design
//! Every failure in the crate — a missing key at construction, a rejected
//! save body, a transport fault — funnels into the single [`BoardError`]
//! type. There is no structured error code: callers distinguish failure
//! kinds only by the originating operation name and the message text, the
//! same contract the upstream service's official wrapper exposes.

use std::fmt;

/// The one error type surfaced by `BoardClient`.
///
/// Carries the name of the client operation that raised it, so any failure
/// is traceable to a specific call even after crossing several layers.
#[derive(Debug, Clone)]
pub struct BoardError {
    operation: String,
    message: String,
}

impl BoardError {
    pub fn new(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Name of the client operation that raised this error, e.g. `"save"`.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CodeBoard - [FatalError] ({}): {}",
            self.operation, self.message
        )
    }
}

impl std::error::Error for BoardError {}

//! Shared mutable state for one engine run.

use std::path::PathBuf;

/// State visible to every command during one run.
///
/// Created fresh at run start, mutated by validate phases only (the
/// source-file command resolves text here, the output-file command records
/// the destination), discarded once the report is rendered.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Full input text; empty until the source-file flag resolves it.
    pub source: String,
    /// Path of the loaded source file.
    pub file_in: Option<PathBuf>,
    /// Report destination; stdout when unset.
    pub file_out: Option<PathBuf>,
    /// Set on the first validation failure; short-circuits the run.
    pub panicked: bool,
}

impl RunContext {
    /// True once there is some text to operate on.
    pub fn source_resolved(&self) -> bool {
        !self.source.is_empty() || self.file_in.is_some()
    }
}

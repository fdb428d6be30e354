//! The command contract and the tri-state outcome of a command phase.

use super::context::RunContext;
use super::instruction::{Flag, Instruction};

/// Outcome of one command phase.
///
/// `Silent` (and any empty message) is deliberately excluded from the
/// report. During validation a `Failure` aborts the whole run; during
/// execution it is recorded next to the successes and the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Success(String),
    Failure(String),
    Silent,
}

impl Output {
    pub fn success(message: impl Into<String>) -> Self {
        Output::Success(message.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Output::Failure(message.into())
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Output::Failure(_))
    }

    /// The message to render, if any. Empty messages render as nothing.
    pub fn message(&self) -> Option<&str> {
        match self {
            Output::Success(message) | Output::Failure(message) if !message.is_empty() => {
                Some(message)
            }
            _ => None,
        }
    }
}

/// A handler bound to exactly one flag identity.
///
/// `validate` runs once per matched flag, in flag-position order, before
/// any `execute` runs. It may mutate the shared context (the source-file
/// command loads text there) and may reach into *other* flags' modifiers
/// through the instruction, but only during this phase, before the target
/// flag's own turn comes up. A `Failure` here stops the whole run.
///
/// `execute` runs once per validated flag, in the same order, only when
/// the entire validation pass succeeded. It produces the reportable
/// result; failures are recorded and do not stop the remaining commands.
pub trait Command {
    /// Short name, e.g. `-w`.
    fn caller(&self) -> &'static str;

    /// Long name, e.g. `--words`.
    fn alias(&self) -> &'static str;

    /// Pre-execution check and setup. The default accepts the flag
    /// without comment.
    fn validate(
        &self,
        _flag: &Flag,
        _instruction: &mut Instruction,
        _context: &mut RunContext,
    ) -> Output {
        Output::Silent
    }

    /// Produce the reportable result. The default reports nothing.
    fn execute(&self, _flag: &Flag, _context: &RunContext) -> Output {
        Output::Silent
    }
}

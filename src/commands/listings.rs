//! Sorted word listings and the length-comparator modifier.

use crate::engine::command::{Command, Output};
use crate::engine::context::RunContext;
use crate::engine::instruction::{Flag, Instruction};
use crate::report::{flag_prefix, word_block};
use crate::text;

/// Modifier value a sort flag carries once `-l` has switched it to the
/// length comparator.
pub const BY_LENGTH: i32 = 1;

/// `-s`: all source words, ascending by value, or by length when the
/// flag was modified.
pub struct SortedWords;

impl SortedWords {
    pub const CALLER: &'static str = "-s";
    pub const ALIAS: &'static str = "--sorted";
}

impl Command for SortedWords {
    fn caller(&self) -> &'static str {
        Self::CALLER
    }

    fn alias(&self) -> &'static str {
        Self::ALIAS
    }

    fn execute(&self, flag: &Flag, context: &RunContext) -> Output {
        let mut words = text::words(&context.source);
        words.sort_by(text::ascending(flag.modifier == BY_LENGTH));
        Output::success(word_block(&flag_prefix(&flag.name), &words))
    }
}

/// `-rs`: descending counterpart of `-s`.
pub struct ReverseSortedWords;

impl ReverseSortedWords {
    pub const CALLER: &'static str = "-rs";
    pub const ALIAS: &'static str = "--reverse-sorted";
}

impl Command for ReverseSortedWords {
    fn caller(&self) -> &'static str {
        Self::CALLER
    }

    fn alias(&self) -> &'static str {
        Self::ALIAS
    }

    fn execute(&self, flag: &Flag, context: &RunContext) -> Output {
        let mut words = text::words(&context.source);
        words.sort_by(text::descending(flag.modifier == BY_LENGTH));
        Output::success(word_block(&flag_prefix(&flag.name), &words))
    }
}

/// `-l`: produces no output of its own; flips the next flag's comparator
/// to length. The next flag must be `-s`, `-rs`, or another `-l` (chains
/// resolve against the sort flag at their end).
pub struct ByLength;

impl ByLength {
    pub const CALLER: &'static str = "-l";
    pub const ALIAS: &'static str = "--by-length";
}

impl Command for ByLength {
    fn caller(&self) -> &'static str {
        Self::CALLER
    }

    fn alias(&self) -> &'static str {
        Self::ALIAS
    }

    fn validate(
        &self,
        flag: &Flag,
        instruction: &mut Instruction,
        _context: &mut RunContext,
    ) -> Output {
        let prefix = flag_prefix(&flag.name);

        let Some(next) = instruction.flag_at_mut(flag.position + 1) else {
            return Output::failure(format!("{prefix}This flag can't be the last one!"));
        };

        if next.name_in(&[Self::CALLER, Self::ALIAS]) {
            return Output::Silent;
        }

        if !next.name_in(&[
            SortedWords::CALLER,
            SortedWords::ALIAS,
            ReverseSortedWords::CALLER,
            ReverseSortedWords::ALIAS,
        ]) {
            return Output::failure(format!("{prefix}Missing required flag after this one!"));
        }

        next.modifier = BY_LENGTH;
        Output::Silent
    }
}

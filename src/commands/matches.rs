//! Reference-set matching: anagrams and palindromes.

use crate::engine::command::{Command, Output};
use crate::engine::context::RunContext;
use crate::engine::instruction::{Flag, Instruction};
use crate::report::{flag_prefix, word_block};
use crate::text;

/// Shared validate rule of the reference-set flags: they consume every
/// following token as reference words, so they must be the last flag and
/// must carry an argument.
fn validate_reference_flag(flag: &Flag, instruction: &Instruction) -> Output {
    let prefix = flag_prefix(&flag.name);

    if instruction.flag_at(flag.position + 1).is_some() {
        return Output::failure(format!("{prefix}This flag should be the last one"));
    }

    if !flag.has_argument() {
        return Output::failure(format!("{prefix}This flag requires an argument!"));
    }

    Output::Silent
}

/// Source words matching any reference word, first occurrence wins, no
/// duplicates.
fn matching_words(
    source: &str,
    reference: &str,
    matches: impl Fn(&str, &str) -> bool,
) -> Vec<String> {
    let reference_words = text::words(reference);

    let mut found: Vec<String> = Vec::new();
    for word in text::words(source) {
        if found.contains(&word) {
            continue;
        }
        if reference_words.iter().any(|other| matches(&word, other)) {
            found.push(word);
        }
    }
    found
}

/// `-a <words>`: distinct source words that are anagrams of any of the
/// given reference words.
pub struct Anagrams;

impl Command for Anagrams {
    fn caller(&self) -> &'static str {
        "-a"
    }

    fn alias(&self) -> &'static str {
        "--anagrams"
    }

    fn validate(
        &self,
        flag: &Flag,
        instruction: &mut Instruction,
        _context: &mut RunContext,
    ) -> Output {
        validate_reference_flag(flag, instruction)
    }

    fn execute(&self, flag: &Flag, context: &RunContext) -> Output {
        let found = matching_words(&context.source, &flag.argument, text::are_anagrams);
        Output::success(word_block(&flag_prefix(&flag.name), &found))
    }
}

/// `-p <words>`: distinct source words that read as one of the given
/// reference words reversed.
pub struct Palindromes;

impl Command for Palindromes {
    fn caller(&self) -> &'static str {
        "-p"
    }

    fn alias(&self) -> &'static str {
        "--palindromes"
    }

    fn validate(
        &self,
        flag: &Flag,
        instruction: &mut Instruction,
        _context: &mut RunContext,
    ) -> Output {
        validate_reference_flag(flag, instruction)
    }

    fn execute(&self, flag: &Flag, context: &RunContext) -> Output {
        let found = matching_words(&context.source, &flag.argument, text::are_palindromes);
        Output::success(word_block(&flag_prefix(&flag.name), &found))
    }
}

//! Counting commands: newlines, digits, numbers, chars, words.

use crate::engine::command::{Command, Output};
use crate::engine::context::RunContext;
use crate::engine::instruction::Flag;
use crate::report::flag_prefix;
use crate::text;

/// `-n`: occurrences of `\n` in the loaded source.
pub struct CountLines;

impl Command for CountLines {
    fn caller(&self) -> &'static str {
        "-n"
    }

    fn alias(&self) -> &'static str {
        "--newlines"
    }

    fn execute(&self, flag: &Flag, context: &RunContext) -> Output {
        let count = context.source.matches('\n').count();
        Output::success(format!("{}New lines: {count}", flag_prefix(&flag.name)))
    }
}

/// `-d`: ASCII digit characters, counted anywhere in the text. A
/// different metric from `-dd`, which counts whole numeric tokens.
pub struct CountDigits;

impl Command for CountDigits {
    fn caller(&self) -> &'static str {
        "-d"
    }

    fn alias(&self) -> &'static str {
        "--digits"
    }

    fn execute(&self, flag: &Flag, context: &RunContext) -> Output {
        let count = context
            .source
            .chars()
            .filter(char::is_ascii_digit)
            .count();
        Output::success(format!("{}Digits: {count}", flag_prefix(&flag.name)))
    }
}

/// `-dd`: standalone numeric tokens.
pub struct CountNumbers;

impl Command for CountNumbers {
    fn caller(&self) -> &'static str {
        "-dd"
    }

    fn alias(&self) -> &'static str {
        "--numbers"
    }

    fn execute(&self, flag: &Flag, context: &RunContext) -> Output {
        let count = text::count_numbers(&context.source);
        Output::success(format!("{}Numbers: {count}", flag_prefix(&flag.name)))
    }
}

/// `-c`: source length minus one. The loader always appends a synthetic
/// line terminator; this counter compensates for it.
pub struct CountChars;

impl Command for CountChars {
    fn caller(&self) -> &'static str {
        "-c"
    }

    fn alias(&self) -> &'static str {
        "--chars"
    }

    fn execute(&self, flag: &Flag, context: &RunContext) -> Output {
        let count = context.source.len().saturating_sub(1);
        Output::success(format!("{}Chars: {count}", flag_prefix(&flag.name)))
    }
}

/// `-w`: whitespace-delimited words.
pub struct CountWords;

impl Command for CountWords {
    fn caller(&self) -> &'static str {
        "-w"
    }

    fn alias(&self) -> &'static str {
        "--words"
    }

    fn execute(&self, flag: &Flag, context: &RunContext) -> Output {
        let count = text::count_words(&context.source);
        Output::success(format!("{}Words: {count}", flag_prefix(&flag.name)))
    }
}

//! Built-in identity commands every engine carries: source file, input
//! redirect, output file. They are registered by the engine constructor,
//! ahead of any operational command, and cannot be removed or duplicated.

use std::path::PathBuf;

use crate::fs_utils;
use crate::report::flag_prefix;

use super::command::{Command, Output};
use super::context::RunContext;
use super::instruction::{Flag, Instruction};

/// `-f <path>`: resolve the source file and eagerly load its text into
/// the run context.
pub struct SourceFile;

impl SourceFile {
    pub const CALLER: &'static str = "-f";
    pub const ALIAS: &'static str = "--file";
}

impl Command for SourceFile {
    fn caller(&self) -> &'static str {
        Self::CALLER
    }

    fn alias(&self) -> &'static str {
        Self::ALIAS
    }

    fn validate(
        &self,
        flag: &Flag,
        _instruction: &mut Instruction,
        context: &mut RunContext,
    ) -> Output {
        let prefix = flag_prefix(&flag.name);

        if !flag.has_argument() {
            return Output::failure(format!("{prefix}This flag requires an argument!"));
        }

        let path = PathBuf::from(&flag.argument);
        if !fs_utils::exists(&path) {
            return Output::failure(format!("{prefix}Provided file does not exist!"));
        }

        match fs_utils::read_to_source(&path) {
            Ok(source) => {
                context.source = source;
                context.file_in = Some(path);
                Output::Silent
            }
            Err(err) => Output::failure(format!("{prefix}Could not read the file: {err}")),
        }
    }
}

/// `-i <path>`: purely declarative. The engine detects it by name before
/// validation and replays the flags found in the named file; the command
/// itself does nothing in either phase.
pub struct RedirectInput;

impl RedirectInput {
    pub const CALLER: &'static str = "-i";
    pub const ALIAS: &'static str = "--input";
}

impl Command for RedirectInput {
    fn caller(&self) -> &'static str {
        Self::CALLER
    }

    fn alias(&self) -> &'static str {
        Self::ALIAS
    }
}

/// `-o <path>`: record the report destination.
pub struct OutputFile;

impl OutputFile {
    pub const CALLER: &'static str = "-o";
    pub const ALIAS: &'static str = "--output";
}

impl Command for OutputFile {
    fn caller(&self) -> &'static str {
        Self::CALLER
    }

    fn alias(&self) -> &'static str {
        Self::ALIAS
    }

    fn validate(
        &self,
        flag: &Flag,
        _instruction: &mut Instruction,
        context: &mut RunContext,
    ) -> Output {
        if !flag.has_argument() {
            return Output::failure(format!(
                "{}This flag requires an argument!",
                flag_prefix(&flag.name)
            ));
        }

        context.file_out = Some(PathBuf::from(&flag.argument));
        Output::Silent
    }
}

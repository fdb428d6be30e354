//! The flag-dispatch engine.
//!
//! One engine run is a small state machine: load input (or replay it from
//! a redirect file), validate every flag in position order against the
//! registry, and only when the whole pass succeeds execute the queued
//! commands, collecting their results into one report. A validation
//! failure aborts the run; an execution failure is recorded and the
//! remaining commands still run.

pub mod builtin;
pub mod command;
pub mod context;
pub mod instruction;
pub mod registry;

use strsim::levenshtein;

use crate::fs_utils;
use crate::report::{self, ENGINE_PREFIX};
use crate::text;

use builtin::{OutputFile, RedirectInput, SourceFile};
use command::{Command, Output};
use context::RunContext;
use instruction::Instruction;
use registry::CommandRegistry;

/// Pairs cleared by the validation pass: registry index + flag position,
/// in the order they were queued.
type ExecutionQueue = Vec<(usize, usize)>;

/// Flag-dispatch engine: the command registry, the outputs collected so
/// far, and the context shared by every command of the current run.
pub struct Engine {
    registry: CommandRegistry,
    outputs: Vec<Output>,
    context: RunContext,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine carrying the three built-in identity commands.
    pub fn new() -> Self {
        let mut engine = Engine {
            registry: CommandRegistry::new(),
            outputs: Vec::new(),
            context: RunContext::default(),
        };

        engine.add(SourceFile).add(RedirectInput).add(OutputFile);
        engine
    }

    /// Register an operational command. Duplicates are silently ignored,
    /// so registration chains never need guards.
    pub fn add<C: Command + 'static>(&mut self, command: C) -> &mut Self {
        self.registry.register(Box::new(command));
        self
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Run one batch of raw tokens to completion and return the rendered
    /// report, or an empty string when the report went to a file.
    pub fn execute<S: AsRef<str>>(&mut self, tokens: &[S]) -> String {
        let mut instruction = Instruction::parse(tokens);

        if let Err(message) = Self::redirect_input(&mut instruction) {
            self.outputs.push(Output::failure(message));
            return self.grab_report();
        }

        let queued = self.validate_pass(&mut instruction);

        if !self.context.source_resolved() {
            self.outputs
                .push(Output::failure(format!("{ENGINE_PREFIX}Source file is invalid!")));
            self.context.panicked = true;
        }

        if self.context.panicked {
            return self.grab_report();
        }

        self.execute_queued(&instruction, &queued);

        self.grab_report()
    }

    /// The redirect-input flag must be the sole flag of the run and must
    /// name an existing file; the file's word tokens then replace the
    /// working instruction wholesale.
    fn redirect_input(instruction: &mut Instruction) -> Result<(), String> {
        if !instruction.contains(RedirectInput::CALLER, RedirectInput::ALIAS) {
            return Ok(());
        }

        if instruction.len() != 1 {
            return Err(format!(
                "{ENGINE_PREFIX}Input file flag should be the only one!"
            ));
        }

        let path = match instruction.flag_at(0) {
            Some(flag) if flag.has_argument() => std::path::PathBuf::from(&flag.argument),
            _ => {
                return Err(format!(
                    "{ENGINE_PREFIX}Input file flag requires an argument!"
                ));
            }
        };

        if !fs_utils::exists(&path) {
            return Err(format!(
                "{ENGINE_PREFIX}Input file flag has invalid file as an argument!"
            ));
        }

        let content = fs_utils::read_to_source(&path).map_err(|_| {
            format!("{ENGINE_PREFIX}Input file flag has invalid file as an argument!")
        })?;

        eprintln!("[textlens] replaying flags from {}", path.display());
        *instruction = Instruction::parse(&text::words(&content));

        Ok(())
    }

    /// Position-ordered validation pass. Stops on the first unknown flag
    /// or validation failure, marking the context panicked; otherwise
    /// returns the execution queue.
    fn validate_pass(&mut self, instruction: &mut Instruction) -> ExecutionQueue {
        let mut queued = ExecutionQueue::new();

        for position in 0..instruction.len() {
            let Some(flag) = instruction.flag_at(position).cloned() else {
                continue;
            };

            let validated = self
                .registry
                .find(&flag.name)
                .map(|(index, command)| {
                    (index, command.validate(&flag, instruction, &mut self.context))
                });

            let Some((index, output)) = validated else {
                let message = self.unknown_flag_message(&flag.name);
                self.outputs.push(Output::failure(message));
                self.context.panicked = true;
                break;
            };

            if output.is_failure() {
                self.outputs.push(output);
                self.context.panicked = true;
                break;
            }

            queued.push((index, position));
        }

        queued
    }

    /// Execute every queued pair in queue order. Failures here are
    /// recorded and do not stop the remaining executions.
    fn execute_queued(&mut self, instruction: &Instruction, queued: &ExecutionQueue) {
        for &(index, position) in queued {
            let Some(command) = self.registry.get(index) else {
                continue;
            };
            let Some(flag) = instruction.flag_at(position) else {
                continue;
            };

            let output = command.execute(flag, &self.context);
            if output.message().is_some() {
                self.outputs.push(output);
            }
        }
    }

    /// Unknown flags abort the run; a near-miss from the registry is
    /// offered when one is close enough.
    fn unknown_flag_message(&self, name: &str) -> String {
        let mut message = format!("{ENGINE_PREFIX}Invalid flag: [{name}]");
        if let Some(suggestion) = self.suggest_flag(name) {
            message.push_str(&format!(" Did you mean [{suggestion}]?"));
        }
        message
    }

    /// Nearest registered name within Levenshtein distance 2.
    fn suggest_flag(&self, input: &str) -> Option<&'static str> {
        self.registry
            .known_names()
            .map(|known| (known, levenshtein(input, known)))
            .filter(|(_, distance)| *distance <= 2)
            .min_by_key(|(_, distance)| *distance)
            .map(|(known, _)| known)
    }

    /// Render the collected outputs, deliver them (file or caller), and
    /// reset the engine for the next run.
    fn grab_report(&mut self) -> String {
        let rendered = report::render(&self.outputs);
        let destination = self.context.file_out.take();
        self.reset();

        if let Some(path) = destination {
            if let Err(err) = fs_utils::write_report(&path, &rendered) {
                eprintln!("[textlens] could not write {}: {err}", path.display());
                return rendered;
            }
            return String::new();
        }

        rendered
    }

    fn reset(&mut self) {
        self.outputs.clear();
        self.context = RunContext::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    /// A pluggable probe command: succeeds, fails, or stays silent on
    /// demand during execution.
    struct Probe {
        caller: &'static str,
        alias: &'static str,
        result: Output,
    }

    impl Command for Probe {
        fn caller(&self) -> &'static str {
            self.caller
        }

        fn alias(&self) -> &'static str {
            self.alias
        }

        fn execute(&self, _flag: &instruction::Flag, _context: &RunContext) -> Output {
            self.result.clone()
        }
    }

    fn write_fixture(dir: &Path, name: &str, content: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, content).expect("write fixture");
        path.display().to_string()
    }

    fn engine_with_probes() -> Engine {
        let mut engine = Engine::new();
        engine
            .add(Probe {
                caller: "-ok",
                alias: "--ok",
                result: Output::success("fine"),
            })
            .add(Probe {
                caller: "-bad",
                alias: "--bad",
                result: Output::failure("boom"),
            });
        engine
    }

    #[test]
    fn builtins_are_always_present() {
        let engine = Engine::new();
        assert!(engine.registry().exists("-f", "--file"));
        assert!(engine.registry().exists("-i", "--input"));
        assert!(engine.registry().exists("-o", "--output"));
    }

    #[test]
    fn run_without_a_source_reports_an_engine_error() {
        let mut engine = engine_with_probes();
        let report = engine.execute(&["-ok"]);
        assert_eq!(report, "[ERROR]: <ENGINE> Source file is invalid!\n");
    }

    #[test]
    fn unknown_flag_aborts_with_a_suggestion() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let source = write_fixture(tmp.path(), "in.txt", "text");

        let mut engine = engine_with_probes();
        let report = engine.execute(&["-f", source.as_str(), "-oj"]);

        assert!(report.starts_with("[ERROR]: <ENGINE> Invalid flag: [-oj]"));
        assert!(report.contains("Did you mean [-ok]?"));
        // Nothing executed.
        assert!(!report.contains("fine"));
    }

    #[test]
    fn execution_failures_do_not_stop_the_batch() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let source = write_fixture(tmp.path(), "in.txt", "text");

        let mut engine = engine_with_probes();
        let report = engine.execute(&["-f", source.as_str(), "-ok", "-bad", "--ok"]);

        assert_eq!(
            report,
            "[SUCCESS]: fine\n[ERROR]: boom\n[SUCCESS]: fine\n"
        );
    }

    #[test]
    fn validation_failure_skips_every_execution() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let source = write_fixture(tmp.path(), "in.txt", "text");

        // -o without an argument fails validation after -ok was queued.
        let mut engine = engine_with_probes();
        let report = engine.execute(&["-f", source.as_str(), "-ok", "-o"]);

        assert_eq!(report, "[ERROR]: <-o> This flag requires an argument!\n");
    }

    #[test]
    fn report_is_written_to_the_output_file_when_requested() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let source = write_fixture(tmp.path(), "in.txt", "text");
        let out = tmp.path().join("report.txt");
        let out_arg = out.display().to_string();

        let mut engine = engine_with_probes();
        let returned =
            engine.execute(&["-f", source.as_str(), "-ok", "-o", out_arg.as_str()]);

        assert_eq!(returned, "");
        assert_eq!(
            fs::read_to_string(&out).expect("report file"),
            "[SUCCESS]: fine\n"
        );
    }

    #[test]
    fn redirect_input_must_be_the_sole_flag() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let replay = write_fixture(tmp.path(), "flags.txt", "-ok");

        let mut engine = engine_with_probes();
        let report = engine.execute(&["-i", replay.as_str(), "-ok"]);
        assert_eq!(
            report,
            "[ERROR]: <ENGINE> Input file flag should be the only one!\n"
        );
    }

    #[test]
    fn redirect_input_requires_an_existing_file() {
        let mut engine = engine_with_probes();

        let report = engine.execute(&["-i"]);
        assert_eq!(
            report,
            "[ERROR]: <ENGINE> Input file flag requires an argument!\n"
        );

        let report = engine.execute(&["-i", "not/a/real/file.txt"]);
        assert_eq!(
            report,
            "[ERROR]: <ENGINE> Input file flag has invalid file as an argument!\n"
        );
    }

    #[test]
    fn redirect_input_replays_flags_from_the_file() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let source = write_fixture(tmp.path(), "in.txt", "text");
        let replay = write_fixture(tmp.path(), "flags.txt", &format!("-f {source} -ok"));

        let mut engine = engine_with_probes();
        let report = engine.execute(&["-i", replay.as_str()]);

        assert_eq!(report, "[SUCCESS]: fine\n");
    }

    #[test]
    fn engine_state_resets_between_runs() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let source = write_fixture(tmp.path(), "in.txt", "text");

        let mut engine = engine_with_probes();
        let first = engine.execute(&["-f", source.as_str(), "-ok"]);
        let second = engine.execute(&["-f", source.as_str(), "-ok"]);

        assert_eq!(first, "[SUCCESS]: fine\n");
        assert_eq!(first, second);
    }
}

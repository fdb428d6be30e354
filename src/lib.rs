//! # textlens
//!
//! Flag-driven text statistics for plain files: counts, sorted word
//! listings, anagram/palindrome matching against a reference set, and
//! human-unit file sizes. One pass, one report.
//!
//! The crate is built around a small flag-dispatch engine. Raw argument
//! tokens are parsed into an ordered [`engine::instruction::Instruction`];
//! each flag resolves to a registered [`engine::command::Command`], whose
//! `validate` phase runs first for every flag in position order (aborting
//! the run on the first failure) and whose `execute` phase then produces
//! the report lines. Execution failures are recorded without stopping the
//! batch.
//!
//! ## Library usage
//!
//! ```rust,no_run
//! use textlens::commands;
//! use textlens::engine::Engine;
//!
//! let mut engine = Engine::new();
//! commands::register_operational(&mut engine);
//!
//! let report = engine.execute(&["-f", "notes.txt", "-w", "-n"]);
//! print!("{report}");
//! ```
//!
//! ## CLI usage
//!
//! ```bash
//! textlens -f notes.txt -w -n           # word and line counts
//! textlens -f notes.txt -l -s           # words sorted by length
//! textlens -f notes.txt -a listen silent
//! textlens -i saved_flags.txt           # replay flags from a file
//! ```

pub mod commands;
pub mod engine;
pub mod fs_utils;
pub mod report;
pub mod text;

pub use engine::Engine;

//! Source file size in human units.

use crate::engine::command::{Command, Output};
use crate::engine::context::RunContext;
use crate::engine::instruction::Flag;
use crate::fs_utils;
use crate::report::flag_prefix;

/// Unit labels, one per ÷1000 step.
const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// `-si`: byte size of the source file, scaled to the first unit that
/// keeps the value under 1000, rounded half-up to two decimals.
pub struct FileSize;

impl Command for FileSize {
    fn caller(&self) -> &'static str {
        "-si"
    }

    fn alias(&self) -> &'static str {
        "--size"
    }

    fn execute(&self, flag: &Flag, context: &RunContext) -> Output {
        let prefix = flag_prefix(&flag.name);

        let Some(path) = context.file_in.as_ref() else {
            return Output::failure(format!("{prefix}No source file to measure!"));
        };

        let bytes = match fs_utils::size_of(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                return Output::failure(format!("{prefix}Could not read the file size: {err}"));
            }
        };

        let (size, unit) = scale(bytes);
        Output::success(format!("{prefix}{size} {unit}"))
    }
}

/// Divide by 1000 until the value fits its unit, capping at the largest
/// label.
fn scale(bytes: u64) -> (f64, &'static str) {
    let mut size = bytes as f64;
    let mut unit = UNITS[0];

    for label in UNITS {
        unit = label;
        if size >= 1000.0 {
            size /= 1000.0;
        } else {
            break;
        }
    }

    (((size * 100.0 + 0.5).floor()) / 100.0, unit)
}

//! Plain-text assembly of the run report.
//!
//! Color never enters here: the rendered report is what `-o` writes and
//! what piped stdout receives, so it stays byte-stable. The binary paints
//! the result tags at print time only.

use crate::engine::command::Output;

/// Prefix for errors raised by the engine itself rather than a command.
pub const ENGINE_PREFIX: &str = "<ENGINE> ";

/// The `<flag-name> ` prefix every per-flag message carries.
pub fn flag_prefix(name: &str) -> String {
    format!("<{name}> ")
}

/// Render a word list as a brace block: each item quoted on its own
/// indented line, `{ }` when empty.
pub fn word_block(prefix: &str, words: &[String]) -> String {
    if words.is_empty() {
        return format!("{prefix}{{ }}");
    }

    let mut block = format!("{prefix}{{\n");
    for word in words {
        block.push_str("    \"");
        block.push_str(word);
        block.push_str("\",\n");
    }
    block.push('}');
    block
}

/// Join collected outputs into report lines, one `[SUCCESS]`/`[ERROR]`
/// line per non-empty message, in collection order.
pub fn render(outputs: &[Output]) -> String {
    let mut report = String::new();

    for output in outputs {
        let Some(message) = output.message() else {
            continue;
        };

        report.push_str(if output.is_failure() {
            "[ERROR]"
        } else {
            "[SUCCESS]"
        });
        report.push_str(": ");
        report.push_str(message);
        report.push('\n');
    }

    report
}

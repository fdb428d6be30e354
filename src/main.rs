//! Binary entry point: turn the process arguments into one engine run and
//! print the report.
//!
//! The process always exits 0 for engine runs; success and failure live in
//! the report lines themselves.

use std::env;

use colored::Colorize;

use textlens::commands;
use textlens::engine::Engine;

fn format_usage() -> &'static str {
    "textlens - flag-driven text statistics\n\n\
Usage: textlens -f <path> [flags...]\n\n\
Source selection:\n  \
  -f,  --file <path>          Load the source text file\n  \
  -i,  --input <path>         Replay flags from a file (must be the only flag)\n  \
  -o,  --output <path>        Write the report to a file instead of stdout\n\n\
Counters:\n  \
  -n,  --newlines             Count line breaks\n  \
  -d,  --digits               Count ASCII digit characters\n  \
  -dd, --numbers              Count standalone numeric tokens\n  \
  -c,  --chars                Count characters\n  \
  -w,  --words                Count whitespace-delimited words\n\n\
Listings:\n  \
  -s,  --sorted               All words, ascending\n  \
  -rs, --reverse-sorted       All words, descending\n  \
  -l,  --by-length            Sort the following -s/-rs by word length\n  \
  -a,  --anagrams <words>     Source words that are anagrams of the given words (last flag)\n  \
  -p,  --palindromes <words>  Source words that reverse into the given words (last flag)\n\n\
File info:\n  \
  -si, --size                 Source file size in B/KB/MB/GB\n\n\
Common:\n  \
  -h,  --help                 Show this message\n  \
  -V,  --version              Show version\n\n\
Examples:\n  \
  textlens -f notes.txt -w -n\n  \
  textlens -f notes.txt -l -s\n  \
  textlens -f notes.txt -a listen silent -o report.txt\n"
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    // Help and version are process concerns, not engine flags; they answer
    // before any engine run starts.
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        println!("{}", format_usage());
        return;
    }
    if args.iter().any(|arg| arg == "-V" || arg == "--version") {
        println!("textlens {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let mut engine = Engine::new();
    commands::register_operational(&mut engine);

    let report = engine.execute(&args);
    print_report(&report);
}

/// Paint the result tags when stdout is a terminal; the report text
/// itself stays untouched, so pipes and `-o` files see plain bytes.
fn print_report(report: &str) {
    for line in report.lines() {
        if let Some(rest) = line.strip_prefix("[SUCCESS]") {
            println!("{}{rest}", "[SUCCESS]".green());
        } else if let Some(rest) = line.strip_prefix("[ERROR]") {
            println!("{}{rest}", "[ERROR]".red());
        } else {
            println!("{line}");
        }
    }
}

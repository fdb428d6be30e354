//! The operational command set: everything the stock binary registers on
//! top of the engine's built-in identity commands.

pub mod counts;
pub mod listings;
pub mod matches;
pub mod size;

pub use counts::{CountChars, CountDigits, CountLines, CountNumbers, CountWords};
pub use listings::{ByLength, ReverseSortedWords, SortedWords};
pub use matches::{Anagrams, Palindromes};
pub use size::FileSize;

use crate::engine::Engine;

/// Register the full operational command set on an engine. Registration
/// is idempotent, so calling this twice changes nothing.
pub fn register_operational(engine: &mut Engine) {
    engine
        .add(CountChars)
        .add(CountDigits)
        .add(CountLines)
        .add(CountNumbers)
        .add(CountWords)
        .add(Anagrams)
        .add(FileSize)
        .add(Palindromes)
        .add(SortedWords)
        .add(ReverseSortedWords)
        .add(ByLength);
}

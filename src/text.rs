//! Word-level primitives shared by the operational commands.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

/// A word is any maximal run of non-whitespace characters.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("word pattern"));

/// Leading digit run of a token; used by the standalone-number counter.
static LEADING_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+").expect("digit pattern"));

/// All words of `text`, in order, duplicates kept.
pub fn words(text: &str) -> Vec<String> {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn count_words(text: &str) -> usize {
    WORD.find_iter(text).count()
}

/// Count standalone numeric tokens: a token counts when it starts with a
/// digit run and the character right after that run is not a word
/// character. `12`, `12.` and `12.5` count; `12a` and `a12` do not. A
/// token contains no whitespace, so it contributes at most one match.
///
/// This is a different metric from counting digit characters; both exist
/// on purpose.
pub fn count_numbers(text: &str) -> usize {
    WORD.find_iter(text)
        .filter(|token| {
            let token = token.as_str();
            match LEADING_DIGITS.find(token) {
                Some(run) => token[run.end()..]
                    .chars()
                    .next()
                    .is_none_or(|ch| !is_word_char(ch)),
                None => false,
            }
        })
        .count()
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Two words are anagrams when they use the same characters the same
/// number of times.
pub fn are_anagrams(first: &str, second: &str) -> bool {
    if first.len() != second.len() {
        return false;
    }
    sorted_bytes(first) == sorted_bytes(second)
}

fn sorted_bytes(word: &str) -> Vec<u8> {
    let mut bytes = word.as_bytes().to_vec();
    bytes.sort_unstable();
    bytes
}

/// `first` matches when it reads as `second` reversed.
pub fn are_palindromes(first: &str, second: &str) -> bool {
    if first.len() != second.len() {
        return false;
    }
    first.chars().eq(second.chars().rev())
}

/// Ascending word comparator, by value or by character length.
pub fn ascending(by_length: bool) -> impl Fn(&String, &String) -> Ordering {
    move |left, right| {
        if by_length {
            left.len().cmp(&right.len())
        } else {
            left.cmp(right)
        }
    }
}

/// Descending word comparator, by value or by character length.
pub fn descending(by_length: bool) -> impl Fn(&String, &String) -> Ordering {
    move |left, right| {
        if by_length {
            right.len().cmp(&left.len())
        } else {
            right.cmp(left)
        }
    }
}

//! Word-level heuristics: spacing between tokens and the final rejoin of
//! words that line wrapping split in two.

use crate::options::WordJoinPolicy;
use crate::patterns::{HORIZONTAL_SPACE, WORD_PAIR};

/// Short function words that are never glued to a neighbour.
pub const STOPWORDS: &[&str] = &[
    "the", "and", "or", "but", "for", "nor", "yet", "so", "a", "an", "in", "on", "at", "by", "to",
    "of", "with", "from", "about", "as",
];

/// Regex `\w` for a single character.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Normalize the horizontal space between adjacent word tokens.
///
/// With [`WordJoinPolicy::KeepSeparated`] a space run between two word
/// characters becomes one space. With [`WordJoinPolicy::MergeShortTokens`]
/// two tokens stay apart only when both are longer than `max_len`; otherwise
/// they are concatenated. Pairs are matched left to right without overlap.
#[must_use]
pub fn space_words(text: &str, policy: WordJoinPolicy) -> String {
    match policy {
        WordJoinPolicy::KeepSeparated => HORIZONTAL_SPACE
            .replace_all(text, |caps: &regex::Captures| {
                let Some(run) = caps.get(0) else {
                    return String::new();
                };
                let before = text[..run.start()].chars().next_back();
                let after = text[run.end()..].chars().next();
                if before.is_some_and(is_word_char) && after.is_some_and(is_word_char) {
                    " ".to_string()
                } else {
                    run.as_str().to_string()
                }
            })
            .into_owned(),
        WordJoinPolicy::MergeShortTokens { max_len } => WORD_PAIR
            .replace_all(text, |caps: &regex::Captures| {
                let (left, right) = (&caps[1], &caps[2]);
                if left.chars().count() > max_len && right.chars().count() > max_len {
                    format!("{left} {right}")
                } else {
                    format!("{left}{right}")
                }
            })
            .into_owned(),
    }
}

fn is_stopword(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOPWORDS.contains(&lower.as_str())
}

/// True when `right` reads as the continuation of `left`.
fn joinable(left: &str, right: &str) -> bool {
    left.chars().last().is_some_and(|c| c.is_ascii_alphabetic())
        && right.chars().next().is_some_and(|c| c.is_ascii_lowercase())
        && left.chars().count() > 1
        && right.chars().count() > 1
        && !is_stopword(left)
        && !is_stopword(right)
}

/// Glue split words back together on one line.
///
/// The line is split on whitespace and rebuilt with single spaces; a glued
/// word can absorb the next one too.
#[must_use]
pub fn rejoin_line(line: &str) -> String {
    let mut words: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    let mut i = 0;
    while i + 1 < words.len() {
        if joinable(&words[i], &words[i + 1]) {
            let next = words.remove(i + 1);
            words[i].push_str(&next);
        } else {
            i += 1;
        }
    }
    words.join(" ")
}

/// Final rejoin pass. Only [`WordJoinPolicy::MergeShortTokens`] rewrites
/// anything; the default policy leaves the text as it is.
#[must_use]
pub fn rejoin_split_words(text: &str, policy: WordJoinPolicy) -> String {
    match policy {
        WordJoinPolicy::KeepSeparated => text.to_string(),
        WordJoinPolicy::MergeShortTokens { .. } => {
            text.lines().map(rejoin_line).collect::<Vec<_>>().join("\n")
        }
    }
}

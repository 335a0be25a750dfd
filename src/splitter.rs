// Pattern engine: sentence segmentation and word cleaning.
// Uses a regex-automata dense DFA for O(n) leftmost boundary detection.

use anyhow::Result;
use regex_automata::{
    dfa::{dense::DFA, Automaton},
    Input,
};
use tracing::debug;

/// Sentence boundary pattern: a space, a word (letters, optional apostrophe,
/// optional lowercase tail), a run of terminal punctuation, a closing space.
/// Requiring the closing space is what lets mid-sentence acronyms like "e.g."
/// pass through without ending the sentence.
const SENTENCE_PATTERN: &str = r" [a-zA-Z]+'?[a-z]*[.?!]+ ";

/// Splits raw text into padded sentence strings.
///
/// Each emitted sentence carries exactly one leading and one trailing space so
/// that downstream whole-word matching can search for `" word "` directly.
pub struct SentenceSplitter {
    /// Compiled DFA for the sentence boundary pattern
    dfa: DFA<Vec<u32>>,
}

impl SentenceSplitter {
    pub fn new() -> Result<Self> {
        let dfa = DFA::new(SENTENCE_PATTERN)?;
        debug!("Compiled sentence boundary DFA with pattern: {}", SENTENCE_PATTERN);
        Ok(Self { dfa })
    }

    /// Split `text` into sentences, in original order.
    ///
    /// Runs of tabs and runs of newlines are collapsed to single spaces and
    /// the whole text is padded with one space on each side before scanning.
    /// Trailing text that never completes the boundary pattern is dropped:
    /// a fragment without terminal punctuation plus a space is not a sentence.
    pub fn split(&self, text: &str) -> Result<Vec<String>> {
        let padded = pad_and_collapse(text);
        let bytes = padded.as_bytes();
        let mut sentences = Vec::new();

        // Single forward scan. Each match ends on the space after the terminal
        // punctuation; that same space is the leading pad of the next
        // sentence, so the cursor backs up by one instead of re-padding.
        let mut cursor = 0usize;
        while cursor < bytes.len() {
            let input = Input::new(&bytes[cursor..]);
            let Some(half_match) = self.dfa.try_search_fwd(&input)? else {
                break;
            };
            let end = cursor + half_match.offset();
            sentences.push(padded[cursor..end].to_string());
            cursor = end - 1;
        }

        debug!("Split text into {} sentences", sentences.len());
        Ok(sentences)
    }
}

/// Collapse each run of newlines and each run of tabs into one space, then pad
/// the text with a single leading and trailing space.
fn pad_and_collapse(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(' ');

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\n' || ch == '\t' {
            while chars.peek() == Some(&ch) {
                chars.next();
            }
            out.push(' ');
        } else {
            out.push(ch);
        }
    }

    out.push(' ');
    out
}

/// Clean a raw token for use as a concordance key.
///
/// Lower-cases the token. Acronym-shaped tokens (two or more letter-period
/// groups, nothing else) keep their periods; anything else has its trailing
/// run of non-word characters stripped. Internal punctuation such as hyphens
/// and apostrophes survives.
pub fn clean_word(word: &str) -> String {
    let lowered = word.to_lowercase();
    if is_acronym(&lowered) {
        return lowered;
    }
    lowered
        .trim_end_matches(|c: char| !c.is_alphanumeric() && c != '_')
        .to_string()
}

/// An acronym is two or more repetitions of "single ASCII letter + period"
/// with nothing else. A lone "a." is poor grammar, not an acronym.
fn is_acronym(token: &str) -> bool {
    let mut groups = 0usize;
    let mut chars = token.chars();
    loop {
        match chars.next() {
            None => return groups >= 2,
            Some(c) if c.is_ascii_alphabetic() => {
                if chars.next() != Some('.') {
                    return false;
                }
                groups += 1;
            }
            Some(_) => return false,
        }
    }
}

// Concordance accumulator: ordered word -> sentence-index mapping with
// deterministic rendering.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

const ALPHABET_LENGTH: usize = 26;

/// Accumulates cleaned words against the 1-based sentence indices where they
/// occur, then renders the alphabetical listing.
///
/// The map holds the index sequences; `insertion_order` is the separately
/// maintained view that makes iteration deterministic. Index sequences keep
/// append order, not sorted order: sentences are processed in order, so the
/// sequence comes out ordered anyway, and out-of-order appends are preserved
/// as-is.
#[derive(Debug, Default)]
pub struct Concordance {
    entries: HashMap<String, Vec<usize>>,
    insertion_order: Vec<String>,
}

impl Concordance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `indices` to the entry for `word`, creating the entry on first
    /// sight. Repeated calls accumulate; nothing is ever replaced.
    pub fn add_occurrences(&mut self, word: &str, indices: &[usize]) {
        match self.entries.entry(word.to_string()) {
            Entry::Vacant(vacant) => {
                self.insertion_order.push(word.to_string());
                vacant.insert(indices.to_vec());
            }
            Entry::Occupied(mut occupied) => {
                occupied.get_mut().extend_from_slice(indices);
            }
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total occurrences across all words.
    pub fn total_occurrences(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Render the full concordance listing.
    ///
    /// Words are sorted case-insensitively (stable, so equal keys would keep
    /// first-insertion order) and each line is
    /// `prefix<TAB>word<TAB>{count:idx,idx,...}` with a trailing newline.
    pub fn render(&self) -> String {
        let mut sorted: Vec<&String> = self.insertion_order.iter().collect();
        sorted.sort_by_key(|word| word.to_lowercase());

        let mut out = String::new();
        for (rank, word) in sorted.iter().enumerate() {
            let indices = &self.entries[word.as_str()];
            let joined = indices
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            out.push_str(&format!(
                "{}\t{}\t{{{}:{}}}\n",
                prefix(rank),
                word,
                indices.len(),
                joined
            ));
        }
        out
    }
}

/// Display prefix for a 0-based rank: the letter `'a' + rank % 26` repeated
/// once per completed trip through the alphabet, then a period. Rank 0 is
/// "a.", rank 25 "z.", rank 26 "aa.".
pub fn prefix(rank: usize) -> String {
    let letter = (b'a' + (rank % ALPHABET_LENGTH) as u8) as char;
    let repeats = rank / ALPHABET_LENGTH + 1;
    let mut label: String = std::iter::repeat(letter).take(repeats).collect();
    label.push('.');
    label
}

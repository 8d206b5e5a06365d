//! Benchmarking support for Olelo.
//!
//! Deterministic synthetic dictionaries for the criterion benchmarks.

use crate::data_structures::lanai_trie::WordEntry;

/// Letters used for synthetic words.
const ALPHABET: &[u8] = b"etaoinshrdlucmfw";

/// Generates `count` lowercase words of `length` letters with varied
/// frequencies.
///
/// Words are the base-16 digits of their index spelled with [`ALPHABET`],
/// so runs are reproducible without a random number generator. Words are
/// distinct while `count` stays below `16^length`.
pub fn synthetic_dictionary(count: usize, length: usize) -> Vec<WordEntry> {
    (0..count)
        .map(|index| {
            let mut value = index;
            let word: String = (0..length)
                .map(|_| {
                    let letter = ALPHABET[value % ALPHABET.len()] as char;
                    value /= ALPHABET.len();
                    letter
                })
                .collect();
            WordEntry::new(word, (index % 97 + 1) as u64)
        })
        .collect()
}

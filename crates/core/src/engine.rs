//! Resolves a stroke count to every word it could spell.
//!
//! The canonical stroke lengths are I→1, U→2, V→2, N→2, M→3, so the word set
//! for `n` strokes follows a tribonacci-like recurrence: every word is I
//! prepended to a word of `n-1` strokes, U/V/N prepended to a word of `n-2`,
//! or M prepended to a word of `n-3`, emitted in exactly that group order.
//! Cardinalities grow as 1, 1, 4, 8, 19, ... (~1.84^n), so callers must bound
//! `n` themselves.

use crate::error::Result;
use crate::store::WordStore;

/// Canonical letters and their stroke lengths, in emission order.
const LETTER_STROKES: [(char, usize); 5] = [('I', 1), ('U', 2), ('V', 2), ('N', 2), ('M', 3)];

/// Resolves stroke counts to ordered candidate word lists.
///
/// Implementations differ in how they remember prior counts; the output for a
/// given `n` is identical across all of them.
pub trait WordEngine {
    /// All words spellable with exactly `n` strokes, in canonical order.
    fn words_for(&mut self, n: u32) -> Result<Vec<String>>;
}

/// Word sets for counts below the recurrence threshold.
fn base_words(k: usize) -> Vec<String> {
    match k {
        0 => vec![String::new()],
        1 => vec!["I".to_string()],
        _ => ["II", "U", "V", "N"].map(String::from).to_vec(),
    }
}

/// One recurrence step: build the word set for `k` from the table below it.
fn extend_words(table: &[Vec<String>], k: usize) -> Vec<String> {
    debug_assert!(k >= 3 && table.len() >= k);
    let capacity = table[k - 1].len() + 3 * table[k - 2].len() + table[k - 3].len();
    let mut words = Vec::with_capacity(capacity);
    for (letter, strokes) in LETTER_STROKES {
        for word in &table[k - strokes] {
            words.push(format!("{letter}{word}"));
        }
    }
    words
}

/// In-memory engine backed by a bottom-up memo table.
///
/// The table is scoped to one engine instance (one top-level reconstruction
/// call) and filled upward from zero, so each count is computed once and the
/// call stack stays flat no matter how large `n` gets.
#[derive(Debug, Default)]
pub struct MemoEngine {
    table: Vec<Vec<String>>,
}

impl MemoEngine {
    /// Create an engine with an empty memo table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn fill_to(&mut self, n: usize) {
        while self.table.len() <= n {
            let k = self.table.len();
            let words = if k < 3 {
                base_words(k)
            } else {
                extend_words(&self.table, k)
            };
            self.table.push(words);
        }
    }
}

impl WordEngine for MemoEngine {
    fn words_for(&mut self, n: u32) -> Result<Vec<String>> {
        let n = n as usize;
        self.fill_to(n);
        Ok(self.table[n].clone())
    }
}

/// Un-memoized recursive engine.
///
/// Recomputes sub-counts on every branch, so it is exponential in time on top
/// of the already exponential output. Useful as an oracle for the memoized
/// engines and for one-off small counts.
#[derive(Debug, Default)]
pub struct NaiveEngine;

impl WordEngine for NaiveEngine {
    fn words_for(&mut self, n: u32) -> Result<Vec<String>> {
        Ok(naive_words(n))
    }
}

fn naive_words(n: u32) -> Vec<String> {
    if n < 3 {
        return base_words(n as usize);
    }
    let minus_one = naive_words(n - 1);
    let minus_two = naive_words(n - 2);
    let minus_three = naive_words(n - 3);
    let capacity = minus_one.len() + 3 * minus_two.len() + minus_three.len();
    let mut words = Vec::with_capacity(capacity);
    words.extend(minus_one.iter().map(|w| format!("I{w}")));
    for letter in ['U', 'V', 'N'] {
        words.extend(minus_two.iter().map(|w| format!("{letter}{w}")));
    }
    words.extend(minus_three.iter().map(|w| format!("M{w}")));
    words
}

/// Engine backed by a durable per-count store.
///
/// Counts are filled upward exactly like [`MemoEngine`], but each count is
/// first looked up in the store. A missing or corrupt record is recomputed
/// from the counts below it and, when the count does not exceed
/// `max_persisted_count`, written back as a full replacement, healing any
/// corruption in place. Larger counts are computed but never persisted.
pub struct CachedEngine {
    store: WordStore,
    max_persisted_count: u32,
    table: Vec<Vec<String>>,
}

impl CachedEngine {
    /// Create an engine over `store`, persisting counts up to `max_persisted_count`
    #[must_use]
    pub fn new(store: WordStore, max_persisted_count: u32) -> Self {
        Self {
            store,
            max_persisted_count,
            table: Vec::new(),
        }
    }

    fn fill_to(&mut self, n: usize) -> Result<()> {
        while self.table.len() <= n {
            let k = self.table.len();
            #[allow(clippy::cast_possible_truncation)]
            let count = k as u32;
            if let Some(words) = self.store.load(count)? {
                log::debug!("loaded record for stroke count {count} ({} words)", words.len());
                self.table.push(words);
                continue;
            }
            let words = if k < 3 {
                base_words(k)
            } else {
                extend_words(&self.table, k)
            };
            if count <= self.max_persisted_count {
                self.store.save(count, &words)?;
            }
            self.table.push(words);
        }
        Ok(())
    }
}

impl WordEngine for CachedEngine {
    fn words_for(&mut self, n: u32) -> Result<Vec<String>> {
        let n = n as usize;
        self.fill_to(n)?;
        Ok(self.table[n].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_cases() {
        let mut engine = MemoEngine::new();
        assert_eq!(engine.words_for(0).unwrap(), vec![String::new()]);
        assert_eq!(engine.words_for(1).unwrap(), vec!["I"]);
        assert_eq!(engine.words_for(2).unwrap(), vec!["II", "U", "V", "N"]);
    }

    #[test]
    fn test_three_strokes_exact_order() {
        let mut engine = MemoEngine::new();
        assert_eq!(
            engine.words_for(3).unwrap(),
            vec!["III", "IU", "IV", "IN", "UI", "VI", "NI", "M"]
        );
    }

    #[test]
    fn test_cardinality_recurrence() {
        let mut engine = MemoEngine::new();
        let sizes: Vec<usize> = (0..=10)
            .map(|n| engine.words_for(n).unwrap().len())
            .collect();
        assert_eq!(&sizes[..5], &[1, 1, 4, 8, 19]);
        for n in 3..=10 {
            assert_eq!(sizes[n], sizes[n - 1] + 3 * sizes[n - 2] + sizes[n - 3]);
        }
    }

    #[test]
    fn test_fresh_memo_is_deterministic() {
        let first = MemoEngine::new().words_for(7).unwrap();
        let second = MemoEngine::new().words_for(7).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_naive_matches_memoized() {
        for n in 0..=9 {
            let memoized = MemoEngine::new().words_for(n).unwrap();
            let naive = NaiveEngine.words_for(n).unwrap();
            assert_eq!(naive, memoized, "divergence at n={n}");
        }
    }

    #[test]
    fn test_every_word_sums_to_its_count() {
        let mut engine = MemoEngine::new();
        for n in 0..=8u32 {
            for word in engine.words_for(n).unwrap() {
                let total: u32 = word
                    .chars()
                    .map(|ch| match ch {
                        'I' => 1,
                        'U' | 'V' | 'N' => 2,
                        'M' => 3,
                        other => panic!("unexpected letter {other} in {word}"),
                    })
                    .sum();
                assert_eq!(total, n, "word {word} does not sum to {n}");
            }
        }
    }
}

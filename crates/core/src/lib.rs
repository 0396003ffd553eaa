//! # Minim Core
//!
//! Reconstructs every word consistent with a string of ambiguous vertical
//! strokes ("minims") from historical manuscript transcription, where the
//! letters I, U, V, N and M are indistinguishable runs of one to three
//! strokes (I=1, U/V/N=2, M=3).
//!
//! ## Architecture
//!
//! ```text
//! Expression ("A3|B")
//!     │
//!     ├──> Tokenizer (4-state run automaton)
//!     │    └─> [Literal("A"), StrokeCount(4), Literal("B")]
//!     │
//!     ├──> Stroke-Count Engine (per numeric token)
//!     │    ├─> MemoEngine    — call-scoped bottom-up table
//!     │    ├─> NaiveEngine   — un-memoized recursion
//!     │    └─> CachedEngine  — durable per-count records, self-healing
//!     │
//!     └──> Reconstructor (ordered cartesian combination)
//!          └─> ["AIIIIB", "AIIUB", ...]
//! ```
//!
//! Word-set sizes follow |W(n)| = |W(n-1)| + 3|W(n-2)| + |W(n-3)| and grow
//! exponentially; nothing here bounds the output, so callers must bound the
//! stroke counts they accept. Input is not case-folded: callers normalize to
//! the uppercase alphabet before invoking the core.
//!
//! ## Example
//!
//! ```rust
//! let words = minim_core::compute_words("A2B").unwrap();
//! assert_eq!(words, ["AIIB", "AUB", "AVB", "ANB"]);
//! ```

mod config;
mod engine;
mod error;
mod reconstruct;
mod store;
mod token;
mod tokenizer;

pub use config::{CacheConfig, LARGE_COUNT_THRESHOLD};
pub use engine::{CachedEngine, MemoEngine, NaiveEngine, WordEngine};
pub use error::{MinimError, Result};
pub use reconstruct::reconstruct;
pub use store::WordStore;
pub use token::Token;
pub use tokenizer::decompile;

/// Compute every word consistent with `expression`, in memory.
///
/// The memo table lives for this one call. Either the full candidate list is
/// returned or an error; there are no partial results.
pub fn compute_words(expression: &str) -> Result<Vec<String>> {
    let tokens = decompile(expression)?;
    let mut engine = MemoEngine::new();
    reconstruct(&tokens, &mut engine)
}

/// Compute every word consistent with `expression`, backed by a durable
/// per-count cache under `config.cache_dir`.
///
/// Records up to `config.max_persisted_count` are written back; corrupt
/// records are recomputed and replaced in passing. Fails up front if the
/// config's persistence ceiling requires the large opt-in.
pub fn compute_words_cached(expression: &str, config: &CacheConfig) -> Result<Vec<String>> {
    config.validate()?;
    let tokens = decompile(expression)?;
    let store = WordStore::new(&config.cache_dir);
    let mut engine = CachedEngine::new(store, config.max_persisted_count);
    reconstruct(&tokens, &mut engine)
}

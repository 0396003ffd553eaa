//! Combines per-token candidate lists into the final word list.

use crate::engine::WordEngine;
use crate::error::Result;
use crate::token::Token;
use itertools::Itertools;

/// Reconstruct every word consistent with a decompiled token sequence.
///
/// Each `Literal` contributes exactly its text; each `StrokeCount` contributes
/// the engine's word list for that count. The results are the ordered
/// cartesian combinations of one choice per token, joined in token order, with
/// the last token's candidates varying fastest. An empty token sequence yields
/// an empty result, not an error.
pub fn reconstruct(tokens: &[Token], engine: &mut dyn WordEngine) -> Result<Vec<String>> {
    if tokens.is_empty() {
        return Ok(Vec::new());
    }

    let mut candidates: Vec<Vec<String>> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Literal(text) => candidates.push(vec![text.clone()]),
            Token::StrokeCount(n) => candidates.push(engine.words_for(*n)?),
        }
    }

    Ok(candidates
        .iter()
        .map(|list| list.iter().map(String::as_str))
        .multi_cartesian_product()
        .map(|combination| combination.concat())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MemoEngine;
    use pretty_assertions::assert_eq;

    fn run(tokens: &[Token]) -> Vec<String> {
        reconstruct(tokens, &mut MemoEngine::new()).unwrap()
    }

    #[test]
    fn test_literal_between_counts() {
        let tokens = [
            Token::Literal("A".to_string()),
            Token::StrokeCount(2),
            Token::Literal("B".to_string()),
        ];
        assert_eq!(run(&tokens), vec!["AIIB", "AUB", "AVB", "ANB"]);
    }

    #[test]
    fn test_last_token_varies_fastest() {
        let tokens = [Token::StrokeCount(1), Token::StrokeCount(2)];
        assert_eq!(run(&tokens), vec!["III", "IU", "IV", "IN"]);
    }

    #[test]
    fn test_single_count_matches_engine() {
        let direct = MemoEngine::new().words_for(3).unwrap();
        assert_eq!(run(&[Token::StrokeCount(3)]), direct);
    }

    #[test]
    fn test_zero_count_contributes_empty_string() {
        let tokens = [
            Token::Literal("A".to_string()),
            Token::StrokeCount(0),
            Token::Literal("B".to_string()),
        ];
        assert_eq!(run(&tokens), vec!["AB"]);
    }

    #[test]
    fn test_empty_sequence_yields_empty_result() {
        assert_eq!(run(&[]), Vec::<String>::new());
    }
}

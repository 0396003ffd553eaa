//! Decompiles a raw minim expression into a token sequence.
//!
//! The input alphabet has three character classes: the pipe mark `|` (one
//! explicit stroke), decimal digits (a stroke count written as a number), and
//! everything else (letters already read). Maximal runs of one class become
//! one token each, then adjacent count tokens are summed, so `"3|"` means
//! four strokes rather than a three followed by a one.

use crate::error::{MinimError, Result};
use crate::token::Token;

const PIPE: char = '|';

/// Classification of the run currently being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Empty,
    PipeRun,
    DigitRun,
    LiteralRun,
}

impl RunState {
    /// State a character belongs to; never `Empty`.
    const fn of(ch: char) -> Self {
        if ch == PIPE {
            Self::PipeRun
        } else if ch.is_ascii_digit() {
            Self::DigitRun
        } else {
            Self::LiteralRun
        }
    }
}

/// Decompile an expression into its token sequence.
///
/// A character extends the current run only when it belongs to the same run
/// state; otherwise the run is closed into a token and a new run starts. The
/// final sequence never holds two adjacent `StrokeCount` tokens, and a merged
/// count of zero is retained (it resolves to the empty-string candidate).
pub fn decompile(expression: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut state = RunState::Empty;

    for ch in expression.chars() {
        let target = RunState::of(ch);
        if state != target {
            close_run(&mut tokens, state, &mut run)?;
            state = target;
        }
        run.push(ch);
    }
    close_run(&mut tokens, state, &mut run)?;

    merge_adjacent_counts(tokens)
}

/// Convert the open run into a token, leaving the run buffer empty.
fn close_run(tokens: &mut Vec<Token>, state: RunState, run: &mut String) -> Result<()> {
    match state {
        RunState::Empty => {}
        RunState::PipeRun => {
            let strokes = u32::try_from(run.len())
                .map_err(|_| MinimError::malformed("stroke run longer than a 32-bit count"))?;
            tokens.push(Token::StrokeCount(strokes));
        }
        RunState::DigitRun => {
            let value = run.parse::<u32>().map_err(|_| {
                MinimError::malformed(format!("stroke count `{run}` does not fit a 32-bit count"))
            })?;
            tokens.push(Token::StrokeCount(value));
        }
        RunState::LiteralRun => tokens.push(Token::Literal(std::mem::take(run))),
    }
    run.clear();
    Ok(())
}

/// Sum maximal sequences of adjacent `StrokeCount` tokens into one token.
///
/// Never merges across a `Literal`. A zero-valued count survives merging.
fn merge_adjacent_counts(tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Token::StrokeCount(n) = &token {
            if let Some(Token::StrokeCount(total)) = merged.last_mut() {
                *total = total.checked_add(*n).ok_or_else(|| {
                    MinimError::malformed("merged stroke count overflows a 32-bit count")
                })?;
                continue;
            }
        }
        merged.push(token);
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn literal(text: &str) -> Token {
        Token::Literal(text.to_string())
    }

    #[test]
    fn test_pipe_run_becomes_count() {
        assert_eq!(decompile("|||").unwrap(), vec![Token::StrokeCount(3)]);
    }

    #[test]
    fn test_digit_run_parsed_base_10() {
        assert_eq!(decompile("12").unwrap(), vec![Token::StrokeCount(12)]);
    }

    #[test]
    fn test_adjacent_digit_and_pipe_runs_merge() {
        assert_eq!(decompile("3|").unwrap(), vec![Token::StrokeCount(4)]);
        assert_eq!(decompile("|3").unwrap(), vec![Token::StrokeCount(4)]);
        assert_eq!(decompile("|2|").unwrap(), vec![Token::StrokeCount(4)]);
    }

    #[test]
    fn test_literals_split_count_runs() {
        assert_eq!(
            decompile("A2B").unwrap(),
            vec![literal("A"), Token::StrokeCount(2), literal("B")]
        );
        assert_eq!(
            decompile("2A2").unwrap(),
            vec![
                Token::StrokeCount(2),
                literal("A"),
                Token::StrokeCount(2)
            ]
        );
    }

    #[test]
    fn test_consecutive_literal_chars_form_one_token() {
        assert_eq!(
            decompile("ABC||D").unwrap(),
            vec![literal("ABC"), Token::StrokeCount(2), literal("D")]
        );
    }

    #[test]
    fn test_zero_count_is_retained() {
        assert_eq!(decompile("0").unwrap(), vec![Token::StrokeCount(0)]);
        assert_eq!(
            decompile("A0B").unwrap(),
            vec![literal("A"), Token::StrokeCount(0), literal("B")]
        );
    }

    #[test]
    fn test_empty_expression_yields_no_tokens() {
        assert_eq!(decompile("").unwrap(), Vec::<Token>::new());
    }

    #[test]
    fn test_overflowing_digit_run_is_malformed() {
        let err = decompile("99999999999999999999").unwrap_err();
        assert!(matches!(err, MinimError::MalformedInput(_)));
    }

    #[test]
    fn test_merge_overflow_is_malformed() {
        let expr = format!("{}|", u32::MAX);
        let err = decompile(&expr).unwrap_err();
        assert!(matches!(err, MinimError::MalformedInput(_)));
    }
}

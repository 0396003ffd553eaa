use serde::{Deserialize, Serialize};

/// One element of a decompiled minim expression.
///
/// A decompiled expression is an ordered sequence of tokens in which no two
/// `StrokeCount` tokens are adjacent (adjacent counts are summed during
/// decompilation) and no `Literal` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// Letters already read with certainty
    Literal(String),
    /// A number of ambiguous strokes still to be resolved
    StrokeCount(u32),
}

impl Token {
    /// Check whether this token is a stroke count
    #[must_use]
    pub const fn is_count(&self) -> bool {
        matches!(self, Self::StrokeCount(_))
    }

    /// Get the stroke count, if this token carries one
    #[must_use]
    pub const fn stroke_count(&self) -> Option<u32> {
        match self {
            Self::StrokeCount(n) => Some(*n),
            Self::Literal(_) => None,
        }
    }
}

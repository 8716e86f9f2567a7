use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::tokenize::tokenize;

/// Lexical statistics for one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    /// Total token count (N)
    pub n_words: usize,

    /// Distinct token count (V)
    pub v_unique: usize,

    /// V / N, or 0.0 for an empty text
    pub lexical_diversity: f64,

    /// 1 - U / (N - 2), or 0.0 when fewer than three tokens
    pub trigram_repetition: f64,
}

/// Number of distinct token values
pub fn distinct_count(tokens: &[String]) -> usize {
    tokens.iter().collect::<HashSet<_>>().len()
}

/// Ratio of distinct tokens to total tokens.
///
/// Returns 0.0 for an empty sequence.
pub fn lexical_diversity(tokens: &[String]) -> f64 {
    let n = tokens.len();
    if n == 0 {
        return 0.0;
    }

    distinct_count(tokens) as f64 / n as f64
}

/// Fraction of overlapping 3-token windows that repeat an earlier window.
///
/// With `N - 2` windows of which `U` are distinct, this is
/// `1 - U / (N - 2)`. Returns 0.0 when there are fewer than three tokens.
pub fn trigram_repetition(tokens: &[String]) -> f64 {
    let n = tokens.len();
    if n < 3 {
        return 0.0;
    }

    let total = n - 2;
    let unique = tokens.windows(3).collect::<HashSet<_>>().len();

    1.0 - (unique as f64 / total as f64)
}

/// Tokenize `text` and compute all statistics in one pass over the tokens
pub fn compute_text_metrics(text: &str) -> TextMetrics {
    let tokens = tokenize(text);
    tracing::debug!("Tokenized text into {} tokens", tokens.len());

    TextMetrics {
        n_words: tokens.len(),
        v_unique: distinct_count(&tokens),
        lexical_diversity: lexical_diversity(&tokens),
        trigram_repetition: trigram_repetition(&tokens),
    }
}

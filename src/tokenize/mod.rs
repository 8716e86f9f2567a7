//! Word tokenization: lowercase, strip everything outside `[a-z0-9']`, split.

/// Separator some source texts use as a bullet; always treated as a space.
const ARROW: char = '→';

/// Characters that may appear inside a token
fn is_token_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '\'')
}

/// Normalize raw text into an ordered sequence of word tokens.
///
/// The text is lowercased, arrows and every run of characters outside
/// `[a-z0-9']` become a single space, and the result is split on
/// whitespace. Tokens made only of apostrophes are discarded, but
/// apostrophes inside (or at the edge of) a real word are kept, so
/// `"don't"` stays one token.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase().replace(ARROW, " ");

    let mut normalized = String::with_capacity(lowered.len());
    let mut in_gap = false;
    for c in lowered.chars() {
        if is_token_char(c) {
            normalized.push(c);
            in_gap = false;
        } else if !in_gap {
            normalized.push(' ');
            in_gap = true;
        }
    }

    normalized
        .split_whitespace()
        .filter(|tok| !tok.trim_matches('\'').is_empty())
        .map(str::to_string)
        .collect()
}

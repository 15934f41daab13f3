//! Turns command-line text into a sequence of node values.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// How text is split into node values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TokenMode {
    /// Values separated by commas/whitespace, or by the configured separator
    #[default]
    Words,
    /// Every non-whitespace character is one value, e.g. `FBADCEGIH`
    Chars,
}

/// Splits `text` into values.
///
/// Empty tokens are dropped and surrounding whitespace is trimmed, so blank
/// text yields an empty sequence.
pub fn parse_sequence(text: &str, tokens: TokenMode, separator: Option<&str>) -> Vec<String> {
    let values: Vec<String> = match (tokens, separator) {
        (TokenMode::Chars, _) => text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(String::from)
            .collect(),
        (TokenMode::Words, Some(sep)) if !sep.is_empty() => text
            .split(sep)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
        (TokenMode::Words, _) => text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
    };
    trace!(?tokens, count = values.len(), "parsed sequence");
    values
}

//! Tokenizer: pulls byte tokens out of a line of hex text
//!
//! Only uppercase pairs count. Lowercase hex, separators and stray
//! characters are skipped, so `aa aa 04` yields nothing.

use lazy_static::lazy_static;
use regex::Regex;
use crate::MIN_TOKENS_PER_LINE;

lazy_static! {
    // Non-overlapping, left to right: "AAAA" is two tokens, "ABC" is one.
    static ref RE_HEX_PAIR: Regex = Regex::new(r"[0-9A-F]{2}").unwrap();
}

/// Converts text lines into byte tokens
#[derive(Debug, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Every uppercase hex pair in the line, in order
    pub fn tokenize(&self, line: &str) -> Vec<u8> {
        RE_HEX_PAIR
            .find_iter(line)
            .filter_map(|m| u8::from_str_radix(m.as_str(), 16).ok())
            .collect()
    }

    /// Tokenize, dropping lines too short to hold a packet
    pub fn tokenize_line(&self, line: &str) -> Option<Vec<u8>> {
        let tokens = self.tokenize(line);
        if tokens.len() < MIN_TOKENS_PER_LINE {
            None
        } else {
            Some(tokens)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_separated() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("AA AA 20 02 50"), vec![0xAA, 0xAA, 0x20, 0x02, 0x50]);
    }

    #[test]
    fn test_separators_ignored() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("AA,AA;04|50"), vec![0xAA, 0xAA, 0x04, 0x50]);
        assert_eq!(tokenizer.tokenize("AAAA0450"), vec![0xAA, 0xAA, 0x04, 0x50]);
    }

    #[test]
    fn test_lowercase_skipped() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("aa aa 04 04 50 0a").is_empty());
        // Mixed case: only the uppercase pairs survive
        assert_eq!(tokenizer.tokenize("aA AA Ff 1F"), vec![0xAA, 0x1F]);
    }

    #[test]
    fn test_odd_run_splits_left_to_right() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("ABC"), vec![0xAB]);
        assert_eq!(tokenizer.tokenize("A BC D"), vec![0xBC]);
    }

    #[test]
    fn test_empty_line() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize_line("").is_none());
    }

    #[test]
    fn test_short_line_dropped() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize_line("AA AA 04 04 50 00 00 00 00").is_none());
        assert_eq!(
            tokenizer.tokenize_line("AA AA 04 04 50 00 00 00 00 00").map(|t| t.len()),
            Some(10)
        );
    }
}

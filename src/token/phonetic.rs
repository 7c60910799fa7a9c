//! NATO containment-scan parsing for the licence flow.
//!
//! Licence entry tolerates sloppier phrasing than the exact-match ladder:
//! "alpha as in apple" or "it's bravo" still need to land on the right
//! letter.  So instead of exact word equality this variant scans the NATO
//! table in order and takes the first code word *contained anywhere* in the
//! normalized utterance.  A bare single character in `[A-Z9]` is accepted
//! directly, and "nine"/"niner" map to `'9'` — which the licence flow reads
//! as "no middle name".

use crate::vocab::NATO_ALPHABET;

/// The spoken forms of the no-middle-name sentinel.
static NINE_WORDS: &[&str] = &["niner", "nine"];

/// Resolve a licence-entry utterance to an uppercase character in `[A-Z9]`,
/// or `None` when nothing in the phrase is recognizable.
pub fn parse_phonetic(utterance: &str) -> Option<char> {
    let normalized = utterance.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    // Bare single character: letters and the '9' sentinel only.
    let mut chars = normalized.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_alphabetic() {
            return Some(c.to_ascii_uppercase());
        }
        if c == '9' {
            return Some('9');
        }
        return None;
    }

    for word in NINE_WORDS {
        if normalized.contains(word) {
            return Some('9');
        }
    }
    // Table order decides ties when an utterance somehow contains two code
    // words; first hit wins.
    NATO_ALPHABET
        .iter()
        .find(|(word, _)| normalized.contains(word))
        .map(|(_, c)| c.to_ascii_uppercase())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

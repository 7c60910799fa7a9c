//! Email-field speech grammar.
//!
//! Four sub-rules: letters (spelled "letter a" or bare "a"), digits
//! ("number one" or bare "one"), special characters with their spoken
//! synonyms, and a TLD rule built from the built-in common list plus any
//! caller-supplied extras.
//!
//! Extra TLDs are appended verbatim after the common list with no
//! de-duplication.  A duplicate alternative is harmless to a recognizer and
//! the append order carries override semantics for callers, so collapsing
//! duplicates here would be an observable behavior change.

use super::jsgf::GrammarDocument;
use crate::vocab::{COMMON_TLDS, DIGIT_CANONICAL};

/// Spoken synonyms for the characters an email address may contain.
static SPECIAL_WORDS: &[&str] = &[
    "at",
    "at sign",
    "dot",
    "period",
    "point",
    "dash",
    "hyphen",
    "minus",
    "underscore",
    "under score",
    "plus",
    "plus sign",
];

/// Build the email grammar with `extra_tlds` appended after the common set.
pub fn build(extra_tlds: &[String]) -> GrammarDocument {
    let mut doc = GrammarDocument::new(
        "email_field",
        "email",
        "<letter> | <digit> | <special> | <tld>",
    );
    doc.push_rule("letter", letter_alternatives());
    doc.push_rule("digit", digit_alternatives());
    doc.push_rule(
        "special",
        SPECIAL_WORDS.iter().map(|w| (*w).to_string()).collect(),
    );
    doc.push_rule("tld", tld_alternatives(extra_tlds));
    doc
}

fn letter_alternatives() -> Vec<String> {
    let mut alts = Vec::with_capacity(52);
    for c in 'a'..='z' {
        alts.push(format!("letter {}", c));
        alts.push(c.to_string());
    }
    alts
}

fn digit_alternatives() -> Vec<String> {
    let mut alts = Vec::with_capacity(20);
    for word in DIGIT_CANONICAL {
        alts.push(format!("number {}", word));
        alts.push((*word).to_string());
    }
    alts
}

fn tld_alternatives(extra_tlds: &[String]) -> Vec<String> {
    COMMON_TLDS
        .iter()
        .map(|t| (*t).to_string())
        .chain(extra_tlds.iter().cloned())
        .map(|tld| tld_phrase(&tld))
        .collect()
}

/// Spoken form of a TLD: "co.uk" becomes "dot co dot uk".
fn tld_phrase(tld: &str) -> String {
    format!("dot {}", tld.replace('.', " dot "))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Spoken-token parsing: one normalized phrase in, one canonical token out.
//!
//! The parser is an explicit priority ladder — an ordered list of matcher
//! functions tried in sequence, first hit wins.  The order is a contract:
//! a bare "o" must resolve to the letter `o` before the digit table ever
//! sees it, while "oh" falls through the single-letter matcher and lands in
//! the digit homophones.  [`TokenContext`] selects which ladder runs, so a
//! letters-only field can pull the letter-name homophones ("oh" → `o`,
//! "bee" → `b`) ahead of the digit table.
//!
//! This module provides:
//! * [`CanonicalToken`] / [`CommandKind`] — the parser's output values.
//! * [`TokenContext`] — which ladder to run.
//! * [`parse`] / [`parse_with_context`] — the entry points.
//! * [`phonetic::parse_phonetic`] — the NATO containment-scan variant used
//!   by the licence flow.

pub mod phonetic;

use serde::{Deserialize, Serialize};

use crate::vocab::{digit_for_word, LETTER_NAMES};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Navigation commands a field can receive instead of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandKind {
    Next,
    Back,
    Clear,
    Autofill,
}

/// The canonical value a spoken phrase resolves to.
///
/// `Fragment` carries multi-character output such as a compound TLD phrase
/// ("dot co dot uk" → `".co.uk"`); everything else is a single character or
/// a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CanonicalToken {
    Letter(char),
    Digit(char),
    Symbol(char),
    Fragment(String),
    Command(CommandKind),
    Unrecognized,
}

/// Which matcher ladder to run, i.e. which table gets first refusal on an
/// ambiguous word like "oh".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenContext {
    /// The documented default order: letter, digit, symbol, TLD, command.
    #[default]
    General,
    /// Letter-name homophones outrank the digit table ("oh" → letter `o`).
    Letters,
    /// The digit table runs first ("oh" → digit `0`).
    Digits,
}

// ---------------------------------------------------------------------------
// Matcher ladder
// ---------------------------------------------------------------------------

type Matcher = fn(&str) -> Option<CanonicalToken>;

/// Default ladder.  Order is load-bearing; see the module docs.
static GENERAL_LADDER: &[(&str, Matcher)] = &[
    ("letter", match_letter),
    ("digit", match_digit),
    ("symbol", match_symbol),
    ("tld", match_tld),
    ("command", match_command),
];

/// Letters-first ladder: letter-name homophones slot in ahead of digits.
static LETTERS_LADDER: &[(&str, Matcher)] = &[
    ("letter", match_letter),
    ("letter_name", match_letter_name),
    ("digit", match_digit),
    ("symbol", match_symbol),
    ("tld", match_tld),
    ("command", match_command),
];

/// Digits-first ladder.
static DIGITS_LADDER: &[(&str, Matcher)] = &[
    ("digit", match_digit),
    ("letter", match_letter),
    ("symbol", match_symbol),
    ("tld", match_tld),
    ("command", match_command),
];

impl TokenContext {
    fn ladder(self) -> &'static [(&'static str, Matcher)] {
        match self {
            TokenContext::General => GENERAL_LADDER,
            TokenContext::Letters => LETTERS_LADDER,
            TokenContext::Digits => DIGITS_LADDER,
        }
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Parse one spoken phrase under the default ([`TokenContext::General`])
/// ladder.
///
/// ```rust
/// use voice_form_engine::token::{parse, CanonicalToken};
///
/// assert_eq!(parse("letter b"), CanonicalToken::Letter('b'));
/// assert_eq!(parse("oh"), CanonicalToken::Digit('0'));
/// assert_eq!(parse("dot co dot uk"), CanonicalToken::Fragment(".co.uk".into()));
/// ```
pub fn parse(utterance: &str) -> CanonicalToken {
    parse_with_context(utterance, TokenContext::General)
}

/// Parse one spoken phrase under an explicit context.
pub fn parse_with_context(utterance: &str, context: TokenContext) -> CanonicalToken {
    let normalized = utterance.trim().to_lowercase();
    if normalized.is_empty() {
        return CanonicalToken::Unrecognized;
    }
    for (name, matcher) in context.ladder() {
        if let Some(token) = matcher(&normalized) {
            log::trace!("{normalized:?} matched {name} rule as {token:?}");
            return token;
        }
    }
    CanonicalToken::Unrecognized
}

// ---------------------------------------------------------------------------
// Individual matchers
// ---------------------------------------------------------------------------

/// Rule 1: a bare single letter, optionally prefixed with "letter".
fn match_letter(s: &str) -> Option<CanonicalToken> {
    let candidate = s.strip_prefix("letter ").unwrap_or(s);
    let mut chars = candidate.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(CanonicalToken::Letter(c)),
        _ => None,
    }
}

/// Letter-name homophones ("bee", "oh", "why").  Only on the letters-first
/// ladder.
fn match_letter_name(s: &str) -> Option<CanonicalToken> {
    LETTER_NAMES
        .iter()
        .find(|(word, _)| *word == s)
        .map(|(_, c)| CanonicalToken::Letter(*c))
}

/// Rule 2: a spoken digit word, optionally prefixed with "number", or a
/// bare digit character.
fn match_digit(s: &str) -> Option<CanonicalToken> {
    let candidate = s.strip_prefix("number ").unwrap_or(s);
    if let Some(d) = digit_for_word(candidate) {
        return Some(CanonicalToken::Digit(d));
    }
    let mut chars = candidate.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => Some(CanonicalToken::Digit(c)),
        _ => None,
    }
}

/// Rule 3: special-character synonyms.
fn match_symbol(s: &str) -> Option<CanonicalToken> {
    static SYMBOLS: &[(&str, char)] = &[
        ("at", '@'),
        ("at sign", '@'),
        ("dot", '.'),
        ("period", '.'),
        ("point", '.'),
        ("dash", '-'),
        ("hyphen", '-'),
        ("minus", '-'),
        ("underscore", '_'),
        ("under score", '_'),
        ("plus", '+'),
        ("plus sign", '+'),
    ];
    SYMBOLS
        .iter()
        .find(|(word, _)| *word == s)
        .map(|(_, c)| CanonicalToken::Symbol(*c))
}

/// Rule 4: a compound TLD phrase, "dot <rest>".  Internal " dot "
/// separators collapse to literal dots and the whole fragment is
/// re-prefixed with a leading dot.
fn match_tld(s: &str) -> Option<CanonicalToken> {
    let rest = s.strip_prefix("dot ")?;
    if rest.is_empty() {
        return None;
    }
    Some(CanonicalToken::Fragment(format!(
        ".{}",
        rest.replace(" dot ", ".")
    )))
}

/// Rule 5: navigation command synonyms.
fn match_command(s: &str) -> Option<CanonicalToken> {
    static COMMANDS: &[(&str, CommandKind)] = &[
        ("next", CommandKind::Next),
        ("back", CommandKind::Back),
        ("backspace", CommandKind::Back),
        ("delete", CommandKind::Back),
        ("clear", CommandKind::Clear),
        ("auto fill", CommandKind::Autofill),
        ("autofill", CommandKind::Autofill),
    ];
    COMMANDS
        .iter()
        .find(|(word, _)| *word == s)
        .map(|(_, kind)| CanonicalToken::Command(*kind))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

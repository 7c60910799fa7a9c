//! Transcript-to-option fuzzy matching.
//!
//! [`score`] runs a fixed tiered ladder over an option's label, aliases and
//! phonetic spellings; [`rank`] filters the zero scores and stable-sorts by
//! descending score so the caller's original order breaks ties; and
//! [`auto_select`] picks the single top candidate only when its score
//! clears the confidence threshold.
//!
//! The tier constants are deliberately not tunable at call time — a
//! recognizer front end and its tests must agree on the exact boundaries.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Score tiers
// ---------------------------------------------------------------------------

const SCORE_LABEL_EXACT: u32 = 1000;
const SCORE_ALIAS_EXACT: u32 = 900;
const SCORE_PHONETIC_EXACT: u32 = 800;
const SCORE_LABEL_PREFIX: u32 = 500;
const SCORE_ALIAS_PREFIX: u32 = 450;
const SCORE_PHONETIC_PREFIX: u32 = 400;
const SCORE_LABEL_CONTAINS: u32 = 300;
const SCORE_ALIAS_CONTAINS: u32 = 250;
const SCORE_PHONETIC_CONTAINS: u32 = 200;
/// Base for the per-word partial tier; also what an empty query scores.
const SCORE_WORD_BASE: u32 = 100;
const SCORE_PER_WORD: u32 = 50;

/// Minimum score [`auto_select`] accepts.  Exclusive, so the 100-point
/// empty-query / weak-partial tiers never auto-select but a single strong
/// word match (150) does.
const AUTO_SELECT_THRESHOLD: u32 = 100;

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// One selectable option: an opaque value, its display label, and the
/// spoken forms that should also resolve to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub phonetics: Vec<String>,
}

/// A matched option with its score.  Zero scores never appear in results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult<'a> {
    pub option: &'a OptionDescriptor,
    pub score: u32,
}

// ---------------------------------------------------------------------------
// score
// ---------------------------------------------------------------------------

/// Score one option against a transcript.  `0` means no match.
pub fn score(option: &OptionDescriptor, query: &str) -> u32 {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return SCORE_WORD_BASE;
    }

    let label = option.label.to_lowercase();
    let aliases: Vec<String> = option.aliases.iter().map(|a| a.to_lowercase()).collect();
    let phonetics: Vec<String> = option.phonetics.iter().map(|p| p.to_lowercase()).collect();

    if label == query {
        return SCORE_LABEL_EXACT;
    }
    if aliases.iter().any(|a| *a == query) {
        return SCORE_ALIAS_EXACT;
    }
    if phonetics.iter().any(|p| *p == query) {
        return SCORE_PHONETIC_EXACT;
    }
    if label.starts_with(&query) {
        return SCORE_LABEL_PREFIX;
    }
    if aliases.iter().any(|a| a.starts_with(&query)) {
        return SCORE_ALIAS_PREFIX;
    }
    if phonetics.iter().any(|p| p.starts_with(&query)) {
        return SCORE_PHONETIC_PREFIX;
    }
    if label.contains(&query) {
        return SCORE_LABEL_CONTAINS;
    }
    if aliases.iter().any(|a| a.contains(&query)) {
        return SCORE_ALIAS_CONTAINS;
    }
    if phonetics.iter().any(|p| p.contains(&query)) {
        return SCORE_PHONETIC_CONTAINS;
    }

    // Weakest tier: whole query words that prefix or appear inside any
    // label word.
    let label_words: Vec<&str> = label.split_whitespace().collect();
    let matching_words = query
        .split_whitespace()
        .filter(|qw| {
            label_words
                .iter()
                .any(|lw| lw.starts_with(qw) || lw.contains(qw))
        })
        .count() as u32;
    if matching_words > 0 {
        return SCORE_WORD_BASE + SCORE_PER_WORD * matching_words;
    }
    0
}

// ---------------------------------------------------------------------------
// rank / auto_select
// ---------------------------------------------------------------------------

/// Rank all matching options, best first.  Zero-score options are dropped;
/// the sort is stable so equal scores keep the caller's order.
pub fn rank<'a>(options: &'a [OptionDescriptor], query: &str) -> Vec<MatchResult<'a>> {
    let mut results: Vec<MatchResult<'a>> = options
        .iter()
        .map(|option| MatchResult {
            option,
            score: score(option, query),
        })
        .filter(|r| r.score > 0)
        .collect();
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

/// The single confidently-matched option for a transcript, if any.
///
/// Returns `None` unless the top-ranked score strictly exceeds the
/// threshold, so "matches everything" and the weakest one-word partials
/// never trigger an automatic selection.
pub fn auto_select<'a>(
    options: &'a [OptionDescriptor],
    transcript: &str,
) -> Option<&'a OptionDescriptor> {
    let ranked = rank(options, transcript);
    let top = ranked.first()?;
    if top.score > AUTO_SELECT_THRESHOLD {
        log::debug!(
            "auto-selecting {:?} for {transcript:?} (score {})",
            top.option.value,
            top.score
        );
        Some(top.option)
    } else {
        log::debug!(
            "no auto-select for {transcript:?}: top score {} not above {AUTO_SELECT_THRESHOLD}",
            top.score
        );
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

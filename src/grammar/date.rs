//! Date-field speech grammars.
//!
//! Day and month alternatives are enumerated literally from the vocabulary
//! tables (every ordinal, every cardinal, every zero-prefixed single digit)
//! rather than derived from a general number-to-words routine, so the
//! emitted grammar is a flat list a recognizer can consume directly.  Years
//! are compositional: a century prefix rule plus an enumerated two-digit
//! tail covers "nineteen sixty one", "two thousand twenty four", short
//! two-digit forms, and digit-by-digit spelling.

use serde::{Deserialize, Serialize};

use super::jsgf::GrammarDocument;
use crate::vocab::{
    ordinal_suffix, DAY_CARDINAL_WORDS, DAY_ORDINAL_WORDS, DIGIT_CANONICAL, MONTHS, TEEN_WORDS,
    TENS_WORDS, ZERO_WORDS,
};

// ---------------------------------------------------------------------------
// DateComponent
// ---------------------------------------------------------------------------

/// Which part(s) of a date the field captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateComponent {
    /// Day, month and year spoken in sequence.
    Full,
    /// Month and year only (e.g. card expiry style dates).
    MonthYear,
    Day,
    Month,
    Year,
}

// ---------------------------------------------------------------------------
// Grammar construction
// ---------------------------------------------------------------------------

/// Build the date grammar for the requested component.
pub fn build(component: DateComponent) -> GrammarDocument {
    let entry_body = match component {
        DateComponent::Full => "<day> <month> <year>",
        DateComponent::MonthYear => "<month> <year>",
        DateComponent::Day => "<day>",
        DateComponent::Month => "<month>",
        DateComponent::Year => "<year>",
    };
    let mut doc = GrammarDocument::new("date_field", "date", entry_body);

    let wants_day = matches!(component, DateComponent::Full | DateComponent::Day);
    let wants_month = matches!(
        component,
        DateComponent::Full | DateComponent::MonthYear | DateComponent::Month
    );
    let wants_year = matches!(
        component,
        DateComponent::Full | DateComponent::MonthYear | DateComponent::Year
    );

    if wants_day {
        doc.push_rule("day", day_alternatives());
    }
    if wants_month {
        doc.push_rule("month", month_alternatives());
    }
    if wants_year {
        doc.push_rule(
            "year",
            vec![
                "<year_prefix> <year_pair>".into(),
                "<year_prefix>".into(),
                "<year_pair>".into(),
                "<year_digit> <year_digit> <year_digit> <year_digit>".into(),
            ],
        );
        doc.push_rule(
            "year_prefix",
            vec![
                "nineteen".into(),
                "twenty".into(),
                "two thousand".into(),
                "two thousand and".into(),
            ],
        );
        doc.push_rule("year_pair", year_pair_alternatives());
        doc.push_rule("year_digit", year_digit_alternatives());
    }
    doc
}

/// All spoken forms for days 1–31: "1st", "first", "one", and the
/// zero-prefixed homophone forms for single digits ("zero one",
/// "nought one", "oh one").
fn day_alternatives() -> Vec<String> {
    let mut alts = Vec::with_capacity(31 * 4);
    for day in 1..=31u32 {
        let idx = (day - 1) as usize;
        alts.push(format!("{}{}", day, ordinal_suffix(day)));
        alts.push(DAY_ORDINAL_WORDS[idx].to_string());
        alts.push(DAY_CARDINAL_WORDS[idx].to_string());
        if day < 10 {
            for zero in ZERO_WORDS {
                alts.push(format!("{} {}", zero, DAY_CARDINAL_WORDS[idx]));
            }
        }
    }
    alts
}

/// All spoken forms for months 1–12: full name, abbreviation, cardinal
/// number word, and zero-prefixed forms for single-digit months.
fn month_alternatives() -> Vec<String> {
    let mut alts = Vec::with_capacity(12 * 4);
    for month in 1..=12u32 {
        let idx = (month - 1) as usize;
        let (full, abbr) = MONTHS[idx];
        alts.push(full.to_string());
        if abbr != full {
            alts.push(abbr.to_string());
        }
        alts.push(DAY_CARDINAL_WORDS[idx].to_string());
        if month < 10 {
            for zero in ZERO_WORDS {
                alts.push(format!("{} {}", zero, DAY_CARDINAL_WORDS[idx]));
            }
        }
    }
    alts
}

/// Spoken two-digit year tails, 1–99: "seven", "oh seven", "seventeen",
/// "seventy", "seventy six".  "hundred" covers "nineteen hundred".
fn year_pair_alternatives() -> Vec<String> {
    let mut alts = Vec::with_capacity(120);
    for unit in DIGIT_CANONICAL[1..].iter() {
        alts.push((*unit).to_string());
        alts.push(format!("oh {}", unit));
    }
    for teen in TEEN_WORDS {
        alts.push((*teen).to_string());
    }
    for tens in TENS_WORDS {
        alts.push((*tens).to_string());
        for unit in DIGIT_CANONICAL[1..].iter() {
            alts.push(format!("{} {}", tens, unit));
        }
    }
    alts.push("hundred".into());
    alts
}

/// Digit-by-digit year spelling, including the zero homophones.
fn year_digit_alternatives() -> Vec<String> {
    let mut alts: Vec<String> = ZERO_WORDS.iter().map(|w| (*w).to_string()).collect();
    alts.extend(DIGIT_CANONICAL[1..].iter().map(|w| (*w).to_string()));
    alts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

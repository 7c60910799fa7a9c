//! UK driving-licence field speech grammar.
//!
//! Letters are spoken either as NATO code words or bare letter names,
//! digits as plain digit words, and a command rule carries the navigation
//! vocabulary for moving between the open positions of the code.

use super::jsgf::GrammarDocument;
use crate::vocab::{DIGIT_CANONICAL, NATO_ALPHABET};

/// Navigation words accepted while filling the licence field.
static COMMAND_WORDS: &[&str] = &[
    "next",
    "back",
    "backspace",
    "delete",
    "clear",
    "auto fill",
    "autofill",
];

/// Build the licence-entry grammar.
pub fn build() -> GrammarDocument {
    let mut doc = GrammarDocument::new(
        "licence_field",
        "licence",
        "<letter> | <digit> | <command>",
    );

    let mut letters = Vec::with_capacity(52);
    for (word, c) in NATO_ALPHABET {
        letters.push((*word).to_string());
        letters.push(c.to_string());
    }
    doc.push_rule("letter", letters);
    doc.push_rule(
        "digit",
        DIGIT_CANONICAL.iter().map(|w| (*w).to_string()).collect(),
    );
    doc.push_rule(
        "command",
        COMMAND_WORDS.iter().map(|w| (*w).to_string()).collect(),
    );
    doc
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_cover_nato_and_bare_names() {
        let doc = build();
        let letter = doc.rule("letter").unwrap();
        assert_eq!(letter.alternatives.len(), 52);
        assert!(letter.alternatives.iter().any(|a| a == "alpha"));
        assert!(letter.alternatives.iter().any(|a| a == "a"));
        assert!(letter.alternatives.iter().any(|a| a == "zulu"));
        assert!(letter.alternatives.iter().any(|a| a == "z"));
    }

    #[test]
    fn digits_cover_zero_through_nine() {
        let doc = build();
        let digit = doc.rule("digit").unwrap();
        assert_eq!(digit.alternatives.len(), 10);
        assert!(digit.alternatives.iter().any(|a| a == "zero"));
        assert!(digit.alternatives.iter().any(|a| a == "nine"));
    }

    #[test]
    fn commands_cover_navigation_words() {
        let doc = build();
        let command = doc.rule("command").unwrap();
        for word in ["next", "backspace", "clear", "auto fill", "autofill"] {
            assert!(command.alternatives.iter().any(|a| a == word), "missing {word}");
        }
    }

    #[test]
    fn document_is_well_formed() {
        assert!(build().is_well_formed());
    }
}

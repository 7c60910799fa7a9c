//! Generic free-text field grammar and its downstream validator.
//!
//! The emitted grammar is a minimal scaffold: speech grammars constrain
//! what *sounds* are recognized, while `pattern`/length limits apply to the
//! resulting text.  Those limits therefore live in [`TextValidator`], which
//! the caller runs over the assembled transcript, not in the grammar
//! document itself.
//!
//! A malformed caller-supplied `pattern` never fails generation or
//! validation construction: the field degrades to unconstrained and a
//! warning is logged.

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::jsgf::GrammarDocument;

// ---------------------------------------------------------------------------
// GenericFieldSpec
// ---------------------------------------------------------------------------

/// Caller-supplied description of a free-text field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericFieldSpec {
    /// Regular expression the final text must match, if any.
    #[serde(default)]
    pub pattern: Option<String>,
    /// Minimum accepted text length in characters.
    #[serde(default)]
    pub min_length: usize,
    /// Maximum accepted text length in characters; `0` means unbounded.
    #[serde(default)]
    pub max_length: usize,
    /// Lowercase spoken word to canonical substring, e.g. "slash" → "/".
    /// A `BTreeMap` keeps grammar output deterministic.
    #[serde(default)]
    pub word_to_format_rules: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// Grammar construction
// ---------------------------------------------------------------------------

/// Build the scaffold grammar for a generic field.
///
/// When the spec carries format-rule words they become the dictation
/// alternatives; otherwise the dictation rule is the empty `<NULL>`
/// placeholder and the recognizer falls back to open dictation.
pub fn build(spec: &GenericFieldSpec) -> GrammarDocument {
    // Probe the pattern early so a bad regex is reported at grammar-build
    // time, not first discovered when the operator submits the field.
    if let Some(pattern) = &spec.pattern {
        if Regex::new(pattern).is_err() {
            log::warn!("generic field pattern {pattern:?} does not compile; field is unconstrained");
        }
    }

    let mut doc = GrammarDocument::new("generic_field", "field", "<dictation>");
    let alternatives: Vec<String> = if spec.word_to_format_rules.is_empty() {
        vec!["<NULL>".into()]
    } else {
        spec.word_to_format_rules.keys().cloned().collect()
    };
    doc.push_rule("dictation", alternatives);
    doc
}

// ---------------------------------------------------------------------------
// TextValidator
// ---------------------------------------------------------------------------

/// Downstream validator for the text a generic field produced.
#[derive(Debug)]
pub struct TextValidator {
    pattern: Option<Regex>,
    min_length: usize,
    max_length: usize,
}

impl TextValidator {
    /// Build a validator from the field spec.  A malformed `pattern`
    /// degrades to "no pattern constraint" with a logged warning.
    pub fn for_spec(spec: &GenericFieldSpec) -> Self {
        let pattern = spec.pattern.as_deref().and_then(|p| match Regex::new(p) {
            Ok(re) => Some(re),
            Err(err) => {
                log::warn!("ignoring malformed field pattern {p:?}: {err}");
                None
            }
        });
        Self {
            pattern,
            min_length: spec.min_length,
            max_length: spec.max_length,
        }
    }

    /// Whether `text` satisfies the length and pattern constraints.
    pub fn validate(&self, text: &str) -> bool {
        let len = text.chars().count();
        if len < self.min_length {
            return false;
        }
        if self.max_length > 0 && len > self.max_length {
            return false;
        }
        match &self.pattern {
            Some(re) => re.is_match(text),
            None => true,
        }
    }
}

// ---------------------------------------------------------------------------
// Transcript formatting
// ---------------------------------------------------------------------------

/// Apply the spec's word-to-format rules to a whitespace-tokenized
/// transcript.  Mapped words are replaced by their canonical substring and
/// concatenated directly; unmapped words pass through separated by single
/// spaces.
pub fn apply_format_rules(spec: &GenericFieldSpec, transcript: &str) -> String {
    let mut out = String::with_capacity(transcript.len());
    for word in transcript.split_whitespace() {
        let lower = word.to_lowercase();
        match spec.word_to_format_rules.get(&lower) {
            Some(canonical) => out.push_str(canonical),
            None => {
                // Separate two spoken words; stay tight against canonical
                // substrings like "/" so "four slash twelve" reads "four/twelve".
                if out.chars().last().is_some_and(|c| c.is_alphanumeric()) {
                    out.push(' ');
                }
                out.push_str(word);
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Route the degrade warnings through env_logger when `RUST_LOG` is set.
    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn spec_with_rules() -> GenericFieldSpec {
        let mut rules = BTreeMap::new();
        rules.insert("slash".to_string(), "/".to_string());
        rules.insert("space".to_string(), " ".to_string());
        GenericFieldSpec {
            word_to_format_rules: rules,
            ..Default::default()
        }
    }

    // --- grammar scaffold ---------------------------------------------------

    #[test]
    fn scaffold_without_rules_uses_null_placeholder() {
        let doc = build(&GenericFieldSpec::default());
        let dictation = doc.rule("dictation").unwrap();
        assert_eq!(dictation.alternatives, vec!["<NULL>".to_string()]);
        assert!(doc.is_well_formed());
    }

    #[test]
    fn scaffold_lists_format_rule_words() {
        let doc = build(&spec_with_rules());
        let dictation = doc.rule("dictation").unwrap();
        assert!(dictation.alternatives.iter().any(|a| a == "slash"));
        assert!(doc.is_well_formed());
    }

    #[test]
    fn malformed_pattern_does_not_fail_generation() {
        init_logs();
        let spec = GenericFieldSpec {
            pattern: Some("([unclosed".to_string()),
            ..Default::default()
        };
        let doc = build(&spec);
        assert!(doc.is_well_formed());
    }

    #[test]
    fn pattern_is_not_encoded_into_grammar_text() {
        let spec = GenericFieldSpec {
            pattern: Some("^[A-Z]{2}$".to_string()),
            ..Default::default()
        };
        assert!(!build(&spec).render().contains("[A-Z]"));
    }

    // --- validator ----------------------------------------------------------

    #[test]
    fn validator_enforces_length_bounds() {
        let spec = GenericFieldSpec {
            min_length: 2,
            max_length: 4,
            ..Default::default()
        };
        let v = TextValidator::for_spec(&spec);
        assert!(!v.validate("a"));
        assert!(v.validate("ab"));
        assert!(v.validate("abcd"));
        assert!(!v.validate("abcde"));
    }

    #[test]
    fn zero_max_length_means_unbounded() {
        let v = TextValidator::for_spec(&GenericFieldSpec::default());
        assert!(v.validate(&"x".repeat(10_000)));
    }

    #[test]
    fn validator_applies_pattern() {
        let spec = GenericFieldSpec {
            pattern: Some("^[0-9]+$".to_string()),
            ..Default::default()
        };
        let v = TextValidator::for_spec(&spec);
        assert!(v.validate("0451"));
        assert!(!v.validate("building 19"));
    }

    #[test]
    fn malformed_pattern_degrades_to_unconstrained() {
        init_logs();
        let spec = GenericFieldSpec {
            pattern: Some("([unclosed".to_string()),
            ..Default::default()
        };
        let v = TextValidator::for_spec(&spec);
        assert!(v.validate("anything at all"));
    }

    // --- formatting ---------------------------------------------------------

    #[test]
    fn format_rules_replace_spoken_words() {
        let out = apply_format_rules(&spec_with_rules(), "flat four slash twelve");
        assert_eq!(out, "flat four/twelve");
    }

    #[test]
    fn unmapped_words_pass_through() {
        let out = apply_format_rules(&GenericFieldSpec::default(), "plain words here");
        assert_eq!(out, "plain words here");
    }

    #[test]
    fn format_rules_match_case_insensitively() {
        let out = apply_format_rules(&spec_with_rules(), "SLASH");
        assert_eq!(out, "/");
    }
}

//! JSGF grammar-document value type and renderer.
//!
//! A [`GrammarDocument`] is the plain-text artifact handed to an external
//! recognizer.  Rendering is fully deterministic — same document in, same
//! bytes out — because some recognizers cache grammars by content hash.
//!
//! Layout of a rendered document:
//!
//! ```text
//! #JSGF V1.0;
//! grammar date_field;
//!
//! public <date> = <day> <month> <year>;
//! <day> = ( first | 1st | one | ... );
//! ```

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// JSGF self-identifying header emitted at the top of every document.
const JSGF_HEADER: &str = "#JSGF V1.0;";

/// Matches `<rule_name>` references inside rule bodies.
static RULE_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([A-Za-z_][A-Za-z0-9_]*)>").unwrap());

/// JSGF special rules that are always defined.
const BUILTIN_RULES: &[&str] = &["NULL", "VOID"];

// ---------------------------------------------------------------------------
// GrammarRule
// ---------------------------------------------------------------------------

/// A named sub-rule: a disjunction of literal phrases (or rule references).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarRule {
    pub name: String,
    pub alternatives: Vec<String>,
}

impl GrammarRule {
    pub fn new(name: impl Into<String>, alternatives: Vec<String>) -> Self {
        Self {
            name: name.into(),
            alternatives,
        }
    }
}

// ---------------------------------------------------------------------------
// GrammarDocument
// ---------------------------------------------------------------------------

/// A complete speech grammar: name, one public entry rule, and the sub-rules
/// the entry rule references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarDocument {
    /// Grammar name (the `grammar <name>;` line).
    pub name: String,
    /// Name of the public entry rule, without angle brackets.
    pub entry_name: String,
    /// Body of the public entry rule, e.g. `<day> <month> <year>`.
    pub entry_body: String,
    /// Sub-rules, rendered in insertion order.
    pub rules: Vec<GrammarRule>,
}

impl GrammarDocument {
    pub fn new(
        name: impl Into<String>,
        entry_name: impl Into<String>,
        entry_body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            entry_name: entry_name.into(),
            entry_body: entry_body.into(),
            rules: Vec::new(),
        }
    }

    /// Append a sub-rule.
    pub fn push_rule(&mut self, name: impl Into<String>, alternatives: Vec<String>) {
        self.rules.push(GrammarRule::new(name, alternatives));
    }

    /// Look up a sub-rule by name.
    pub fn rule(&self, name: &str) -> Option<&GrammarRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Render the document as JSGF text.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(1024);
        out.push_str(JSGF_HEADER);
        out.push('\n');
        out.push_str(&format!("grammar {};\n\n", self.name));
        out.push_str(&format!(
            "public <{}> = {};\n",
            self.entry_name, self.entry_body
        ));
        for rule in &self.rules {
            out.push_str(&format!(
                "<{}> = ( {} );\n",
                rule.name,
                rule.alternatives.join(" | ")
            ));
        }
        out
    }

    /// Every `<rule>` referenced somewhere in the document but defined
    /// nowhere.  Empty means the document is internally consistent.
    pub fn undefined_references(&self) -> Vec<String> {
        let mut missing = Vec::new();
        let check_body = |body: &str, missing: &mut Vec<String>| {
            for cap in RULE_REF.captures_iter(body) {
                let name = &cap[1];
                let defined = name == self.entry_name
                    || BUILTIN_RULES.contains(&name)
                    || self.rules.iter().any(|r| r.name == name);
                if !defined && !missing.iter().any(|m| m == name) {
                    missing.push(name.to_string());
                }
            }
        };
        check_body(&self.entry_body, &mut missing);
        for rule in &self.rules {
            for alt in &rule.alternatives {
                check_body(alt, &mut missing);
            }
        }
        missing
    }

    /// Rule names that are defined more than once, or that shadow the
    /// entry rule.  A referenced rule must be defined exactly once.
    pub fn duplicate_definitions(&self) -> Vec<String> {
        let mut dupes = Vec::new();
        for (i, rule) in self.rules.iter().enumerate() {
            let seen_before = rule.name == self.entry_name
                || self.rules[..i].iter().any(|r| r.name == rule.name);
            if seen_before && !dupes.iter().any(|d| d == &rule.name) {
                dupes.push(rule.name.clone());
            }
        }
        dupes
    }

    /// Cheap structural well-formedness check: every statement terminated,
    /// every referenced rule defined exactly once, no empty disjunctions.
    pub fn is_well_formed(&self) -> bool {
        !self.name.is_empty()
            && !self.entry_name.is_empty()
            && !self.entry_body.is_empty()
            && self.rules.iter().all(|r| !r.alternatives.is_empty())
            && self.undefined_references().is_empty()
            && self.duplicate_definitions().is_empty()
    }
}

impl fmt::Display for GrammarDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GrammarDocument {
        let mut doc = GrammarDocument::new("pet_field", "pet", "<animal>");
        doc.push_rule("animal", vec!["cat".into(), "dog".into()]);
        doc
    }

    #[test]
    fn renders_header_grammar_line_and_rules() {
        let text = sample().render();
        assert!(text.starts_with("#JSGF V1.0;\n"));
        assert!(text.contains("grammar pet_field;\n"));
        assert!(text.contains("public <pet> = <animal>;\n"));
        assert!(text.contains("<animal> = ( cat | dog );\n"));
    }

    #[test]
    fn every_statement_is_semicolon_terminated() {
        for line in sample().render().lines().filter(|l| !l.is_empty()) {
            assert!(line.ends_with(';'), "unterminated statement: {line}");
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(sample().render(), sample().render());
    }

    #[test]
    fn detects_dangling_reference() {
        let doc = GrammarDocument::new("x", "entry", "<missing>");
        assert_eq!(doc.undefined_references(), vec!["missing".to_string()]);
        assert!(!doc.is_well_formed());
    }

    #[test]
    fn builtin_null_is_always_defined() {
        let doc = GrammarDocument::new("x", "entry", "<NULL>");
        assert!(doc.undefined_references().is_empty());
    }

    #[test]
    fn references_inside_alternatives_are_checked() {
        let mut doc = GrammarDocument::new("x", "entry", "<a>");
        doc.push_rule("a", vec!["<b> <c>".into()]);
        doc.push_rule("b", vec!["literal".into()]);
        assert_eq!(doc.undefined_references(), vec!["c".to_string()]);
    }

    #[test]
    fn well_formed_sample() {
        assert!(sample().is_well_formed());
        assert!(sample().duplicate_definitions().is_empty());
    }

    #[test]
    fn duplicate_rule_definition_is_malformed() {
        let mut doc = sample();
        doc.push_rule("animal", vec!["ferret".into()]);
        assert_eq!(doc.duplicate_definitions(), vec!["animal".to_string()]);
        assert!(!doc.is_well_formed());
    }

    #[test]
    fn rule_shadowing_the_entry_is_malformed() {
        let mut doc = sample();
        doc.push_rule("pet", vec!["goldfish".into()]);
        assert_eq!(doc.duplicate_definitions(), vec!["pet".to_string()]);
        assert!(!doc.is_well_formed());
    }

    #[test]
    fn display_matches_render() {
        let doc = sample();
        assert_eq!(doc.to_string(), doc.render());
    }
}

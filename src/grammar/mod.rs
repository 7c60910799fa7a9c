//! Speech-grammar generation for constrained form fields.
//!
//! This module provides:
//! * [`FieldGrammarSpec`] — closed description of a voice-driven field.
//! * [`DateComponent`] — which date part(s) a date field captures.
//! * [`GenericFieldSpec`] / [`TextValidator`] — free-text fields and their
//!   downstream validation.
//! * [`GrammarDocument`] / [`GrammarRule`] — the JSGF output value type.
//! * [`generate`] — the single entry point mapping a spec to a document.
//!
//! # Quick start
//!
//! ```rust
//! use voice_form_engine::grammar::{generate, DateComponent, FieldGrammarSpec};
//!
//! let doc = generate(&FieldGrammarSpec::Date {
//!     component: DateComponent::Full,
//! });
//! assert!(doc.render().starts_with("#JSGF V1.0;"));
//! assert!(doc.is_well_formed());
//! ```

pub mod date;
pub mod email;
pub mod generic;
pub mod jsgf;
pub mod licence;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use date::DateComponent;
pub use generic::{apply_format_rules, GenericFieldSpec, TextValidator};
pub use jsgf::{GrammarDocument, GrammarRule};

// ---------------------------------------------------------------------------
// FieldGrammarSpec
// ---------------------------------------------------------------------------

/// Everything the generator needs to know about one form field.
///
/// A closed enum rather than a string tag: adding a field kind is a
/// compile-time decision and every consumer's `match` must account for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldGrammarSpec {
    /// A date (or part of one).
    Date { component: DateComponent },
    /// An email address.  `extra_tlds` are appended after the built-in
    /// common list, in order, without de-duplication.
    Email {
        #[serde(default)]
        extra_tlds: Vec<String>,
    },
    /// A UK driving-licence number entered letter by letter.
    UkLicence,
    /// A free-text field validated downstream.
    Generic(GenericFieldSpec),
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

/// Build the grammar document for a field.
///
/// Total over well-formed specs: a malformed generic `pattern` degrades the
/// field to unconstrained (with a logged warning) instead of failing.
/// Output is deterministic, so identical specs render identical bytes.
pub fn generate(spec: &FieldGrammarSpec) -> GrammarDocument {
    match spec {
        FieldGrammarSpec::Date { component } => date::build(*component),
        FieldGrammarSpec::Email { extra_tlds } => email::build(extra_tlds),
        FieldGrammarSpec::UkLicence => licence::build(),
        FieldGrammarSpec::Generic(generic_spec) => generic::build(generic_spec),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

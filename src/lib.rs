//! Voice grammar and structured-code engine for voice-driven forms.
//!
//! The crate is the pure core behind a voice form-filling front end: it
//! turns field descriptions into speech grammars an external recognizer can
//! consume, turns recognizer transcripts back into canonical characters and
//! commands, encodes UK driving-licence numbers from identity data, and
//! fuzzy-matches transcripts against option lists.
//!
//! Everything here is a synchronous, side-effect-free function over plain
//! data: no audio, no network, no session state.  The caller owns the
//! recognizer lifecycle and must hand the engine one finalized transcript
//! at a time.
//!
//! # Modules
//!
//! * [`vocab`] — static spoken-vocabulary tables (NATO alphabet, digit
//!   homophones, months, TLDs).
//! * [`grammar`] — [`FieldGrammarSpec`] → JSGF [`GrammarDocument`].
//! * [`token`] — spoken phrase → [`CanonicalToken`], plus the NATO
//!   containment-scan variant for licence entry.
//! * [`licence`] — identity → 16-character licence code, with open-segment
//!   input and the complete/incomplete/invalid distinction.
//! * [`matcher`] — transcript vs. option list scoring, ranking, and
//!   auto-selection.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use voice_form_engine::licence::{encode, Gender, Identity};
//! use voice_form_engine::token::phonetic::parse_phonetic;
//!
//! let identity = Identity {
//!     surname: "Smith".into(),
//!     first_name: "John".into(),
//!     middle_name: None,
//!     date_of_birth: NaiveDate::from_ymd_opt(1987, 7, 15).unwrap(),
//!     gender: Gender::Female,
//! };
//! let mut code = encode(&identity).unwrap();
//! code.set_middle_initial(parse_phonetic("mike").unwrap()).unwrap();
//! code.set_security_digits("042").unwrap();
//! assert_eq!(code.stored(), "SMITH857157JM042");
//! ```

pub mod grammar;
pub mod licence;
pub mod matcher;
pub mod token;
pub mod vocab;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use grammar::{generate, DateComponent, FieldGrammarSpec, GrammarDocument};
pub use licence::{encode, validate_code, CodeStatus, Gender, Identity, LicenceCode};
pub use matcher::{auto_select, rank, score, MatchResult, OptionDescriptor};
pub use token::{parse, parse_with_context, CanonicalToken, CommandKind, TokenContext};

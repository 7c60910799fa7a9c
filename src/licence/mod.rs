//! UK driving-licence number codec.
//!
//! A licence code is 16 characters in four logical segments:
//!
//! | Positions | Content | Kind |
//! |-----------|---------|------|
//! | 1–5   | surname code, `'9'`-padded | locked |
//! | 6     | birth-year decade digit | locked |
//! | 7–8   | birth month, +50 if female | locked |
//! | 9–10  | birth day | locked |
//! | 11    | birth-year unit digit | locked |
//! | 12    | first-name initial | locked |
//! | 13    | middle-name initial, `'9'` = none | open |
//! | 14–16 | three security digits | open |
//!
//! Locked segments are derived from [`Identity`] by [`encode`] and are
//! never accepted as direct edits; the two open segments are the only
//! positions the voice/keypad flow may write, via
//! [`LicenceCode::set_middle_initial`] and
//! [`LicenceCode::set_security_digits`].
//!
//! The +50 female month offset is the DVLA encoding rule and must be
//! reproduced exactly, two-digit zero padding included (July, female → 57).

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Charset/length check for a complete stored code.
static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9]{16}$").unwrap());

/// Placeholder for an unsupplied middle initial.
const MIDDLE_PLACEHOLDER: char = '9';

/// Placeholder for unsupplied security digits.
const SECURITY_PLACEHOLDER: &str = "000";

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Gender as the DVLA encoding cares about it: female gets the +50 month
/// offset, everything else does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
    Unspecified,
}

impl Gender {
    /// Parse a free-form gender string.  "female"/"f" (case-insensitive)
    /// map to [`Gender::Female`], "male"/"m" to [`Gender::Male`], anything
    /// else to [`Gender::Unspecified`].
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "female" | "f" => Gender::Female,
            "male" | "m" => Gender::Male,
            _ => Gender::Unspecified,
        }
    }
}

/// The identity attributes the locked segments are derived from.
///
/// `date_of_birth` is a typed [`NaiveDate`], so "identity without a date of
/// birth" is unrepresentable and encoding never has to substitute nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub surname: String,
    pub first_name: String,
    /// Seeds the open middle-initial segment when already known; the voice
    /// flow may still overwrite it.
    #[serde(default)]
    pub middle_name: Option<String>,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures of the codec proper.  An incomplete code is *not* an error —
/// see [`CodeStatus`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The surname contains no letters at all, so no surname code exists.
    #[error("surname contains no letters")]
    UnusableSurname,

    /// The decade/unit digits are defined over four-digit birth years only.
    #[error("birth year {0} is outside the four-digit range")]
    UnsupportedBirthYear(i32),

    /// A middle initial must be A–Z or the `'9'` sentinel.
    #[error("invalid middle initial {0:?}: expected A-Z or '9'")]
    InvalidMiddleInitial(char),

    /// Security digits must be exactly three ASCII digits.
    #[error("invalid security digits {0:?}: expected exactly three digits")]
    InvalidSecurityDigits(String),
}

// ---------------------------------------------------------------------------
// CodeStatus
// ---------------------------------------------------------------------------

/// The three distinct states a code can be in.  `Incomplete` means "needs
/// more input" and must never be reported as `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeStatus {
    /// All 16 positions populated from `[A-Z0-9]`.
    Complete,
    /// Structurally fine so far but open segments still unsupplied (or, for
    /// raw strings, fewer than 16 characters).
    Incomplete,
    /// Malformed: wrong length or characters outside `[A-Z0-9]`.
    Invalid,
}

// ---------------------------------------------------------------------------
// LicenceCode
// ---------------------------------------------------------------------------

/// A licence code with its locked segments derived and its open segments
/// tracked separately, so "explicitly no middle name" (`Some('9')`) is
/// distinguishable from "not supplied yet" (`None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenceCode {
    surname_code: String,
    decade: char,
    month_code: String,
    day_code: String,
    unit: char,
    first_initial: char,
    middle_initial: Option<char>,
    security_digits: Option<String>,
}

impl LicenceCode {
    // -----------------------------------------------------------------------
    // Open segments
    // -----------------------------------------------------------------------

    /// Set the middle initial (position 13).  Accepts A–Z (either case) or
    /// the `'9'` no-middle-name sentinel.
    pub fn set_middle_initial(&mut self, c: char) -> Result<(), CodecError> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() || upper == '9' {
            self.middle_initial = Some(upper);
            Ok(())
        } else {
            Err(CodecError::InvalidMiddleInitial(c))
        }
    }

    /// Set the three security digits (positions 14–16).
    pub fn set_security_digits(&mut self, digits: &str) -> Result<(), CodecError> {
        if digits.len() == 3 && digits.chars().all(|c| c.is_ascii_digit()) {
            self.security_digits = Some(digits.to_string());
            Ok(())
        } else {
            Err(CodecError::InvalidSecurityDigits(digits.to_string()))
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// [`CodeStatus::Complete`] once both open segments have been supplied,
    /// [`CodeStatus::Incomplete`] until then.  Locked segments are valid by
    /// construction.
    pub fn status(&self) -> CodeStatus {
        if self.middle_initial.is_some() && self.security_digits.is_some() {
            CodeStatus::Complete
        } else {
            CodeStatus::Incomplete
        }
    }

    /// The unspaced 16-character stored value, with placeholders standing
    /// in for unsupplied open segments.
    pub fn stored(&self) -> String {
        format!(
            "{}{}{}{}{}{}{}{}",
            self.surname_code,
            self.decade,
            self.month_code,
            self.day_code,
            self.unit,
            self.first_initial,
            self.middle_initial.unwrap_or(MIDDLE_PLACEHOLDER),
            self.security_digits.as_deref().unwrap_or(SECURITY_PLACEHOLDER),
        )
    }

    /// Display form: single spaces after positions 5, 11 and 13, i.e. a
    /// 5-6-2-3 grouping.
    pub fn display(&self) -> String {
        let stored = self.stored();
        format!(
            "{} {} {} {}",
            &stored[0..5],
            &stored[5..11],
            &stored[11..13],
            &stored[13..16]
        )
    }
}

// ---------------------------------------------------------------------------
// encode
// ---------------------------------------------------------------------------

/// Derive the locked segments of a licence code from `identity`.
///
/// The open segments start at their placeholders (`'9'`, `"000"`) unless
/// `identity.middle_name` is present, which seeds the middle initial.
///
/// # Errors
///
/// [`CodecError::UnusableSurname`] when the surname contains no letters;
/// [`CodecError::UnsupportedBirthYear`] when the birth year has no
/// well-defined decade/unit digits (outside 1000–9999).
pub fn encode(identity: &Identity) -> Result<LicenceCode, CodecError> {
    let surname_code = surname_code(&identity.surname)?;

    let year = identity.date_of_birth.year();
    if !(1000..=9999).contains(&year) {
        return Err(CodecError::UnsupportedBirthYear(year));
    }
    let decade = char::from_digit((year / 10 % 10) as u32, 10).unwrap_or('0');
    let unit = char::from_digit((year % 10) as u32, 10).unwrap_or('0');

    let mut month = identity.date_of_birth.month();
    if identity.gender == Gender::Female {
        month += 50;
    }

    let first_initial = initial_of(&identity.first_name).unwrap_or('9');
    let middle_initial = identity.middle_name.as_deref().and_then(initial_of);

    Ok(LicenceCode {
        surname_code,
        decade,
        month_code: format!("{:02}", month),
        day_code: format!("{:02}", identity.date_of_birth.day()),
        unit,
        first_initial,
        middle_initial,
        security_digits: None,
    })
}

/// First five letters of the surname, uppercased, `'9'`-padded on the
/// right when fewer than five letters remain after stripping non-letters.
fn surname_code(surname: &str) -> Result<String, CodecError> {
    let mut code: String = surname
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(5)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if code.is_empty() {
        return Err(CodecError::UnusableSurname);
    }
    while code.len() < 5 {
        code.push('9');
    }
    Ok(code)
}

/// Uppercased first letter of a name, if it has one.
fn initial_of(name: &str) -> Option<char> {
    name.chars()
        .find(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
}

// ---------------------------------------------------------------------------
// Raw-string validation
// ---------------------------------------------------------------------------

/// Classify a raw code string the way a UI needs it: complete, merely
/// incomplete (a valid prefix, keep typing), or genuinely malformed.
pub fn validate_code(code: &str) -> CodeStatus {
    if CODE_RE.is_match(code) {
        return CodeStatus::Complete;
    }
    let valid_charset = code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
    if valid_charset && code.len() < 16 {
        CodeStatus::Incomplete
    } else {
        CodeStatus::Invalid
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn smith() -> Identity {
        Identity {
            surname: "Smith".into(),
            first_name: "John".into(),
            middle_name: None,
            date_of_birth: NaiveDate::from_ymd_opt(1987, 7, 15).unwrap(),
            gender: Gender::Female,
        }
    }

    // --- derivation ---------------------------------------------------------

    #[test]
    fn round_trip_with_voice_supplied_segments() {
        let mut code = encode(&smith()).unwrap();
        code.set_middle_initial('M').unwrap();
        code.set_security_digits("042").unwrap();

        let stored = code.stored();
        assert_eq!(stored.len(), 16);
        assert!(CODE_RE.is_match(&stored));
        // SMITH + decade 8 + month 57 (07+50) + day 15 + unit 7 + J + M + 042
        assert_eq!(stored, "SMITH857157JM042");
        assert_eq!(code.status(), CodeStatus::Complete);
    }

    #[test]
    fn female_month_gets_plus_fifty() {
        let code = encode(&smith()).unwrap();
        assert_eq!(&code.stored()[6..8], "57");
    }

    #[test]
    fn male_month_is_unoffset_and_zero_padded() {
        let mut id = smith();
        id.gender = Gender::Male;
        let code = encode(&id).unwrap();
        assert_eq!(&code.stored()[6..8], "07");
    }

    #[test]
    fn gender_parse_is_case_insensitive() {
        assert_eq!(Gender::parse("Female"), Gender::Female);
        assert_eq!(Gender::parse("f"), Gender::Female);
        assert_eq!(Gender::parse("MALE"), Gender::Male);
        assert_eq!(Gender::parse("nonbinary"), Gender::Unspecified);
    }

    #[test]
    fn short_surname_pads_with_nines() {
        let mut id = smith();
        id.surname = "Ng".into();
        let code = encode(&id).unwrap();
        assert!(code.stored().starts_with("NG999"));
    }

    #[test]
    fn surname_strips_non_letters() {
        let mut id = smith();
        id.surname = "O'Brien-Smith".into();
        let code = encode(&id).unwrap();
        assert!(code.stored().starts_with("OBRIE"));
    }

    #[test]
    fn pre_four_digit_birth_year_cannot_encode() {
        let mut id = smith();
        id.date_of_birth = NaiveDate::from_ymd_opt(987, 7, 15).unwrap();
        assert_eq!(encode(&id), Err(CodecError::UnsupportedBirthYear(987)));
    }

    #[test]
    fn letterless_surname_cannot_encode() {
        let mut id = smith();
        id.surname = "123".into();
        assert_eq!(encode(&id), Err(CodecError::UnusableSurname));
    }

    #[test]
    fn empty_first_name_uses_nine_initial() {
        let mut id = smith();
        id.first_name = String::new();
        let code = encode(&id).unwrap();
        assert_eq!(code.stored().chars().nth(11), Some('9'));
    }

    #[test]
    fn known_middle_name_seeds_the_open_segment() {
        let mut id = smith();
        id.middle_name = Some("Mary".into());
        let code = encode(&id).unwrap();
        assert_eq!(code.stored().chars().nth(12), Some('M'));
        // security digits still unsupplied
        assert_eq!(code.status(), CodeStatus::Incomplete);
    }

    // --- open segments ------------------------------------------------------

    #[test]
    fn fresh_code_is_incomplete_with_placeholders() {
        let code = encode(&smith()).unwrap();
        assert_eq!(code.status(), CodeStatus::Incomplete);
        assert!(code.stored().ends_with("9000"));
    }

    #[test]
    fn explicit_nine_means_no_middle_name_and_completes() {
        let mut code = encode(&smith()).unwrap();
        code.set_middle_initial('9').unwrap();
        code.set_security_digits("123").unwrap();
        assert_eq!(code.status(), CodeStatus::Complete);
        assert_eq!(code.stored().chars().nth(12), Some('9'));
    }

    #[test]
    fn lowercase_middle_initial_is_uppercased() {
        let mut code = encode(&smith()).unwrap();
        code.set_middle_initial('m').unwrap();
        assert_eq!(code.stored().chars().nth(12), Some('M'));
    }

    #[test]
    fn bad_middle_initial_rejected() {
        let mut code = encode(&smith()).unwrap();
        assert_eq!(
            code.set_middle_initial('4'),
            Err(CodecError::InvalidMiddleInitial('4'))
        );
    }

    #[test]
    fn bad_security_digits_rejected() {
        let mut code = encode(&smith()).unwrap();
        assert!(code.set_security_digits("12").is_err());
        assert!(code.set_security_digits("12a").is_err());
        assert!(code.set_security_digits("1234").is_err());
    }

    // --- display ------------------------------------------------------------

    #[test]
    fn display_groups_5_6_2_3() {
        let mut code = encode(&smith()).unwrap();
        code.set_middle_initial('M').unwrap();
        code.set_security_digits("042").unwrap();
        assert_eq!(code.display(), "SMITH 857157 JM 042");
        // stored value stays unspaced
        assert!(!code.stored().contains(' '));
    }

    // --- raw validation -----------------------------------------------------

    #[test]
    fn validate_distinguishes_all_three_states() {
        assert_eq!(validate_code("SMITH857157JM042"), CodeStatus::Complete);
        assert_eq!(validate_code("SMITH8571"), CodeStatus::Incomplete);
        assert_eq!(validate_code(""), CodeStatus::Incomplete);
        assert_eq!(validate_code("SMITH857157JM04!"), CodeStatus::Invalid);
        assert_eq!(validate_code("smith857157jm042"), CodeStatus::Invalid);
        assert_eq!(validate_code("SMITH857157JM0422"), CodeStatus::Invalid);
    }
}

//! Static spoken-vocabulary tables shared by the grammar generator and the
//! token parser.
//!
//! Everything in this module is immutable data built into the binary: the
//! NATO phonetic alphabet, spoken-digit homophones, ordinal/cardinal day
//! words, month names, and the common top-level-domain list.  Table order is
//! load-bearing for the parsers (first hit wins), so entries must not be
//! re-sorted.

// ---------------------------------------------------------------------------
// NATO phonetic alphabet
// ---------------------------------------------------------------------------

/// The 26 NATO code words, in alphabet order, paired with the letter each
/// one spells.  Words are lowercase because all parsing happens on
/// lowercased input.
pub static NATO_ALPHABET: &[(&str, char)] = &[
    ("alpha", 'a'),
    ("bravo", 'b'),
    ("charlie", 'c'),
    ("delta", 'd'),
    ("echo", 'e'),
    ("foxtrot", 'f'),
    ("golf", 'g'),
    ("hotel", 'h'),
    ("india", 'i'),
    ("juliett", 'j'),
    ("kilo", 'k'),
    ("lima", 'l'),
    ("mike", 'm'),
    ("november", 'n'),
    ("oscar", 'o'),
    ("papa", 'p'),
    ("quebec", 'q'),
    ("romeo", 'r'),
    ("sierra", 's'),
    ("tango", 't'),
    ("uniform", 'u'),
    ("victor", 'v'),
    ("whiskey", 'w'),
    ("xray", 'x'),
    ("yankee", 'y'),
    ("zulu", 'z'),
];

// ---------------------------------------------------------------------------
// Digits
// ---------------------------------------------------------------------------

/// Spoken-digit homophones.  The zero homophones ("zero", "nought", "oh")
/// come first so the digit-context parser resolves "oh" to `0` before
/// anything else gets a look at it.
pub static DIGIT_WORDS: &[(&str, char)] = &[
    ("zero", '0'),
    ("nought", '0'),
    ("oh", '0'),
    ("one", '1'),
    ("two", '2'),
    ("three", '3'),
    ("four", '4'),
    ("five", '5'),
    ("six", '6'),
    ("seven", '7'),
    ("eight", '8'),
    ("nine", '9'),
];

/// Canonical digit words (one per digit), used when emitting grammar
/// alternatives rather than parsing.
pub static DIGIT_CANONICAL: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// The accepted ways of saying a leading zero.
pub static ZERO_WORDS: &[&str] = &["zero", "nought", "oh"];

// ---------------------------------------------------------------------------
// Letter-name homophones
// ---------------------------------------------------------------------------

/// Words a recognizer commonly produces when the speaker names a letter.
/// Only consulted under the letters-first token context, so "oh" can mean
/// the letter `o` there while still meaning the digit `0` elsewhere.
pub static LETTER_NAMES: &[(&str, char)] = &[
    ("ay", 'a'),
    ("bee", 'b'),
    ("sea", 'c'),
    ("see", 'c'),
    ("gee", 'g'),
    ("aitch", 'h'),
    ("jay", 'j'),
    ("kay", 'k'),
    ("em", 'm'),
    ("en", 'n'),
    ("oh", 'o'),
    ("cue", 'q'),
    ("queue", 'q'),
    ("are", 'r'),
    ("tee", 't'),
    ("you", 'u'),
    ("vee", 'v'),
    ("double u", 'w'),
    ("ex", 'x'),
    ("why", 'y'),
    ("zed", 'z'),
];

// ---------------------------------------------------------------------------
// Days
// ---------------------------------------------------------------------------

/// Ordinal day words, index 0 = day 1.
pub static DAY_ORDINAL_WORDS: &[&str] = &[
    "first",
    "second",
    "third",
    "fourth",
    "fifth",
    "sixth",
    "seventh",
    "eighth",
    "ninth",
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
    "fourteenth",
    "fifteenth",
    "sixteenth",
    "seventeenth",
    "eighteenth",
    "nineteenth",
    "twentieth",
    "twenty first",
    "twenty second",
    "twenty third",
    "twenty fourth",
    "twenty fifth",
    "twenty sixth",
    "twenty seventh",
    "twenty eighth",
    "twenty ninth",
    "thirtieth",
    "thirty first",
];

/// Cardinal day words, index 0 = day 1.  The first twelve double as spoken
/// month numbers.
pub static DAY_CARDINAL_WORDS: &[&str] = &[
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
    "twenty",
    "twenty one",
    "twenty two",
    "twenty three",
    "twenty four",
    "twenty five",
    "twenty six",
    "twenty seven",
    "twenty eight",
    "twenty nine",
    "thirty",
    "thirty one",
];

// ---------------------------------------------------------------------------
// Months
// ---------------------------------------------------------------------------

/// Month names as `(full, abbreviated)`, index 0 = January.
pub static MONTHS: &[(&str, &str)] = &[
    ("january", "jan"),
    ("february", "feb"),
    ("march", "mar"),
    ("april", "apr"),
    ("may", "may"),
    ("june", "jun"),
    ("july", "jul"),
    ("august", "aug"),
    ("september", "sep"),
    ("october", "oct"),
    ("november", "nov"),
    ("december", "dec"),
];

// ---------------------------------------------------------------------------
// Year building blocks
// ---------------------------------------------------------------------------

/// Teen words for spoken two-digit year parts (10–19).
pub static TEEN_WORDS: &[&str] = &[
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Tens words for spoken two-digit year parts (20, 30, … 90).
pub static TENS_WORDS: &[&str] = &[
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

// ---------------------------------------------------------------------------
// Top-level domains
// ---------------------------------------------------------------------------

/// The built-in TLD list every email grammar carries.  Caller-supplied
/// extras are appended after these, duplicates and all.
pub static COMMON_TLDS: &[&str] = &[
    "com", "net", "org", "io", "co.uk", "org.uk", "ac.uk", "gov.uk", "info", "me", "dev",
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Digit character for a spoken digit word, if the word is in the
/// homophone table.
pub fn digit_for_word(word: &str) -> Option<char> {
    DIGIT_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, d)| *d)
}

/// The English ordinal suffix for a day number ("st", "nd", "rd", "th").
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nato_covers_all_26_letters() {
        assert_eq!(NATO_ALPHABET.len(), 26);
        for (i, (_, c)) in NATO_ALPHABET.iter().enumerate() {
            assert_eq!(*c, (b'a' + i as u8) as char);
        }
    }

    #[test]
    fn digit_table_resolves_homophones() {
        assert_eq!(digit_for_word("zero"), Some('0'));
        assert_eq!(digit_for_word("nought"), Some('0'));
        assert_eq!(digit_for_word("oh"), Some('0'));
        assert_eq!(digit_for_word("seven"), Some('7'));
        assert_eq!(digit_for_word("ten"), None);
    }

    #[test]
    fn day_tables_cover_1_to_31() {
        assert_eq!(DAY_ORDINAL_WORDS.len(), 31);
        assert_eq!(DAY_CARDINAL_WORDS.len(), 31);
        assert_eq!(DAY_ORDINAL_WORDS[0], "first");
        assert_eq!(DAY_ORDINAL_WORDS[30], "thirty first");
    }

    #[test]
    fn twelve_months_full_and_abbreviated() {
        assert_eq!(MONTHS.len(), 12);
        assert_eq!(MONTHS[0], ("january", "jan"));
        assert_eq!(MONTHS[8], ("september", "sep"));
    }

    #[test]
    fn ordinal_suffixes() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(31), "st");
    }
}

//! Per-unit classification against the GSM-7 alphabet.

use super::tables::{GSM7_BASIC_RANGES, GSM7_ESCAPE, GSM7_EXTENDED};
use crate::domain::CharClass;

/// Check if a unit falls in one of the basic alphabet ranges.
pub fn is_gsm7_basic(c: u16) -> bool {
    GSM7_BASIC_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// Check if a unit is one of the alphabet members outside the basic ranges.
pub fn is_gsm7_extended(c: u16) -> bool {
    GSM7_EXTENDED.contains(&c)
}

pub fn is_high_surrogate(c: u16) -> bool {
    (0xD800..=0xDBFF).contains(&c)
}

/// Classify a single UTF-16 code unit.
///
/// High surrogates are always `NonGsm7`: a character outside the BMP can
/// never be sent as GSM-7. Low surrogates fall out of every table and end up
/// `NonGsm7` as well.
pub fn classify(c: u16) -> CharClass {
    if is_high_surrogate(c) || !(is_gsm7_basic(c) || is_gsm7_extended(c)) {
        CharClass::NonGsm7
    } else if GSM7_ESCAPE.contains(&c) {
        CharClass::Gsm7Escape
    } else {
        CharClass::Gsm7Basic
    }
}

//! Message normalization and whole-message encoding selection

use crate::domain::{CharClass, Encoding};
use crate::gsm7::classify;

const CARRIAGE_RETURN: u16 = 0x0D;

/// Encode text as the UTF-16 code units the classifier works on.
pub fn to_units(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Strip every carriage return, whether or not a line feed follows it.
pub fn normalize(units: &[u16]) -> Vec<u16> {
    units.iter().copied().filter(|&u| u != CARRIAGE_RETURN).collect()
}

/// Pick the encoding for a normalized message.
///
/// A single unit outside GSM-7 (a high surrogate included) moves the whole
/// message to UTF-16. The opt-out notice is not inspected.
pub fn select_encoding(units: &[u16]) -> Encoding {
    match units.iter().position(|&u| classify(u) == CharClass::NonGsm7) {
        Some(idx) => {
            tracing::debug!("unit {:#06x} at index {} forces UTF-16", units[idx], idx);
            Encoding::Utf16
        }
        None => Encoding::Gsm7,
    }
}

/// Classify each unit of the normalized message.
pub fn classify_units(units: &[u16]) -> Vec<(u16, CharClass)> {
    normalize(units).into_iter().map(|u| (u, classify(u))).collect()
}

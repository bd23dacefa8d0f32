//! Fixed GSM-7 repertoire tables.
//!
//! These tables are a compatibility contract: the exact ranges, the extended
//! set, and its escape subset decide both encoding selection and septet cost.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Inclusive UTF-16 ranges of the basic alphabet handled without a lookup.
pub const GSM7_BASIC_RANGES: &[(u16, u16)] =
    &[(0x20, 0x5A), (0x61, 0x7A), (0xA3, 0xA5), (0xC4, 0xC7), (0xE4, 0xE6)];

/// Remaining alphabet members, including the escape subset below.
pub const GSM7_EXTENDED_CHARS: &[char] = &[
    'è', 'é', 'ù', 'ì', 'ò', '\n', 'Ø', 'ø', '\r', 'Δ', '_', 'Φ', 'Γ', 'Λ', 'Ω', 'Π', 'Ψ', 'Σ',
    'Θ', 'Ξ', '\u{1B}', 'ß', 'É', '¡', 'Ö', 'Ñ', 'Ü', '§', '¿', 'ö', 'ñ', 'ü', 'à', '\u{0C}',
    '^', '{', '}', '\\', '[', '~', ']', '|', '€',
];

/// Characters sent as ESC + septet, costing two septets each.
pub const GSM7_ESCAPE_CHARS: &[char] = &['\u{0C}', '^', '{', '}', '\\', '[', '~', ']', '|', '€'];

pub static GSM7_EXTENDED: Lazy<HashSet<u16>> = Lazy::new(|| to_unit_set(GSM7_EXTENDED_CHARS));

pub static GSM7_ESCAPE: Lazy<HashSet<u16>> = Lazy::new(|| to_unit_set(GSM7_ESCAPE_CHARS));

// Every table entry lives in the BMP, so each char is exactly one unit.
fn to_unit_set(chars: &[char]) -> HashSet<u16> {
    chars
        .iter()
        .flat_map(|c| {
            let mut buf = [0u16; 2];
            c.encode_utf16(&mut buf).to_vec()
        })
        .collect()
}

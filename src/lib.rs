//! sms-segments: count the SMS segments a message will occupy
//!
//! A message is classified unit by unit against the GSM-7 alphabet, a single
//! encoding is chosen for the whole payload, and the weighted units are packed
//! into segments whose capacity shrinks once a concatenation header is needed.
//! The length of the trailing opt-out notice is folded in at the end.

pub mod config;
pub mod domain;
pub mod encoding;
pub mod error;
pub mod gsm7;
pub mod render;
pub mod segment;

pub use domain::{CharClass, Encoding, SegmentBreakdown};
pub use encoding::{classify_units, normalize, select_encoding, to_units};
pub use error::{Result, SegmentError};
pub use gsm7::{classify, is_gsm7_basic, is_gsm7_extended, is_high_surrogate};
pub use segment::{compute_segment_count, compute_segment_count_utf16, count_segments};

//! Core types shared by the classifier, the counter, and the front end.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Class of a single UTF-16 code unit with respect to the GSM-7 alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// Encoded as one septet.
    Gsm7Basic,
    /// Encoded as an escape septet followed by the character septet.
    Gsm7Escape,
    /// Not representable in GSM-7; forces UTF-16 for the whole message.
    NonGsm7,
}

impl CharClass {
    /// Septets this unit occupies in a GSM-7 message.
    pub fn weight(self) -> Option<usize> {
        match self {
            CharClass::Gsm7Basic => Some(1),
            CharClass::Gsm7Escape => Some(2),
            CharClass::NonGsm7 => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CharClass::Gsm7Basic => "gsm7_basic",
            CharClass::Gsm7Escape => "gsm7_escape",
            CharClass::NonGsm7 => "non_gsm7",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoding chosen for an entire message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    Gsm7,
    Utf16,
}

impl Encoding {
    /// Capacity of a message that fits in one segment (no header).
    pub fn single_capacity(self) -> usize {
        match self {
            Encoding::Gsm7 => 160,
            Encoding::Utf16 => 70,
        }
    }

    /// Capacity of each segment of a concatenated message.
    pub fn multi_capacity(self) -> usize {
        match self {
            Encoding::Gsm7 => 153,
            Encoding::Utf16 => 67,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Gsm7 => "gsm7",
            Encoding::Utf16 => "utf16",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full result of packing a message and its opt-out notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentBreakdown {
    pub encoding: Encoding,
    /// Code units after carriage returns are stripped.
    pub message_units: usize,
    /// Sum of unit weights (septets for GSM-7, units for UTF-16).
    pub message_weight: usize,
    /// Segments occupied by the message body alone.
    pub body_segments: usize,
    /// Weight packed into the last body segment.
    pub last_segment_fill: usize,
    pub opt_out_len: usize,
    /// Final count including the opt-out notice.
    pub segments: usize,
}

/// How the CLI prints its results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from config files and the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Length of the opt-out notice in UTF-16 units.
    pub opt_out_len: usize,
    /// Opt-out text; when set its length replaces `opt_out_len`.
    pub opt_out_text: Option<String>,
    pub output: OutputFormat,
}

impl Config {
    /// Opt-out length after `opt_out_text` is taken into account.
    pub fn effective_opt_out_len(&self) -> usize {
        match &self.opt_out_text {
            Some(text) => text.encode_utf16().count(),
            None => self.opt_out_len,
        }
    }
}

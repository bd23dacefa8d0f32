//! GSM-7 alphabet membership and per-unit classification

pub mod classify;
pub mod tables;

pub use classify::{classify, is_gsm7_basic, is_gsm7_extended, is_high_surrogate};

//! Segment counting for a message plus its trailing opt-out notice

use crate::encoding::to_units;
use crate::error::{Result, SegmentError};

pub mod counter;

pub use counter::count_segments;

/// Count the segments `message` occupies once an opt-out notice of
/// `opt_out_link_len` UTF-16 units is appended.
///
/// # Errors
///
/// Returns `SegmentError::InvalidArgument` if `message` is absent or
/// `opt_out_link_len` is negative.
///
/// # Example
///
/// ```rust
/// use sms_segments::compute_segment_count;
///
/// assert_eq!(compute_segment_count(Some(""), 0)?, 1);
/// assert_eq!(compute_segment_count(Some(&"a".repeat(161)), 0)?, 2);
/// # Ok::<(), sms_segments::SegmentError>(())
/// ```
pub fn compute_segment_count(message: Option<&str>, opt_out_link_len: i64) -> Result<usize> {
    let message = message.ok_or_else(|| SegmentError::invalid_argument("message is required"))?;
    compute_segment_count_utf16(Some(to_units(message).as_slice()), opt_out_link_len)
}

/// Same as [`compute_segment_count`] for a message already held as UTF-16
/// code units, so lone surrogates survive unchanged.
pub fn compute_segment_count_utf16(
    message: Option<&[u16]>,
    opt_out_link_len: i64,
) -> Result<usize> {
    let units = message.ok_or_else(|| SegmentError::invalid_argument("message is required"))?;
    let opt_out_len = validate_opt_out_len(opt_out_link_len)?;
    Ok(count_segments(units, opt_out_len).segments)
}

/// Convert a signed opt-out length, rejecting negatives.
pub fn validate_opt_out_len(len: i64) -> Result<usize> {
    usize::try_from(len).map_err(|_| {
        SegmentError::invalid_argument(format!(
            "opt-out link length must be a non-negative integer, got {len}"
        ))
    })
}

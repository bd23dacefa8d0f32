//! Packing weighted units into SMS segments.
//!
//! GSM-7 messages are packed in two phases. The first segment holds 160
//! septets only when the whole body fits in it; as soon as a unit would
//! overflow 160 the message becomes concatenated, every segment carries a
//! header, and the first segment is re-derived against the 153-septet
//! capacity before the rest is packed greedily. A weight-2 escape unit is
//! never split: if it does not fit, the free septet is left as padding.
//!
//! UTF-16 messages need no packing since every unit weighs one.

use crate::domain::{Encoding, SegmentBreakdown};
use crate::encoding::{normalize, select_encoding};
use crate::gsm7::classify;

/// Segments occupied by the message body, before the opt-out notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BodyPacking {
    segments: usize,
    last_fill: usize,
    weight: usize,
}

/// Count the segments a message needs once `opt_out_len` units are appended.
///
/// Carriage returns are stripped before anything else. The opt-out notice is
/// assumed to be weight-1 per unit in whichever encoding the body selects.
pub fn count_segments(units: &[u16], opt_out_len: usize) -> SegmentBreakdown {
    let units = normalize(units);
    let encoding = select_encoding(&units);

    let (body, segments) = match encoding {
        Encoding::Utf16 => {
            let body = pack_utf16(units.len());
            (body, utf16_total(units.len() + opt_out_len))
        }
        Encoding::Gsm7 => {
            let weights: Vec<usize> =
                units.iter().map(|&u| classify(u).weight().unwrap_or(1)).collect();
            let body = pack_gsm7(&weights);
            let total = fold_opt_out(body, opt_out_len);
            (body, total)
        }
    };

    tracing::debug!(
        "{} message of {} units: body {} segment(s), {} with opt-out of {}",
        encoding,
        units.len(),
        body.segments,
        segments,
        opt_out_len
    );

    SegmentBreakdown {
        encoding,
        message_units: units.len(),
        message_weight: body.weight,
        body_segments: body.segments,
        last_segment_fill: body.last_fill,
        opt_out_len,
        segments,
    }
}

fn utf16_total(len: usize) -> usize {
    if len <= Encoding::Utf16.single_capacity() {
        1
    } else {
        len.div_ceil(Encoding::Utf16.multi_capacity())
    }
}

fn pack_utf16(len: usize) -> BodyPacking {
    let segments = utf16_total(len);
    let last_fill = if segments == 1 {
        len
    } else {
        len - (segments - 1) * Encoding::Utf16.multi_capacity()
    };
    BodyPacking { segments, last_fill, weight: len }
}

fn pack_gsm7(weights: &[usize]) -> BodyPacking {
    let single = Encoding::Gsm7.single_capacity();
    let multi = Encoding::Gsm7.multi_capacity();
    let weight: usize = weights.iter().sum();

    // First-segment phase: the body fits without a header.
    let (fits_single, single_fill) = prefix_within(weights, single);
    if fits_single == weights.len() {
        return BodyPacking { segments: 1, last_fill: single_fill, weight };
    }
    tracing::debug!("unit {} overflows a single segment, switching to concatenated", fits_single);

    // Transition: the first segment now carries a header too.
    let (first_len, _) = prefix_within(weights, multi);

    // Subsequent-segment phase.
    let mut segments = 2;
    let mut fill = 0;
    for &w in &weights[first_len..] {
        if fill + w > multi {
            segments += 1;
            fill = w;
        } else {
            fill += w;
        }
    }

    BodyPacking { segments, last_fill: fill, weight }
}

/// Length and weight of the longest prefix whose weight stays within `capacity`.
fn prefix_within(weights: &[usize], capacity: usize) -> (usize, usize) {
    let mut fill = 0;
    for (idx, &w) in weights.iter().enumerate() {
        if fill + w > capacity {
            return (idx, fill);
        }
        fill += w;
    }
    (weights.len(), fill)
}

/// Fold the opt-out notice into the last body segment.
///
/// This is a division-based estimate: the notice never triggers the header
/// re-derivation the body goes through, so a notice that itself spans several
/// concatenated segments can be undercounted.
fn fold_opt_out(body: BodyPacking, opt_out_len: usize) -> usize {
    let capacity = if body.segments == 1 {
        Encoding::Gsm7.single_capacity()
    } else {
        Encoding::Gsm7.multi_capacity()
    };
    let fill = body.last_fill + opt_out_len;
    if fill > capacity {
        body.segments + fill / capacity
    } else {
        body.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::to_units;

    fn count(text: &str, opt_out_len: usize) -> usize {
        count_segments(&to_units(text), opt_out_len).segments
    }

    #[test]
    fn test_single_segment_boundaries() {
        assert_eq!(count("", 0), 1);
        assert_eq!(count(&"a".repeat(154), 0), 1);
        assert_eq!(count(&"a".repeat(160), 0), 1);
        assert_eq!(count(&"a".repeat(161), 0), 2);
    }

    #[test]
    fn test_concatenated_segments_hold_153() {
        assert_eq!(count(&"a".repeat(306), 0), 2);
        assert_eq!(count(&"a".repeat(307), 0), 3);
        assert_eq!(count(&"a".repeat(459), 0), 3);
        assert_eq!(count(&"a".repeat(460), 0), 4);
    }

    #[test]
    fn test_first_segment_rederived_after_overflow() {
        let breakdown = count_segments(&to_units(&"a".repeat(161)), 0);
        assert_eq!(breakdown.encoding, Encoding::Gsm7);
        assert_eq!(breakdown.body_segments, 2);
        assert_eq!(breakdown.last_segment_fill, 8);
        assert_eq!(breakdown.message_weight, 161);
    }

    #[test]
    fn test_escape_characters_cost_two() {
        assert_eq!(count(&"{".repeat(80), 0), 1);
        assert_eq!(count(&"{".repeat(81), 0), 2);
        assert_eq!(count_segments(&to_units("€€"), 0).message_weight, 4);
    }

    #[test]
    fn test_escape_unit_never_split() {
        // 152 + 2 would straddle the 153 boundary, so the brace moves whole
        // into the second segment and one septet of the first is padding.
        let straddle = format!("{}{{{}", "a".repeat(152), "a".repeat(152));
        let breakdown = count_segments(&to_units(&straddle), 0);
        assert_eq!(breakdown.message_weight, 306);
        assert_eq!(breakdown.segments, 3);
        assert_eq!(breakdown.last_segment_fill, 1);

        // Same weight without the straddle packs into two.
        assert_eq!(count(&"a".repeat(306), 0), 2);
    }

    #[test]
    fn test_carriage_returns_are_free() {
        let text = "a\r\n".repeat(80);
        let breakdown = count_segments(&to_units(&text), 0);
        assert_eq!(breakdown.message_units, 160);
        assert_eq!(breakdown.segments, 1);
    }

    #[test]
    fn test_utf16_branch() {
        let seventy = format!("中{}", "a".repeat(69));
        assert_eq!(count(&seventy, 0), 1);
        let seventy_one = format!("中{}", "a".repeat(70));
        assert_eq!(count(&seventy_one, 0), 2);
        assert_eq!(count(&format!("中{}", "a".repeat(133)), 0), 2);
        assert_eq!(count(&format!("中{}", "a".repeat(134)), 0), 3);
    }

    #[test]
    fn test_utf16_counts_opt_out_with_body() {
        let body = format!("中{}", "a".repeat(59));
        assert_eq!(count(&body, 10), 1);
        assert_eq!(count(&body, 11), 2);
    }

    #[test]
    fn test_surrogate_pair_counts_two_units() {
        let text = format!("\u{1F600}{}", "a".repeat(68));
        let breakdown = count_segments(&to_units(&text), 0);
        assert_eq!(breakdown.encoding, Encoding::Utf16);
        assert_eq!(breakdown.message_units, 70);
        assert_eq!(breakdown.segments, 1);
        assert_eq!(count(&format!("{text}a"), 0), 2);
    }

    #[test]
    fn test_opt_out_fold_in() {
        let full = "a".repeat(160);
        assert_eq!(count(&full, 0), 1);
        assert_eq!(count(&full, 1), 2);

        // 100 + 100 > 160 adds floor(200 / 160) = 1.
        assert_eq!(count(&"a".repeat(100), 100), 2);

        // Two body segments, the last holding 8; 8 + 145 fits, 8 + 146 does not.
        let two = "a".repeat(161);
        assert_eq!(count(&two, 145), 2);
        assert_eq!(count(&two, 146), 3);
    }

    #[test]
    fn test_opt_out_estimate_is_not_repacked() {
        // The notice spills 320 units past a single segment yet only
        // floor(320 / 160) = 2 segments are added.
        assert_eq!(count("", 320), 3);
    }

    #[test]
    fn test_monotonic_in_length_and_opt_out() {
        let mut prev = 0;
        for len in 0..=700 {
            let n = count(&"a".repeat(len), 0);
            assert!(n >= prev, "count dropped at length {len}");
            prev = n;
        }

        let body = "a".repeat(150);
        let mut prev = 0;
        for opt_out in 0..=500 {
            let n = count(&body, opt_out);
            assert!(n >= prev, "count dropped at opt-out length {opt_out}");
            prev = n;
        }
    }

    #[test]
    fn test_segment_count_never_zero() {
        for text in ["", "\r", "\r\r\r"] {
            assert_eq!(count(text, 0), 1);
        }
    }
}

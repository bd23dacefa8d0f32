//! Segment count report

use crate::domain::SegmentBreakdown;
use anyhow::Result;

/// Human-readable summary of a segment count.
pub fn render_report(breakdown: &SegmentBreakdown) -> String {
    let mut out = String::new();
    out.push_str(&format!("Segments: {}\n", breakdown.segments));
    out.push_str(&format!("Encoding: {}\n", breakdown.encoding));
    out.push_str(&format!("Message units: {}\n", breakdown.message_units));
    out.push_str(&format!("Message weight: {}\n", breakdown.message_weight));
    out.push_str(&format!(
        "Body segments: {} (last holds {})\n",
        breakdown.body_segments, breakdown.last_segment_fill
    ));
    out.push_str(&format!("Opt-out length: {}\n", breakdown.opt_out_len));
    out
}

pub fn render_report_json(breakdown: &SegmentBreakdown) -> Result<String> {
    Ok(serde_json::to_string_pretty(breakdown)?)
}

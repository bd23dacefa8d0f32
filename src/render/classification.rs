//! Per-unit classification listing

use crate::domain::{CharClass, Encoding};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct UnitEntry {
    index: usize,
    unit: String,
    display: String,
    class: CharClass,
    weight: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ClassificationDoc {
    encoding: Encoding,
    units: Vec<UnitEntry>,
}

fn entries(units: &[(u16, CharClass)]) -> Vec<UnitEntry> {
    units
        .iter()
        .enumerate()
        .map(|(index, &(unit, class))| UnitEntry {
            index,
            unit: format!("U+{unit:04X}"),
            display: display_unit(unit),
            class,
            weight: class.weight(),
        })
        .collect()
}

/// Printable form of a unit; control characters and surrogate halves are
/// shown by name or left blank.
fn display_unit(unit: u16) -> String {
    match unit {
        0x0A => "\\n".to_string(),
        0x0C => "\\f".to_string(),
        0x1B => "ESC".to_string(),
        _ => match char::from_u32(u32::from(unit)) {
            Some(c) if !c.is_control() => c.to_string(),
            _ => String::new(),
        },
    }
}

/// Tab-separated listing: index, code unit, glyph, class, weight.
pub fn render_classification(encoding: Encoding, units: &[(u16, CharClass)]) -> String {
    let mut out = format!("Encoding: {encoding}\n");
    for entry in entries(units) {
        let weight = entry.weight.map(|w| w.to_string()).unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            entry.index, entry.unit, entry.display, entry.class, weight
        ));
    }
    out
}

pub fn render_classification_json(
    encoding: Encoding,
    units: &[(u16, CharClass)],
) -> Result<String> {
    let doc = ClassificationDoc { encoding, units: entries(units) };
    Ok(serde_json::to_string_pretty(&doc)?)
}

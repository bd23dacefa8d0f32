//! Shared CLI utilities.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Resolve the message text from the positional argument, a file, or stdin,
/// in that order.
///
/// File and stdin input lose one trailing line ending (`\n` or `\r\n`), the
/// one editors and shells append. The positional argument is taken verbatim.
pub fn read_message(message: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(message) = message {
        return Ok(message);
    }

    let mut buf = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed reading message file: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed reading message from stdin")?;
            buf
        }
    };
    strip_final_line_ending(&mut buf);
    Ok(buf)
}

fn strip_final_line_ending(buf: &mut String) {
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
}

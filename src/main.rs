//! sms-segments: count the SMS segments a message will occupy
//!
//! Reads a message, appends the length of the opt-out notice, and reports how
//! many concatenated segments the carrier will bill for.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}

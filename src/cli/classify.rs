//! Classify command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::read_message;
use sms_segments::render::{render_classification, render_classification_json};
use sms_segments::{classify_units, normalize, select_encoding, to_units};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Message text (read from --file or stdin when omitted)
    #[arg(value_name = "MESSAGE", conflicts_with = "file")]
    pub message: Option<String>,

    /// Read the message from a file (one trailing line ending is dropped, as for stdin)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ClassifyArgs) -> Result<()> {
    let message = read_message(args.message, args.file.as_deref())?;
    let units = to_units(&message);
    let encoding = select_encoding(&normalize(&units));
    let classes = classify_units(&units);

    if args.json {
        println!("{}", render_classification_json(encoding, &classes)?);
    } else {
        print!("{}", render_classification(encoding, &classes));
    }
    Ok(())
}

//! Count command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::read_message;
use sms_segments::config::load_config;
use sms_segments::domain::OutputFormat;
use sms_segments::render::{render_report, render_report_json};
use sms_segments::segment::validate_opt_out_len;
use sms_segments::{count_segments, to_units};

#[derive(Args)]
pub struct CountArgs {
    /// Message text (read from --file or stdin when omitted)
    #[arg(value_name = "MESSAGE", conflicts_with = "file")]
    pub message: Option<String>,

    /// Read the message from a file (one trailing line ending is dropped, as for stdin)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Length of the opt-out notice in UTF-16 units
    #[arg(short = 'l', long, value_name = "UNITS", allow_negative_numbers = true)]
    pub opt_out_len: Option<i64>,

    /// Opt-out notice text; its UTF-16 length is used
    #[arg(short = 't', long, value_name = "TEXT", conflicts_with = "opt_out_len")]
    pub opt_out_text: Option<String>,

    /// Config file (defaults to sms-segments.toml/.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the full breakdown as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the full breakdown instead of just the count
    #[arg(long, conflicts_with = "json")]
    pub details: bool,
}

pub fn run(args: CountArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(&cwd, args.config.as_deref())?;

    let opt_out_len = match (args.opt_out_len, &args.opt_out_text) {
        (Some(len), _) => validate_opt_out_len(len)?,
        (None, Some(text)) => text.encode_utf16().count(),
        (None, None) => config.effective_opt_out_len(),
    };

    let message = read_message(args.message, args.file.as_deref())?;
    let breakdown = count_segments(&to_units(&message), opt_out_len);

    if args.json || config.output == OutputFormat::Json {
        println!("{}", render_report_json(&breakdown)?);
    } else if args.details {
        print!("{}", render_report(&breakdown));
    } else {
        println!("{}", breakdown.segments);
    }

    Ok(())
}

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::schedule::DEFAULT_PREVIEW_DATES;

#[derive(Parser)]
#[command()]
pub struct UpcomingOptions {
    /// Anchor date for the preview; defaults to today
    #[arg(short = 'f', long = "from")]
    pub from: Option<NaiveDate>,

    /// How many occurrences to preview per transaction
    #[arg(short = 'n', long = "number", default_value_t = DEFAULT_PREVIEW_DATES)]
    pub number: u32,

    #[arg(short = 'V', long)]
    pub vault: Option<PathBuf>,
}

// src/cli.rs
use std::{io, num::NonZeroUsize, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::Result;

use crate::{
    config::{
        consts::{APP_TITLE, DEFAULT_BASE_URL},
        options::{FailurePolicy, SearchOptions},
    },
    core::net::HttpFetcher,
    log::{self, LogSink},
    present::{BrowserOpener, PlainPresenter, Presenter},
    scrape,
    tui::TuiPresenter,
};

/// Search rutor and pick a torrent from a terminal list.
#[derive(Debug, Parser)]
#[command(name = "rutor_scrape", version, about)]
pub struct Args {
    /// Phrase to search for
    #[arg(short, long, value_name = "PHRASE")]
    pub search: String,

    /// Site root to search (for mirrors)
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Extraction threads [default: available cores]
    #[arg(short = 'j', long, value_name = "N")]
    pub workers: Option<NonZeroUsize>,

    /// Report and skip rows with an unknown layout instead of failing the search
    #[arg(long)]
    pub skip_invalid: bool,

    /// Print results to stdout, one per line, instead of opening the list
    #[arg(long)]
    pub plain: bool,

    /// Append log output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn options(&self) -> SearchOptions {
        let policy = if self.skip_invalid { FailurePolicy::SkipInvalid } else { FailurePolicy::FailFast };
        let opts = SearchOptions::new(self.search.as_str())
            .with_base_url(self.base_url.as_str())
            .with_policy(policy);
        match self.workers {
            Some(n) => opts.with_workers(n),
            None => opts,
        }
    }

    fn log_sink(&self) -> LogSink<'_> {
        match (&self.log_file, self.plain) {
            (Some(path), _) => LogSink::File(path),
            (None, true) => LogSink::Stderr,
            (None, false) => LogSink::Off,
        }
    }
}

pub fn run(args: Args) -> Result<()> {
    log::init(args.log_sink())?;

    let opts = args.options();
    let opener = BrowserOpener::new(&opts.base_url)?;
    let fetcher = HttpFetcher::new()?;

    // Any fetch/extract failure ends here, before the list takes the terminal.
    let batch = scrape::search(&fetcher, &opts, None)?;

    if args.plain {
        if batch.records.is_empty() {
            eprintln!("No results for {:?}", opts.query);
        }
        if !batch.skipped.is_empty() {
            eprintln!("Skipped {} malformed row(s)", batch.skipped.len());
        }
        PlainPresenter::new(io::stdout().lock()).present(APP_TITLE, &batch.records, &opener)?;
        return Ok(());
    }

    let mut tui = TuiPresenter::default();
    if !batch.skipped.is_empty() {
        tui = tui.with_notice(format!("Skipped {} malformed row(s)", batch.skipped.len()));
    }
    tui.present(APP_TITLE, &batch.records, &opener)?;
    Ok(())
}

// src/scrape.rs
use std::{
    num::NonZeroUsize,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        mpsc,
    },
    thread,
};

use scraper::{ElementRef, Html};
use tracing::{debug, error, info, warn};

use crate::{
    config::options::{FailurePolicy, SearchOptions},
    core::net::{self, PageFetcher},
    data::TorrentRecord,
    error::{RowError, SearchError},
    progress::Progress,
    specs::search_page::{self, RawRow},
};

/// Records pulled from one page. Order follows worker completion, not the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Batch {
    pub records: Vec<TorrentRecord>,
    /// Only ever non-empty under [`FailurePolicy::SkipInvalid`]; sorted by row index.
    pub skipped: Vec<RowError>,
}

/// Top level: build the URL, fetch once, extract. Blocks until done.
pub fn search(
    fetcher: &dyn PageFetcher,
    opts: &SearchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Batch, SearchError> {
    let url = net::search_url(&opts.base_url, &opts.query);
    info!(query = %opts.query, %url, "search");

    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching results…");
    }
    let page = match fetcher.fetch(&url) {
        Ok(page) => page,
        Err(e) => {
            error!(error = %e, "fetch failed");
            if let Some(p) = progress.as_deref_mut() {
                p.finish();
            }
            return Err(e.into());
        }
    };

    let batch = extract_page(&page, opts.workers, opts.policy, progress)?;
    info!(records = batch.records.len(), skipped = batch.skipped.len(), "search done");
    Ok(batch)
}

/// Parse a whole document and extract every result row in it.
pub fn extract_page(
    page: &str,
    workers: NonZeroUsize,
    policy: FailurePolicy,
    progress: Option<&mut dyn Progress>,
) -> Result<Batch, RowError> {
    let doc = Html::parse_document(page);
    let rows: Vec<ElementRef<'_>> = search_page::select_rows(&doc).collect();
    debug!(rows = rows.len(), "rows selected");
    extract_rows(&rows, workers, policy, progress)
}

/// Fail-fast extraction: every row becomes a record, or nothing is returned.
pub fn extract_all(
    rows: &[ElementRef<'_>],
    workers: NonZeroUsize,
) -> Result<Vec<TorrentRecord>, RowError> {
    extract_rows(rows, workers, FailurePolicy::FailFast, None).map(|batch| batch.records)
}

/// Fan `rows` out over a pool of `workers` threads and join.
///
/// Rows are captured into owned [`RawRow`]s on the calling thread first; only
/// those copies reach the workers.
///
/// Under [`FailurePolicy::FailFast`] the first failing row stops the pool from
/// taking new rows and the lowest-indexed failure seen is returned. Under
/// [`FailurePolicy::SkipInvalid`] every row is attempted.
pub fn extract_rows(
    rows: &[ElementRef<'_>],
    workers: NonZeroUsize,
    policy: FailurePolicy,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Batch, RowError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(rows.len());
    }

    let raw: Vec<RawRow> = rows.iter().map(|&row| RawRow::capture(row)).collect();
    let outcomes = fan_out(&raw, workers, policy, search_page::map_row, |i| {
        if let Some(p) = progress.as_deref_mut() {
            p.row_done(i);
        }
    });

    let mut batch = Batch { records: Vec::with_capacity(outcomes.len()), skipped: Vec::new() };
    let mut abort: Option<RowError> = None;

    for (index, outcome) in outcomes {
        match outcome {
            Ok(record) => batch.records.push(record),
            Err(source) => {
                let err = RowError { index, source };
                match policy {
                    FailurePolicy::FailFast => {
                        if abort.as_ref().is_none_or(|seen| err.index < seen.index) {
                            abort = Some(err);
                        }
                    }
                    FailurePolicy::SkipInvalid => {
                        warn!(%err, "skipping row");
                        batch.skipped.push(err);
                    }
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    if let Some(err) = abort {
        error!(%err, "extraction aborted");
        return Err(err);
    }
    batch.skipped.sort_by_key(|e| e.index);
    Ok(batch)
}

/// Run `work` over `items` on up to `workers` scoped threads and collect
/// `(index, result)` pairs in completion order.
///
/// Workers pull indices from a shared cursor. Under
/// [`FailurePolicy::FailFast`] the first `Err` stops them from taking more.
/// `on_done` is called once per finished item, always on the calling thread.
pub fn fan_out<T, R, E, F>(
    items: &[T],
    workers: NonZeroUsize,
    policy: FailurePolicy,
    work: F,
    mut on_done: impl FnMut(usize),
) -> Vec<(usize, Result<R, E>)>
where
    T: Sync,
    R: Send,
    E: Send,
    F: Fn(&T) -> Result<R, E> + Sync,
{
    let workers = workers.get().min(items.len()).max(1);
    let cursor = AtomicUsize::new(0);
    let stop = AtomicBool::new(false);
    let (tx, rx) = mpsc::channel::<(usize, Result<R, E>)>();

    thread::scope(|s| {
        for _ in 0..workers {
            let tx = tx.clone();
            let (cursor, stop, work) = (&cursor, &stop, &work);
            s.spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    let i = cursor.fetch_add(1, Ordering::Relaxed);
                    let Some(item) = items.get(i) else { break };

                    let outcome = work(item);
                    if outcome.is_err() && policy == FailurePolicy::FailFast {
                        stop.store(true, Ordering::Relaxed);
                    }
                    if tx.send((i, outcome)).is_err() {
                        break;
                    }
                }
            });
        }
        // Only worker clones remain; the loop below ends once they all exit.
        drop(tx);

        // Drained on the calling thread, so `on_done` (and any `Progress`
        // behind it) never runs on a worker.
        let mut outcomes = Vec::with_capacity(items.len());
        for (i, outcome) in rx {
            on_done(i);
            outcomes.push((i, outcome));
        }
        outcomes
    })
}

// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    thread,
};

use eframe::egui;
use tracing::{error, info};

use crate::{
    config::{
        consts::{APP_TITLE, DEFAULT_BASE_URL},
        options::SearchOptions,
    },
    core::net::HttpFetcher,
    data::TorrentRecord,
    present::{BrowserOpener, LinkOpener},
    scrape::{self, Batch},
};

use super::{components, progress::GuiProgress};

type SearchSlot = Arc<Mutex<Option<Result<Batch, String>>>>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let opener = BrowserOpener::new(DEFAULT_BASE_URL)?;
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(opener)))),
    )?;
    Ok(())
}

pub struct App {
    pub query: String,
    pub records: Vec<TorrentRecord>,

    // status/progress (search thread writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    opener: BrowserOpener,
    pending: SearchSlot,
}

impl App {
    pub fn new(opener: BrowserOpener) -> Self {
        Self {
            query: String::new(),
            records: Vec::new(),
            status: Arc::new(Mutex::new("Idle".into())),
            running: false,
            opener,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    pub fn status(&self, msg: impl Into<String>) {
        if let Ok(mut status) = self.status.lock() {
            *status = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Kick off a search on a background thread; results land in `pending`.
    pub fn start_search(&mut self, ctx: &egui::Context) {
        let query = self.query.trim().to_string();
        if self.running || query.is_empty() {
            return;
        }
        self.running = true;
        self.records.clear();
        info!(%query, "gui search");

        let opts = SearchOptions::new(query);
        let status = self.status.clone();
        let slot = self.pending.clone();
        let ctx = ctx.clone();

        thread::spawn(move || {
            let mut progress = GuiProgress::new(status);
            let result = HttpFetcher::new()
                .map_err(|e| e.to_string())
                .and_then(|fetcher| {
                    scrape::search(&fetcher, &opts, Some(&mut progress)).map_err(|e| e.to_string())
                });
            if let Ok(mut slot) = slot.lock() {
                *slot = Some(result);
            }
            ctx.request_repaint();
        });
    }

    fn poll_search(&mut self) {
        let done = self.pending.lock().ok().and_then(|mut slot| slot.take());
        let Some(result) = done else { return };
        self.running = false;

        match result {
            Ok(batch) => {
                let msg = match (batch.records.len(), batch.skipped.len()) {
                    (0, _) => "No results".to_string(),
                    (n, 0) => format!("Ready: {n} results"),
                    (n, skipped) => format!("Ready: {n} results ({skipped} rows skipped)"),
                };
                self.records = batch.records;
                self.status(msg);
            }
            Err(e) => {
                error!(error = %e, "gui search failed");
                self.status(format!("Error: {e}"));
            }
        }
    }

    pub fn open(&self, record: &TorrentRecord) {
        match self.opener.open_link(record.detail_uri()) {
            Ok(()) => self.status(format!("Opened {}", record.detail_uri())),
            Err(e) => self.status(format!("Error: {e}")),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_search();

        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            components::search_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::results_table::draw(ui, self);
        });
    }
}

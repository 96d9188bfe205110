// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Mirrors search progress into the status label. Lives on the search thread.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut status) = self.status.lock() {
            *status = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Extracting {total} rows…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn row_done(&mut self, _index: usize) {
        self.done += 1;
        self.set_status(format!("Extracted {}/{}", self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status("Search complete");
        } else {
            self.set_status(format!("Search complete ({}/{})", self.done, self.total));
        }
    }
}

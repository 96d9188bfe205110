// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use rutor_scrape::{gui, log::{self, LogSink}};

fn main() {
    if let Err(e) = log::init(LogSink::Stderr) {
        eprintln!("Logging disabled: {e}");
    }
    if let Err(e) = gui::run(eframe::NativeOptions::default()) {
        eprintln!("GUI failed: {e}");
        std::process::exit(1);
    }
}

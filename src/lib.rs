// src/lib.rs
//! Search the rutor torrent index and pick a result from a list.
//!
//! ```text
//! query → core::net (GET) → specs::search_page (select + map rows)
//!       → scrape (worker pool, join) → Vec<TorrentRecord> → present / tui / gui
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod log;
pub mod present;
pub mod progress;
pub mod scrape;
pub mod specs;
pub mod tui;

#[cfg(feature = "gui")]
pub mod gui;

pub use data::TorrentRecord;
pub use error::{ExtractError, FetchError, OpenError, PresentError, RowError, SearchError};

// src/log.rs
use std::{fs, io, path::Path, sync::Mutex};

use tracing_subscriber::{EnvFilter, fmt::time::uptime};

use crate::config::consts::DEFAULT_LOG_FILTER;

/// Where log lines go. The terminal list owns the screen, so it gets either
/// a file or nothing.
#[derive(Clone, Copy, Debug)]
pub enum LogSink<'a> {
    File(&'a Path),
    Stderr,
    Off,
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
/// A second call is a no-op.
pub fn init(sink: LogSink<'_>) -> io::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_timer(uptime());

    // try_init only fails when a subscriber is already installed
    match sink {
        LogSink::Off => {}
        LogSink::Stderr => {
            let _ = builder.with_writer(io::stderr).try_init();
        }
        LogSink::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = fs::OpenOptions::new().create(true).append(true).open(path)?;
            let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
        }
    }
    Ok(())
}

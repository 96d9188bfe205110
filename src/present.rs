// src/present.rs
//! Outward capabilities the search calls into once it has records:
//! showing them ([`Presenter`]) and acting on a chosen one ([`LinkOpener`]).

use std::io::Write;

use reqwest::Url;
use tracing::info;

use crate::data::TorrentRecord;
use crate::error::{OpenError, PresentError};

pub trait LinkOpener {
    fn open_link(&self, uri: &str) -> Result<(), OpenError>;
}

pub trait Presenter {
    fn present(
        &mut self,
        title: &str,
        records: &[TorrentRecord],
        opener: &dyn LinkOpener,
    ) -> Result<(), PresentError>;
}

/// Opens links in the system browser. Relative links (`/torrent/1`) are
/// resolved against the site they were scraped from; absolute and `magnet:`
/// links pass through untouched.
pub struct BrowserOpener {
    base: Url,
}

impl BrowserOpener {
    pub fn new(base_url: &str) -> Result<Self, OpenError> {
        let base = Url::parse(base_url).map_err(|e| OpenError::Resolve {
            uri: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { base })
    }

    pub fn resolve(&self, uri: &str) -> Result<Url, OpenError> {
        self.base.join(uri).map_err(|e| OpenError::Resolve {
            uri: uri.to_string(),
            reason: e.to_string(),
        })
    }
}

impl LinkOpener for BrowserOpener {
    fn open_link(&self, uri: &str) -> Result<(), OpenError> {
        let url = self.resolve(uri)?;
        info!(%url, "opening");
        open::that(url.as_str())?;
        Ok(())
    }
}

/// One record per line, `date || title || size || seeders || leechers`.
/// Non-interactive; the opener is never used.
pub struct PlainPresenter<W: Write> {
    out: W,
}

impl<W: Write> PlainPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for PlainPresenter<W> {
    fn present(
        &mut self,
        _title: &str,
        records: &[TorrentRecord],
        _opener: &dyn LinkOpener,
    ) -> Result<(), PresentError> {
        for record in records {
            writeln!(self.out, "{record}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

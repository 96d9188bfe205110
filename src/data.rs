// src/data.rs
use std::fmt;

use crate::core::sanitize::is_blank;
use crate::error::ExtractError;

/// One search hit. All values are display text exactly as the site shows them
/// (modulo whitespace); nothing is parsed into numbers or dates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TorrentRecord {
    published_date: String,
    detail_uri: String,
    title: String,
    size_text: String,
    seeder_count: String,
    leecher_count: String,
}

impl TorrentRecord {
    /// Fails with [`ExtractError::EmptyField`] on the first blank value.
    pub fn new(
        published_date: impl Into<String>,
        detail_uri: impl Into<String>,
        title: impl Into<String>,
        size_text: impl Into<String>,
        seeder_count: impl Into<String>,
        leecher_count: impl Into<String>,
    ) -> Result<Self, ExtractError> {
        let record = Self {
            published_date: published_date.into(),
            detail_uri: detail_uri.into(),
            title: title.into(),
            size_text: size_text.into(),
            seeder_count: seeder_count.into(),
            leecher_count: leecher_count.into(),
        };
        if let Some(field) = record.first_blank_field() {
            return Err(ExtractError::EmptyField { field });
        }
        Ok(record)
    }

    fn first_blank_field(&self) -> Option<&'static str> {
        [
            ("published_date", &self.published_date),
            ("detail_uri", &self.detail_uri),
            ("title", &self.title),
            ("size_text", &self.size_text),
            ("seeder_count", &self.seeder_count),
            ("leecher_count", &self.leecher_count),
        ]
        .into_iter()
        .find(|(_, value)| is_blank(value))
        .map(|(name, _)| name)
    }

    pub fn published_date(&self) -> &str { &self.published_date }
    pub fn detail_uri(&self) -> &str { &self.detail_uri }
    pub fn title(&self) -> &str { &self.title }
    pub fn size_text(&self) -> &str { &self.size_text }
    pub fn seeder_count(&self) -> &str { &self.seeder_count }
    pub fn leecher_count(&self) -> &str { &self.leecher_count }
}

impl fmt::Display for TorrentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} || {} || {} || {} || {}",
            self.published_date, self.title, self.size_text, self.seeder_count, self.leecher_count
        )
    }
}

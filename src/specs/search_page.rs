// src/specs/search_page.rs
//! Reader for the search-results page (`/search/...`).
//!
//! A result row, with the optional comments column in brackets:
//! ```text
//! <tr class="gai|tum">
//!   <td>DATE</td>
//!   <td><a>.torrent</a><a href="DETAIL">magnet</a><a href="/torrent/..">TITLE</a></td>
//!   [<td>comments</td>]
//!   <td>SIZE</td>
//!   <td><span>SEEDERS</span><span>LEECHERS</span></td>
//! </tr>
//! ```
//! The markup has no field names, so fields are read by position. Which
//! positions depends on the cell count; see [`RowLayout`].
//!
//! Parsed trees are not thread-safe, so a row is first copied into a
//! [`RawRow`] on the thread that parsed the page; [`map_row`] works on that copy.

use scraper::{ElementRef, Html};
use tracing::trace;

use crate::config::consts::ROW_MARKERS;
use crate::core::html::{child_elements, first_class, raw_text};
use crate::core::sanitize::normalize_ws;
use crate::data::TorrentRecord;
use crate::error::ExtractError;

// Fixed in every layout.
const DATE_CELL: usize = 0;
const NAME_CELL: usize = 1;
const DETAIL_LINK: usize = 1;
const TITLE_LINK: usize = 2;
const SEEDERS_SPAN: usize = 0;
const LEECHERS_SPAN: usize = 1;

/// Recognized row shapes, keyed by the number of direct `<td>` children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowLayout {
    /// date, name, size, peers
    FourCell,
    /// date, name, comments, size, peers
    FiveCell,
}

/// Cell positions that move with the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldIndex {
    pub size: usize,
    pub peers: usize,
}

impl RowLayout {
    pub fn detect(cells: usize) -> Result<Self, ExtractError> {
        match cells {
            4 => Ok(Self::FourCell),
            5 => Ok(Self::FiveCell),
            cells => Err(ExtractError::UnrecognizedLayout { cells }),
        }
    }

    pub const fn index(self) -> FieldIndex {
        match self {
            Self::FourCell => FieldIndex { size: 2, peers: 3 },
            Self::FiveCell => FieldIndex { size: 3, peers: 4 },
        }
    }
}

/// `<tr>` whose first class is one of [`ROW_MARKERS`].
pub fn is_torrent_row(el: &ElementRef<'_>) -> bool {
    el.value().name() == "tr"
        && first_class(*el).is_some_and(|class| ROW_MARKERS.contains(&class))
}

/// Every result row in `doc`, at any depth, in document order. Single pass.
pub fn select_rows(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(is_torrent_row)
}

/// A selected row copied out of the parsed tree, one [`RawCell`] per direct
/// `<td>`. Owns its strings, so it can cross threads where
/// [`ElementRef`] cannot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    pub cells: Vec<RawCell>,
}

/// One cell: its full text plus its direct `<a>` and `<span>` children.
/// Text is kept as parsed; whitespace is normalized when the row is mapped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawCell {
    pub text: String,
    pub links: Vec<RawLink>,
    pub spans: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawLink {
    pub href: Option<String>,
    pub text: String,
}

impl RawRow {
    pub fn capture(row: ElementRef<'_>) -> Self {
        let cells = child_elements(row, "td")
            .map(|td| RawCell {
                text: raw_text(td),
                links: child_elements(td, "a")
                    .map(|a| RawLink {
                        href: a.value().attr("href").map(str::to_string),
                        text: raw_text(a),
                    })
                    .collect(),
                spans: child_elements(td, "span").map(raw_text).collect(),
            })
            .collect();
        Self { cells }
    }
}

/// Map one selected row to a record.
pub fn extract_record(row: ElementRef<'_>) -> Result<TorrentRecord, ExtractError> {
    map_row(&RawRow::capture(row))
}

/// Map a captured row to a record. Touches no tree; safe to call from any thread.
pub fn map_row(row: &RawRow) -> Result<TorrentRecord, ExtractError> {
    let cells = &row.cells;
    let at = RowLayout::detect(cells.len())?.index();

    let links = &cells[NAME_CELL].links;
    if links.len() <= TITLE_LINK {
        return Err(ExtractError::MissingLinks { found: links.len() });
    }
    let detail_uri = links[DETAIL_LINK]
        .href
        .as_deref()
        .ok_or(ExtractError::MissingHref)?
        .trim();

    let peers = &cells[at.peers].spans;
    if peers.len() <= LEECHERS_SPAN {
        return Err(ExtractError::MissingCounts { found: peers.len() });
    }

    let record = TorrentRecord::new(
        normalize_ws(&cells[DATE_CELL].text),
        detail_uri,
        normalize_ws(&links[TITLE_LINK].text),
        normalize_ws(&cells[at.size].text),
        normalize_ws(&peers[SEEDERS_SPAN]),
        normalize_ws(&peers[LEECHERS_SPAN]),
    )?;
    trace!(title = record.title(), cells = cells.len(), "row extracted");
    Ok(record)
}

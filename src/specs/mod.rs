// src/specs/mod.rs
//! # Page readers
//!
//! Each module here knows *where the ground truth lives in the HTML* of one
//! page and how to lift it out into typed values.
//!
//! ## What lives here
//! - **Pure tree reading** over an already parsed [`scraper::Html`]; no network.
//! - **Row selection** (which `<tr>` nodes are results and which are chrome).
//! - **Positional field mapping** for markup that has no field names, only a
//!   fixed visual layout.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), fan-out across threads (`scrape`), presentation
//!   (`present`, `tui`, `gui`).
//!
//! ## Typical call chain
//! ```text
//! cli / gui → scrape::search → core::net (GET)
//!                            → specs::search_page::select_rows
//!                            → scrape::extract_rows → RawRow::capture (caller thread)
//!                                                   ──(workers)──► specs::search_page::map_row
//! ```
//!
//! ## Conventions
//! - Look at **direct children** only when mapping cells and links; result pages
//!   nest markup inside cells.
//! - A row either yields a fully populated record or an error. Never a partial one.
//! - Readers are testable offline against saved pages (see `tests/fixtures`).
pub mod search_page;

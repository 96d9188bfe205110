// src/config/consts.rs

// Site
pub const DEFAULT_BASE_URL: &str = "http://rutor.is";
// page 0, every category, default search logic, sort mode 2
pub const SEARCH_PATH: &str = "/search/0/0/000/2/";
pub const USER_AGENT: &str = concat!("rutor_scrape/", env!("CARGO_PKG_VERSION"));

// Result rows alternate between these two classes; anything else is layout chrome.
pub const ROW_MARKERS: [&str; 2] = ["gai", "tum"];

// UI
pub const APP_TITLE: &str = "Rutor Parser";
pub const PAGE_STEP: usize = 10;

// Logging
pub const DEFAULT_LOG_FILTER: &str = "rutor_scrape=info";

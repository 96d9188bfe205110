// src/core/sanitize.rs

/// Collapse whitespace runs into single spaces and trim.
/// `&nbsp;` arrives from the parser as U+00A0 and counts as whitespace here.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

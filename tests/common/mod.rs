// tests/common/mod.rs
//
// Builders for search-result markup shaped like the live site.
#![allow(dead_code)]

use std::num::NonZeroUsize;

pub struct Row<'a> {
    pub marker: &'a str,
    pub date: &'a str,
    pub href: &'a str,
    pub title: &'a str,
    pub size: &'a str,
    pub seeders: &'a str,
    pub leechers: &'a str,
    pub comments: Option<&'a str>,
}

impl<'a> Row<'a> {
    pub fn new(marker: &'a str, title: &'a str) -> Self {
        Self {
            marker,
            date: "01&nbsp;Янв&nbsp;24",
            href: "magnet:?xt=urn:btih:0000",
            title,
            size: "1.50&nbsp;GB",
            seeders: "10",
            leechers: "2",
            comments: None,
        }
    }

    pub fn with_comments(mut self, n: &'a str) -> Self {
        self.comments = Some(n);
        self
    }

    pub fn html(&self) -> String {
        let comments = self
            .comments
            .map(|n| format!(r#"<td align="right">{n}<img src="/i/com.gif" alt="C" /></td>"#))
            .unwrap_or_default();
        format!(
            concat!(
                r#"<tr class="{marker}">"#,
                r#"<td>{date}</td>"#,
                r#"<td><a class="downgif" href="/download/1"><img src="/i/d.gif" alt="D" /></a>"#,
                r#"<a href="{href}"><img src="/i/m.png" alt="M" /></a>"#,
                r#"<a href="/torrent/1/slug">{title}</a></td>"#,
                r#"{comments}"#,
                r#"<td align="right">{size}</td>"#,
                r#"<td align="center"><span class="green"><img src="/t/s/arrowup.gif" alt="S" />&nbsp;{seeders}</span>"#,
                r#"<img src="/t/s/arrowdown.gif" alt="L" /><span class="red">&nbsp;{leechers}</span></td>"#,
                r#"</tr>"#,
            ),
            marker = self.marker,
            date = self.date,
            href = self.href,
            title = self.title,
            comments = comments,
            size = self.size,
            seeders = self.seeders,
            leechers = self.leechers,
        )
    }
}

/// Wrap raw `<tr>` markup in a results table inside a full document.
pub fn page(rows: &[String]) -> String {
    format!(
        concat!(
            "<!DOCTYPE html><html><head><title>rutor</title></head><body>",
            r#"<div id="index"><table width="100%">"#,
            r#"<tr class="backgr"><td>Добавлен</td><td>Название</td><td>Размер</td><td>Пиры</td></tr>"#,
            "{}",
            "</table></div></body></html>",
        ),
        rows.concat()
    )
}

pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path}: {e}"))
}

pub fn workers(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("non-zero worker count")
}

// tests/extract_record.rs
mod common;

use common::Row;
use pretty_assertions::assert_eq;
use rutor_scrape::{
    ExtractError,
    specs::search_page::{FieldIndex, RawRow, RowLayout, extract_record, map_row, select_rows},
};
use scraper::Html;

/// Parse `rows` into a page and extract its first result row.
fn extract_first(rows: &[String]) -> Result<rutor_scrape::TorrentRecord, ExtractError> {
    let doc = Html::parse_document(&common::page(rows));
    let row = select_rows(&doc).next().expect("one result row");
    extract_record(row)
}

#[test]
fn layout_table() {
    assert_eq!(RowLayout::detect(4), Ok(RowLayout::FourCell));
    assert_eq!(RowLayout::detect(5), Ok(RowLayout::FiveCell));
    assert_eq!(RowLayout::FourCell.index(), FieldIndex { size: 2, peers: 3 });
    assert_eq!(RowLayout::FiveCell.index(), FieldIndex { size: 3, peers: 4 });
    for cells in [0, 1, 3, 6, 9] {
        assert_eq!(RowLayout::detect(cells), Err(ExtractError::UnrecognizedLayout { cells }));
    }
}

#[test]
fn four_cells_read_size_from_cell_2() {
    let row = Row {
        href: "/torrent/1",
        date: "2024-01-01",
        size: "1.5 GB",
        ..Row::new("gai", "Sample A")
    };
    let rec = extract_first(&[row.html()]).unwrap();

    assert_eq!(rec.published_date(), "2024-01-01");
    assert_eq!(rec.detail_uri(), "/torrent/1");
    assert_eq!(rec.title(), "Sample A");
    assert_eq!(rec.size_text(), "1.5 GB");
    assert_eq!(rec.seeder_count(), "10");
    assert_eq!(rec.leecher_count(), "2");
}

#[test]
fn five_cells_skip_the_comments_column() {
    let row = Row {
        href: "/torrent/2",
        size: "700 MB",
        seeders: "5",
        leechers: "1",
        ..Row::new("tum", "Sample B")
    }
    .with_comments("12");
    let rec = extract_first(&[row.html()]).unwrap();

    assert_eq!(rec.detail_uri(), "/torrent/2");
    assert_eq!(rec.title(), "Sample B");
    assert_eq!(rec.size_text(), "700 MB");
    assert_eq!(rec.seeder_count(), "5");
    assert_eq!(rec.leecher_count(), "1");
}

#[test]
fn nbsp_and_runs_of_whitespace_collapse() {
    let rec = extract_first(&[Row::new("gai", "Title\n   with   gaps").html()]).unwrap();
    assert_eq!(rec.published_date(), "01 Янв 24");
    assert_eq!(rec.size_text(), "1.50 GB");
    assert_eq!(rec.title(), "Title with gaps");
}

#[test]
fn fixture_rows_map_by_position() {
    let doc = Html::parse_document(&common::fixture("search_page.html"));
    let recs: Vec<_> = select_rows(&doc).map(|r| extract_record(r).unwrap()).collect();

    let lines: Vec<String> = recs.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "16 Окт 26 || Ubuntu 24.04 Desktop amd64 || 5.70 GB || 312 || 14",
            "15 Окт 26 || Debian 12 netinst || 628.00 MB || 88 || 3",
            "14 Окт 26 || Fedora 40 Workstation || 2.10 GB || 57 || 0",
        ]
    );
    assert_eq!(recs[0].detail_uri(), "magnet:?xt=urn:btih:aaaa&dn=rutor.info");
}

#[test]
fn three_cells_is_an_unrecognized_layout() {
    let html = r#"<tr class="gai"><td>d</td><td><a href="a">x</a><a href="b">y</a><a href="c">z</a></td><td>1 GB</td></tr>"#;
    assert_eq!(
        extract_first(&[html.to_string()]),
        Err(ExtractError::UnrecognizedLayout { cells: 3 })
    );
}

#[test]
fn six_cells_is_an_unrecognized_layout() {
    let html = concat!(
        r#"<tr class="tum"><td>d</td><td><a href="a">x</a><a href="b">y</a><a href="c">z</a></td>"#,
        r#"<td>1</td><td>extra</td><td>1 GB</td><td><span>1</span><span>2</span></td></tr>"#,
    );
    assert_eq!(
        extract_first(&[html.to_string()]),
        Err(ExtractError::UnrecognizedLayout { cells: 6 })
    );
}

#[test]
fn name_cell_needs_three_links() {
    let html = concat!(
        r#"<tr class="gai"><td>d</td><td><a href="a">x</a><a href="b">y</a></td>"#,
        r#"<td>1 GB</td><td><span>1</span><span>2</span></td></tr>"#,
    );
    assert_eq!(
        extract_first(&[html.to_string()]),
        Err(ExtractError::MissingLinks { found: 2 })
    );
}

#[test]
fn nested_links_do_not_count() {
    let html = concat!(
        r#"<tr class="gai"><td>d</td><td><a href="a">x</a><div><a href="b">y</a><a href="c">z</a></div></td>"#,
        r#"<td>1 GB</td><td><span>1</span><span>2</span></td></tr>"#,
    );
    assert_eq!(
        extract_first(&[html.to_string()]),
        Err(ExtractError::MissingLinks { found: 1 })
    );
}

#[test]
fn detail_link_needs_href() {
    let html = concat!(
        r#"<tr class="gai"><td>d</td><td><a href="a">x</a><a>y</a><a href="c">z</a></td>"#,
        r#"<td>1 GB</td><td><span>1</span><span>2</span></td></tr>"#,
    );
    assert_eq!(extract_first(&[html.to_string()]), Err(ExtractError::MissingHref));
}

#[test]
fn peers_cell_needs_two_direct_spans() {
    let one = concat!(
        r#"<tr class="gai"><td>d</td><td><a href="a">x</a><a href="b">y</a><a href="c">z</a></td>"#,
        r#"<td>1 GB</td><td><span>1</span></td></tr>"#,
    );
    assert_eq!(
        extract_first(&[one.to_string()]),
        Err(ExtractError::MissingCounts { found: 1 })
    );

    let nested = concat!(
        r#"<tr class="gai"><td>d</td><td><a href="a">x</a><a href="b">y</a><a href="c">z</a></td>"#,
        r#"<td>1 GB</td><td><div><span>1</span><span>2</span></div></td></tr>"#,
    );
    assert_eq!(
        extract_first(&[nested.to_string()]),
        Err(ExtractError::MissingCounts { found: 0 })
    );
}

#[test]
fn blank_fields_reject_the_row() {
    let row = Row { title: "  &nbsp; ", ..Row::new("gai", "") };
    assert_eq!(
        extract_first(&[row.html()]),
        Err(ExtractError::EmptyField { field: "title" })
    );

    let row = Row { leechers: "", ..Row::new("tum", "ok") }.with_comments("1");
    assert_eq!(
        extract_first(&[row.html()]),
        Err(ExtractError::EmptyField { field: "leecher_count" })
    );
}

#[test]
fn capture_keeps_direct_children_and_raw_text() {
    let doc = Html::parse_document(&common::page(&[Row::new("tum", "Captured").with_comments("7").html()]));
    let raw = RawRow::capture(select_rows(&doc).next().expect("one result row"));

    assert_eq!(raw.cells.len(), 5);
    assert_eq!(raw.cells[0].text, "01\u{a0}Янв\u{a0}24");
    assert_eq!(raw.cells[1].links.len(), 3);
    assert_eq!(raw.cells[1].links[1].href.as_deref(), Some("magnet:?xt=urn:btih:0000"));
    assert_eq!(raw.cells[1].links[2].text, "Captured");
    assert_eq!(raw.cells[4].spans, vec!["\u{a0}10", "\u{a0}2"]);

    let rec = map_row(&raw).unwrap();
    assert_eq!(rec.to_string(), "01 Янв 24 || Captured || 1.50 GB || 10 || 2");
}

#[test]
fn captured_row_maps_like_the_live_row() {
    let doc = Html::parse_document(&common::fixture("search_page.html"));
    for row in select_rows(&doc) {
        assert_eq!(map_row(&RawRow::capture(row)), extract_record(row));
    }
}

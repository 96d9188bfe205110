// src/gui/components/results_table.rs
//
// Results as a striped table. Clicking a title opens it through the app's
// link opener. Purely a view otherwise.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const HEADERS: [&str; 5] = ["Date", "Title", "Size", "S", "L"];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.records.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(if app.running { "Searching…" } else { "No results" });
        });
        return;
    }

    let mut clicked: Option<usize> = None;

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::initial(90.0).at_least(60.0).clip(true))
        .column(Column::remainder().at_least(200.0).clip(true))
        .column(Column::initial(80.0).at_least(50.0))
        .column(Column::initial(40.0).at_least(30.0))
        .column(Column::initial(40.0).at_least(30.0))
        .header(22.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.records.len(), |mut row| {
                let i = row.index();
                let Some(record) = app.records.get(i) else { return };

                row.col(|ui| {
                    ui.label(record.published_date());
                });
                row.col(|ui| {
                    if ui.link(record.title()).on_hover_text(record.detail_uri()).clicked() {
                        clicked = Some(i);
                    }
                });
                row.col(|ui| {
                    ui.label(record.size_text());
                });
                row.col(|ui| {
                    ui.label(RichText::new(record.seeder_count()).color(egui::Color32::from_rgb(0x50, 0xC8, 0x50)));
                });
                row.col(|ui| {
                    ui.label(RichText::new(record.leecher_count()).color(egui::Color32::from_rgb(0xDC, 0x61, 0x49)));
                });
            });
        });

    if let Some(record) = clicked.and_then(|i| app.records.get(i)) {
        app.open(record);
    }
}

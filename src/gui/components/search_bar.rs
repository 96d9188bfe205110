// src/gui/components/search_bar.rs
use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.query)
                .hint_text("Search phrase")
                .desired_width(320.0),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let clicked = ui
            .add_enabled(!app.running, egui::Button::new("Search"))
            .clicked();

        if submitted || clicked {
            app.start_search(ui.ctx());
        }

        if app.running {
            ui.spinner();
        }
        ui.label(app.status_text());
    });
}

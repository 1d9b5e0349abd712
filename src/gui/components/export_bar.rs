// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{config::options::ExportFormat, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.label("Export:");
        for fmt in ExportFormat::ALL {
            let btn = ui.button(fmt.label()).on_hover_text(fmt.default_file_name());
            if btn.clicked() {
                actions::export(app, fmt);
            }
        }

        ui.separator();

        let copy_fmt = app.state.options.export.format;
        if ui.button("Copy").on_hover_text(format!("Copy as {}", copy_fmt.label())).clicked() {
            actions::copy(app, ui.ctx());
        }

        ui.separator();

        let export = &mut app.state.options.export;
        let before = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before {
            logf!("UI: Include_headers → {}", export.include_headers);
        }
    });

    ui.horizontal(|ui| {
        ui.label("Output:");
        let hint = app.state.options.export.out_path().to_string_lossy().into_owned();
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        );
    });
}

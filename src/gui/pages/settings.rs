// src/gui/pages/settings.rs
use eframe::egui;

use crate::config::{
    options::{AppOptions, ExportFormat},
    state::{PageKind, SettingsDraft},
};
use crate::gui::{actions, app::App};
use super::Page;

pub struct SettingsPage;
pub static PAGE: SettingsPage = SettingsPage;

impl Page for SettingsPage {
    fn title(&self) -> &'static str { "Settings" }
    fn kind(&self) -> PageKind { PageKind::Settings }

    // Start from what is actually in effect, not a stale draft.
    fn on_enter(&self, app: &mut App, _ctx: &egui::Context) {
        app.draft = SettingsDraft::from_options(&app.state.options);
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.strong("Parser settings");
        ui.add_space(4.0);
        draw_scraper(ui, &mut app.draft);

        ui.add_space(10.0);
        ui.strong("History");
        ui.add_space(4.0);
        draw_history(ui, &mut app.draft);

        ui.add_space(10.0);
        ui.strong("Export");
        ui.add_space(4.0);
        draw_export(ui, &mut app.draft);

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button("Save settings").clicked() {
                actions::save_settings(app, ui.ctx());
            }
            if ui.button("Reset").on_hover_text("Restore default values").clicked() {
                app.draft = SettingsDraft::from_options(&AppOptions::default());
                logd!("UI: Settings draft reset to defaults");
            }
            if app.draft != SettingsDraft::from_options(&app.state.options) {
                ui.weak("Unsaved changes");
            }
        });
    }
}

fn draw_scraper(ui: &mut egui::Ui, draft: &mut SettingsDraft) {
    let s = &mut draft.scraper;
    egui::Grid::new("settings_scraper")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Timeout (ms):");
            ui.add(egui::DragValue::new(&mut s.timeout_ms).range(1..=600_000).speed(100));
            ui.end_row();

            ui.label("Delay between requests (ms):");
            ui.add(egui::DragValue::new(&mut s.delay_ms).range(0..=600_000).speed(100));
            ui.end_row();

            ui.label("User-Agent:");
            ui.add(
                egui::TextEdit::multiline(&mut s.user_agent)
                    .desired_rows(2)
                    .desired_width(f32::INFINITY),
            );
            ui.end_row();

            ui.label("Extra headers (JSON):");
            ui.add(
                egui::TextEdit::multiline(&mut s.extra_headers)
                    .code_editor()
                    .hint_text(r#"{"Accept-Language": "en-US"}"#)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            ui.end_row();
        });
}

fn draw_history(ui: &mut egui::Ui, draft: &mut SettingsDraft) {
    ui.horizontal(|ui| {
        ui.radio_value(&mut draft.use_remote, false, "Local store");
        ui.radio_value(&mut draft.use_remote, true, "Remote endpoints");
    });

    ui.add_enabled_ui(draft.use_remote, |ui| {
        egui::Grid::new("settings_history")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("History URL:");
                ui.add(egui::TextEdit::singleline(&mut draft.history_url).desired_width(f32::INFINITY));
                ui.end_row();

                ui.label("Save URL:");
                ui.add(egui::TextEdit::singleline(&mut draft.save_url).desired_width(f32::INFINITY));
                ui.end_row();
            });
    });
}

fn draw_export(ui: &mut egui::Ui, draft: &mut SettingsDraft) {
    egui::Grid::new("settings_export")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Output folder:");
            ui.add(egui::TextEdit::singleline(&mut draft.out_dir).desired_width(f32::INFINITY));
            ui.end_row();

            ui.label("Default format:");
            ui.horizontal(|ui| {
                for fmt in ExportFormat::ALL {
                    ui.selectable_value(&mut draft.format, fmt, fmt.label());
                }
            });
            ui.end_row();
        });
    ui.checkbox(&mut draft.include_headers, "Include headers (CSV/Excel)");
}

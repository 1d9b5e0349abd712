// src/gui/pages/history.rs
use eframe::egui;

use crate::config::state::PageKind;
use crate::gui::{actions, app::App, components};
use super::Page;

pub struct HistoryPage;
pub static PAGE: HistoryPage = HistoryPage;

impl Page for HistoryPage {
    fn title(&self) -> &'static str { "History" }
    fn kind(&self) -> PageKind { PageKind::History }

    fn on_enter(&self, app: &mut App, ctx: &egui::Context) {
        actions::load_history(app, ctx);
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            ui.strong("Parse history");
            ui.weak(caption(app.history.len(), app.backend.name()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let refresh = ui.add_enabled(!app.history_busy, egui::Button::new("Refresh"));
                if refresh.clicked() {
                    actions::load_history(app, ui.ctx());
                }
                if app.history_busy {
                    ui.spinner();
                }
            });
        });
        ui.add_space(6.0);

        if app.history.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.weak(if app.history_busy { "Loading..." } else { "History is empty" });
            });
            return;
        }

        if let Some(task_id) = components::history_table::draw(ui, &app.history, app.selected_task) {
            actions::open_task(app, ui.ctx(), task_id);
        }
    }
}

fn caption(count: usize, backend: &str) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("Last {count} {noun} ({backend} backend)")
}

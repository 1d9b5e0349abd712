// src/gui/components/history_table.rs
//
// Task list. Clicking a row returns its id; the caller decides what to do.

use eframe::egui::{self, Color32, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::data::Task;

const ROW_H: f32 = 22.0;
const HEADERS: [&str; 6] = ["ID", "URL", "Selector", "Status", "Items", "Created"];

pub fn draw(ui: &mut egui::Ui, tasks: &[Task], selected: Option<u64>) -> Option<u64> {
    let mut clicked = None;

    TableBuilder::new(ui)
        .id_salt("history_table")
        .striped(true)
        .resizable(true)
        .sense(egui::Sense::click())
        .max_scroll_height(480.0)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(40.0))
        .column(Column::initial(300.0).at_least(120.0).clip(true))
        .column(Column::initial(140.0).at_least(60.0).clip(true))
        .column(Column::initial(90.0))
        .column(Column::exact(50.0))
        .column(Column::remainder().at_least(140.0))
        .header(ROW_H, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, tasks.len(), |mut row| {
                let Some(task) = tasks.get(row.index()) else { return };
                row.set_selected(selected == Some(task.id));

                row.col(|ui| {
                    ui.label(task.id.to_string());
                });
                row.col(|ui| {
                    ui.add(egui::Label::new(&task.url).wrap_mode(TextWrapMode::Truncate).selectable(false))
                        .on_hover_text(&task.url);
                });
                row.col(|ui| {
                    ui.add(egui::Label::new(RichText::new(&task.selector).monospace())
                        .wrap_mode(TextWrapMode::Truncate)
                        .selectable(false));
                });
                row.col(|ui| {
                    let color = if task.status.is_completed() {
                        Color32::from_rgb(0x2e, 0x9e, 0x44)
                    } else {
                        Color32::from_rgb(0xc8, 0x8a, 0x12)
                    };
                    ui.label(RichText::new(task.status.label()).color(color));
                });
                row.col(|ui| {
                    ui.label(task.total_items.to_string());
                });
                row.col(|ui| {
                    ui.label(task.created_local());
                });

                if row.response().clicked() {
                    clicked = Some(task.id);
                }
            });
        });

    clicked
}

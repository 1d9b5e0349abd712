// src/gui/components/results_table.rs
//
// Read-only view of parsed items: ID / Title / Content / Link.

use eframe::egui::{self, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::data::{ParsedItem, ITEM_HEADERS};

const ROW_H: f32 = 22.0;

pub fn draw(ui: &mut egui::Ui, items: &[ParsedItem]) {
    TableBuilder::new(ui)
        .id_salt("results_table")
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(40.0))
        .column(Column::initial(220.0).at_least(80.0).clip(true))
        .column(Column::remainder().at_least(160.0).clip(true))
        .column(Column::exact(60.0))
        .max_scroll_height(420.0)
        .header(ROW_H, |mut header| {
            for h in ITEM_HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, items.len(), |mut row| {
                let Some(item) = items.get(row.index()) else { return };
                row.col(|ui| {
                    ui.label(item.id.to_string());
                });
                row.col(|ui| {
                    ui.add(egui::Label::new(&item.title).wrap_mode(TextWrapMode::Truncate))
                        .on_hover_text(&item.title);
                });
                row.col(|ui| {
                    ui.add(egui::Label::new(&item.content).wrap_mode(TextWrapMode::Truncate))
                        .on_hover_text(&item.content);
                });
                row.col(|ui| {
                    if item.link.is_empty() {
                        ui.weak("-");
                    } else {
                        ui.hyperlink_to("Open", &item.link).on_hover_text(&item.link);
                    }
                });
            });
        });
}

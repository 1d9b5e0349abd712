// src/gui/actions/copy.rs
use eframe::egui;
use crate::{file, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let export = &app.state.options.export;

    match file::to_export_string(&app.items, export.format, export.include_headers) {
        Ok(txt) => {
            logf!("Copy: rows={} format={:?}", app.items.len(), export.format);
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            logd!("Copy: {e}");
            app.notify_error(e.to_string());
        }
    }
}

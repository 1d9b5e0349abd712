// src/gui/actions/export.rs
use crate::{config::options::ExportFormat, file, gui::app::App};

/// Write the current results in `format` and remember it as the default.
pub fn export(app: &mut App, format: ExportFormat) {
    if app.items.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.notify_error("No data to export");
        return;
    }

    let export = &mut app.state.options.export;
    if export.format != format {
        logf!("UI: Export format → {:?}", format);
        export.format = format;
    }

    let path = export.resolve_path(&app.state.gui.out_path_text);
    logf!("Export: Begin rows={} format={:?} path={}", app.items.len(), format, path.display());

    match file::write_export(&path, export, &app.items) {
        Ok(path) => {
            app.status(format!("Exported {}", path.display()));
            app.notify_success(format!("Data exported to {}: {}", format.label(), path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {e}");
            app.status(format!("Export error: {e}"));
            app.notify_error(format!("Export error: {e}"));
        }
    }
}

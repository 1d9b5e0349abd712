// src/gui/actions/settings.rs
use eframe::egui;

use crate::{
    config::settings,
    gui::app::App,
    history,
};

/// Validate the draft, persist it, and swap the history backend if needed.
/// Nothing on `App` changes unless the file was written.
pub fn save_settings(app: &mut App, ctx: &egui::Context) {
    let opts = match app.draft.to_options(&app.state.options) {
        Ok(o) => o,
        Err(e) => {
            logd!("Settings: Rejected: {e}");
            app.notify_error(e.to_string());
            return;
        }
    };

    let history_changed = opts.history != app.state.options.history
        || opts.scraper.timeout_ms != app.state.options.scraper.timeout_ms;

    let new_backend = if history_changed {
        match history::open_backend(&opts.history, &app.store_dir, opts.scraper.timeout()) {
            Ok(b) => Some(b),
            Err(e) => {
                loge!("Settings: Backend rejected: {e}");
                app.notify_error(e.to_string());
                return;
            }
        }
    } else {
        None
    };

    let path = settings::settings_path(&app.store_dir);
    if let Err(e) = settings::save(&path, &opts) {
        loge!("Settings: Save failed: {e}");
        app.notify_error(format!("Failed to save settings: {e}"));
        return;
    }

    logf!("Settings: Saved → {}", path.display());
    app.state.options = opts;
    app.notify_success("Settings saved");

    if let Some(backend) = new_backend {
        app.swap_backend(backend);
        super::load_history(app, ctx);
    }
}

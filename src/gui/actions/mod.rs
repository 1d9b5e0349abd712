// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Long work runs on a worker thread and reports back as a `JobResult`;
// `apply` folds it into `App` on the UI thread.

mod copy;     // src/gui/actions/copy.rs
mod export;   // src/gui/actions/export.rs
mod history;  // src/gui/actions/history.rs
mod scrape;   // src/gui/actions/scrape.rs
mod settings; // src/gui/actions/settings.rs

pub use copy::copy;
pub use export::export;
pub use history::{load_history, open_task};
pub use scrape::scrape;
pub use settings::save_settings;

use crate::{
    data::{Task, TaskDetail},
    gui::app::App,
    scrape::{ScrapeOutcome, ScrapeRequest},
};

/// Messages from worker threads. Errors are pre-rendered strings.
/// `generation` is `App::backend_gen` at spawn time; results from a
/// replaced backend are dropped.
pub enum JobResult {
    Scraped {
        generation: u64,
        request: ScrapeRequest,
        result: Result<ScrapeOutcome, String>,
        /// Fresh history after the save, if it could be listed.
        history: Option<Vec<Task>>,
    },
    History { generation: u64, result: Result<Vec<Task>, String> },
    Task { generation: u64, result: Result<TaskDetail, String> },
}

pub(crate) fn apply(app: &mut App, job: JobResult) {
    match job {
        JobResult::Scraped { generation, request, result, history } => {
            app.running = false;
            scrape::finish(app, request, result);
            match history {
                Some(tasks) if generation == app.backend_gen => app.history = tasks,
                Some(_) => logd!("History: dropped list from replaced backend"),
                None => {}
            }
        }
        JobResult::History { generation, result } => {
            if generation != app.backend_gen {
                logd!("History: dropped stale list (gen {generation})");
                return;
            }
            app.history_busy = false;
            history::finish_list(app, result);
        }
        JobResult::Task { generation, result } => {
            if generation != app.backend_gen {
                logd!("History: dropped stale task (gen {generation})");
                return;
            }
            app.history_busy = false;
            history::finish_open(app, result);
        }
    }
}

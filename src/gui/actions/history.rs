// src/gui/actions/history.rs
use std::thread;

use eframe::egui;

use crate::{
    config::state::PageKind,
    data::{Task, TaskDetail},
    gui::{actions::JobResult, app::App, router},
};

pub fn load_history(app: &mut App, ctx: &egui::Context) {
    if app.history_busy {
        return;
    }
    app.history_busy = true;

    let backend = app.backend.clone();
    let generation = app.backend_gen;
    let limit = app.state.options.history.limit;
    let tx = app.jobs_tx.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let result = backend.list(limit).map_err(|e| e.to_string());
        let _ = tx.send(JobResult::History { generation, result });
        ctx.request_repaint();
    });
}

pub fn open_task(app: &mut App, ctx: &egui::Context, task_id: u64) {
    if app.history_busy {
        return;
    }
    logf!("History: Open task {task_id}");
    app.history_busy = true;
    app.selected_task = Some(task_id);
    app.status(format!("Loading task #{task_id}..."));

    let backend = app.backend.clone();
    let generation = app.backend_gen;
    let tx = app.jobs_tx.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let result = backend.get(task_id).map_err(|e| e.to_string());
        let _ = tx.send(JobResult::Task { generation, result });
        ctx.request_repaint();
    });
}

pub(super) fn finish_list(app: &mut App, res: Result<Vec<Task>, String>) {
    match res {
        Ok(tasks) => {
            logd!("History: Loaded {} tasks from {}", tasks.len(), app.backend.name());
            app.history = tasks;
        }
        Err(e) => {
            loge!("History: Load failed: {e}");
            app.notify_error(format!("Failed to load history: {e}"));
        }
    }
}

// Opening a task shows its items on the Parse tab, ready for export.
pub(super) fn finish_open(app: &mut App, res: Result<TaskDetail, String>) {
    match res {
        Ok(detail) => {
            let TaskDetail { task, items } = detail;
            app.state.gui.url_text = task.url.clone();
            app.state.gui.selector_text = task.selector.clone();
            app.results_caption = format!("Task #{} · {}", task.id, task.created_local());
            app.status(format!("Loaded task #{} ({} items)", task.id, items.len()));
            app.items = items;
            app.set_current_index(router::index_of(PageKind::Parse));
        }
        Err(e) => {
            loge!("History: Open failed: {e}");
            app.status(format!("Error: {e}"));
            app.notify_error(e);
        }
    }
}

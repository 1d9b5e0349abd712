// src/gui/actions/scrape.rs
use std::thread;

use eframe::egui;

use crate::{
    gui::{actions::JobResult, app::App, progress::GuiProgress},
    scrape::{self, ScrapeOutcome, ScrapeRequest},
};

pub fn scrape(app: &mut App, ctx: &egui::Context) {
    let request = ScrapeRequest::new(
        app.state.gui.url_text.trim(),
        app.state.gui.selector_text.trim(),
    );

    // Reject bad input on the UI thread; nothing is spawned for it.
    if let Err(e) = request.validate() {
        logd!("Scrape: Rejected url={:?} selector={:?}: {e}", request.url, request.selector);
        app.notify_error(e.to_string());
        return;
    }

    logf!("Scrape: Begin url={} selector={}", request.url, request.selector);
    app.running = true;
    app.status("Parsing...");

    let settings = app.state.options.scraper.clone();
    let limit = app.state.options.history.limit;
    let backend = app.backend.clone();
    let generation = app.backend_gen;
    let status = app.status.clone();
    let tx = app.jobs_tx.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);

        // → This is where the scrape happens ←
        let result = scrape::scrape_and_record(&settings, Some(backend.as_ref()), &request, Some(&mut prog))
            .map_err(|e| e.to_string());

        let history = match &result {
            Ok(_) => backend.list(limit).map_err(|e| loge!("History: reload failed: {e}")).ok(),
            Err(_) => None,
        };

        let _ = tx.send(JobResult::Scraped { generation, request, result, history });
        ctx.request_repaint();
    });
}

pub(super) fn finish(app: &mut App, request: ScrapeRequest, result: Result<ScrapeOutcome, String>) {
    match result {
        Ok(outcome) => {
            logf!("Scrape: OK url={} items={}", request.url, outcome.items.len());

            app.selected_task = outcome.receipt.as_ref().map(|r| r.task_id);
            app.results_caption = match &outcome.receipt {
                Some(r) => format!("Task #{} · {}", r.task_id, request.url),
                None => request.url.clone(),
            };

            match &outcome.save_error {
                Some(warn) => {
                    app.notify_error(format!("{}. {warn}", outcome.message()));
                    app.status(warn.clone());
                }
                None => {
                    app.notify_success(outcome.message());
                    app.status("Ready");
                }
            }
            app.items = outcome.items;
        }
        Err(e) => {
            loge!("Scrape: Error url={}: {e}", request.url);
            app.status(format!("Error: {e}"));
            app.notify_error(e);
        }
    }
}

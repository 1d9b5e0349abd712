// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc, Mutex,
    },
    time::{Duration, Instant},
};

use eframe::egui;

use crate::{
    config::{
        settings,
        state::{AppState, PageKind, SettingsDraft},
    },
    data::{ParsedItem, Task},
    history::{self, HistoryBackend, LocalHistory},
};

use super::{
    actions::{self, JobResult},
    components,
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions, store_dir: PathBuf) -> Result<(), Box<dyn Error>> {
    crate::log::init(&store_dir);
    let opts = settings::load_or_default(&settings::settings_path(&store_dir));

    eframe::run_native(
        "Web Scraper",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(AppState::new(opts), store_dir, &cc.egui_ctx)))),
    )?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// The one-line toast under the tabs.
#[derive(Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub shown_at: Instant,
}

pub const NOTICE_TTL: Duration = Duration::from_secs(5);

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub store_dir: PathBuf,
    pub backend: Arc<dyn HistoryBackend>,
    /// Bumped on every backend swap; jobs carry the value they started with.
    pub backend_gen: u64,

    // last parse result, or a task opened from history
    pub items: Vec<ParsedItem>,
    pub results_caption: String,

    pub history: Vec<Task>,
    pub selected_task: Option<u64>,

    // Settings tab edits; applied on Save
    pub draft: SettingsDraft,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub notice: Option<Notice>,

    // background jobs
    pub running: bool,
    pub history_busy: bool,
    pub(super) jobs_tx: Sender<JobResult>,
    jobs_rx: Receiver<JobResult>,
}

impl App {
    pub fn new(state: AppState, store_dir: PathBuf, ctx: &egui::Context) -> Self {
        let (jobs_tx, jobs_rx) = mpsc::channel();

        let mut startup_error = None;
        let backend: Arc<dyn HistoryBackend> = match history::open_backend(
            &state.options.history,
            &store_dir,
            state.options.scraper.timeout(),
        ) {
            Ok(b) => b,
            Err(e) => {
                loge!("Init: history backend unusable, using local store ({e})");
                startup_error = Some(format!("History endpoints unusable: {e}"));
                Arc::new(LocalHistory::open(&store_dir))
            }
        };

        logf!("Init: store={}, backend={}", store_dir.display(), backend.name());

        let draft = SettingsDraft::from_options(&state.options);

        let mut app = Self {
            state,
            store_dir,
            backend,
            backend_gen: 0,
            items: Vec::new(),
            results_caption: s!(),
            history: Vec::new(),
            selected_task: None,
            draft,
            status: Arc::new(Mutex::new(s!("Idle"))),
            notice: None,
            running: false,
            history_busy: false,
            jobs_tx,
            jobs_rx,
        };

        if let Some(msg) = startup_error {
            app.notify_error(msg);
        }
        actions::load_history(&mut app, ctx);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        router::all_pages()
            .get(self.current_index())
            .copied()
            .unwrap_or_else(|| router::page_for(PageKind::Parse))
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Replace the history backend. In-flight history jobs become stale.
    pub fn swap_backend(&mut self, backend: Arc<dyn HistoryBackend>) {
        logf!("History: backend {} → {}", self.backend.name(), backend.name());
        self.backend = backend;
        self.backend_gen += 1;
        self.history_busy = false;
        self.history.clear();
        self.selected_task = None;
    }

    pub fn notify_success(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice { kind: NoticeKind::Success, text: text.into(), shown_at: Instant::now() });
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice { kind: NoticeKind::Error, text: text.into(), shown_at: Instant::now() });
    }

    /// Apply whatever background jobs have finished since the last frame.
    pub(crate) fn poll_jobs(&mut self) {
        while let Ok(job) = self.jobs_rx.try_recv() {
            actions::apply(self, job);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_jobs();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Web Scraper");
                ui.weak("Scrape sites and export the data");
            });
            ui.add_space(6.0);

            components::tabs::draw(ui, self);
            components::notice::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            egui::ScrollArea::vertical()
                .id_salt(("page", self.current_index()))
                .auto_shrink([false, false])
                .show(ui, |ui| page.draw(ui, self));
        });

        if self.running || self.history_busy {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else if self.notice.is_some() {
            ctx.request_repaint_after(Duration::from_millis(500));
        }
    }
}

// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

/// Writes scrape progress into the shared status line.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn item_done(&mut self, url: &str, items: usize) {
        self.done += 1;
        self.set_status(format!("Fetched {url}: {items} items ({}/{})", self.done, self.total));
    }
    fn item_failed(&mut self, url: &str, error: &str) {
        self.done += 1;
        self.set_status(format!("Failed {url}: {error}"));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status("Done");
        } else {
            self.set_status(format!("Done ({}/{})", self.done, self.total));
        }
    }
}

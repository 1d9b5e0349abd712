// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape batches).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of requests in the batch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One URL was fetched and parsed into `items` records.
    fn item_done(&mut self, _url: &str, _items: usize) {}

    /// One URL failed; the batch carries on.
    fn item_failed(&mut self, _url: &str, _error: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

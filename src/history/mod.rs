// src/history/mod.rs
//
// Where parse runs are recorded. Two backends with identical semantics:
// a JSON file under the store dir, or a pair of HTTP endpoints
// (GET history / POST save).

mod local;
mod remote;

pub use local::LocalHistory;
pub use remote::RemoteHistory;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::config::options::HistoryOptions;
use crate::data::{SaveReceipt, SaveRequest, Task, TaskDetail};
use crate::error::{Result, ScrapeError};

pub const SAVED_MESSAGE: &str = "Results saved successfully";

pub trait HistoryBackend: Send + Sync {
    /// Short name for logs and the status bar ("local" / "remote").
    fn name(&self) -> &'static str;

    /// Newest first (created_at desc, then id desc), at most `limit`.
    fn list(&self, limit: usize) -> Result<Vec<Task>>;

    /// One task plus its items, items ordered by id.
    fn get(&self, task_id: u64) -> Result<TaskDetail>;

    /// Record a finished run. Rejects empty url/selector.
    fn save(&self, req: &SaveRequest) -> Result<SaveReceipt>;
}

/// Remote when both endpoints are configured, local store otherwise.
pub fn open_backend(
    opts: &HistoryOptions,
    store_dir: &Path,
    timeout: Duration,
) -> Result<Arc<dyn HistoryBackend>> {
    match opts.remote() {
        Some((history_url, save_url)) => {
            logf!("History: remote backend {history_url} / {save_url}");
            Ok(Arc::new(RemoteHistory::new(history_url, save_url, timeout)?))
        }
        None => {
            let local = LocalHistory::open(store_dir);
            logf!("History: local backend {}", local.path().display());
            Ok(Arc::new(local))
        }
    }
}

/// created_at desc, then id desc.
pub(crate) fn sort_newest_first(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

pub(crate) fn check_save_request(req: &SaveRequest) -> Result<()> {
    if req.url.trim().is_empty() || req.selector.trim().is_empty() {
        return Err(ScrapeError::InvalidSaveRequest);
    }
    Ok(())
}

// src/history/local.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{check_save_request, sort_newest_first, HistoryBackend, SAVED_MESSAGE};
use crate::config::consts::HISTORY_FILE;
use crate::data::{SaveReceipt, SaveRequest, Task, TaskDetail, TaskStatus};
use crate::error::{Result, ScrapeError};

/// On-disk layout of `history.json`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct HistoryFile {
    next_id: u64,
    tasks: Vec<TaskDetail>,
}

impl Default for HistoryFile {
    fn default() -> Self {
        Self { next_id: 1, tasks: Vec::new() }
    }
}

/// History kept in a single JSON document. Every save is a full
/// read-modify-write under a mutex, replaced atomically via rename.
pub struct LocalHistory {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LocalHistory {
    /// `<store_dir>/history.json`; the file is created on first save.
    pub fn open(store_dir: &Path) -> Self {
        Self::at(store_dir.join(HISTORY_FILE))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path { &self.path }

    fn read(&self) -> Result<HistoryFile> {
        if !self.path.exists() {
            return Ok(HistoryFile::default());
        }
        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(HistoryFile::default());
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn write(&self, file: &HistoryFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(file)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl HistoryBackend for LocalHistory {
    fn name(&self) -> &'static str { "local" }

    fn list(&self, limit: usize) -> Result<Vec<Task>> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let file = self.read()?;

        let mut tasks: Vec<Task> = file.tasks.into_iter().map(|d| d.task).collect();
        sort_newest_first(&mut tasks);
        tasks.truncate(limit);
        Ok(tasks)
    }

    fn get(&self, task_id: u64) -> Result<TaskDetail> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let file = self.read()?;

        let mut detail = file
            .tasks
            .into_iter()
            .find(|d| d.task.id == task_id)
            .ok_or(ScrapeError::TaskNotFound(task_id))?;
        detail.items.sort_by_key(|it| it.id);
        Ok(detail)
    }

    fn save(&self, req: &SaveRequest) -> Result<SaveReceipt> {
        check_save_request(req)?;

        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = self.read()?;

        let task_id = file.next_id.max(1);
        file.next_id = task_id + 1;

        let now = Utc::now();
        let items_saved = req.items.len() as u64;
        file.tasks.push(TaskDetail {
            task: Task {
                id: task_id,
                url: req.url.clone(),
                selector: req.selector.clone(),
                status: TaskStatus::Completed,
                created_at: now,
                completed_at: Some(now),
                total_items: items_saved,
            },
            items: req.items.clone(),
        });
        self.write(&file)?;

        logf!("History: saved task {task_id} ({items_saved} items) → {}", self.path.display());
        Ok(SaveReceipt { task_id, items_saved, message: s!(SAVED_MESSAGE) })
    }
}

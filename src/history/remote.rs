// src/history/remote.rs
//
// Client for the two history endpoints:
//   GET  <history_url>             → {"tasks": [...]}
//   GET  <history_url>?task_id=N   → {"task": {...}, "items": [...]}  (404 if unknown)
//   POST <save_url> {url, selector, items} → {task_id, items_saved, message}

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use super::{check_save_request, sort_newest_first, HistoryBackend};
use crate::data::{SaveReceipt, SaveRequest, Task, TaskDetail};
use crate::error::{Result, ScrapeError};

#[derive(Debug, Deserialize)]
struct TaskList {
    #[serde(default)]
    tasks: Vec<Task>,
}

pub struct RemoteHistory {
    client: Client,
    history_url: Url,
    save_url: Url,
}

impl RemoteHistory {
    pub fn new(history_url: &str, save_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            history_url: parse_endpoint(history_url)?,
            save_url: parse_endpoint(save_url)?,
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    Url::parse(raw.trim()).map_err(|e| ScrapeError::InvalidUrl { url: s!(raw), reason: e.to_string() })
}

fn ensure_success(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(ScrapeError::Status { status: status.as_u16(), url: resp.url().to_string() })
    }
}

impl HistoryBackend for RemoteHistory {
    fn name(&self) -> &'static str { "remote" }

    fn list(&self, limit: usize) -> Result<Vec<Task>> {
        let resp = ensure_success(self.client.get(self.history_url.clone()).send()?)?;
        let mut list: TaskList = resp.json()?;
        sort_newest_first(&mut list.tasks);
        list.tasks.truncate(limit);
        logd!("History: remote list → {} tasks", list.tasks.len());
        Ok(list.tasks)
    }

    fn get(&self, task_id: u64) -> Result<TaskDetail> {
        let mut url = self.history_url.clone();
        url.query_pairs_mut().append_pair("task_id", &task_id.to_string());

        let resp = self.client.get(url).send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ScrapeError::TaskNotFound(task_id));
        }
        let mut detail: TaskDetail = ensure_success(resp)?.json()?;
        detail.items.sort_by_key(|it| it.id);
        Ok(detail)
    }

    fn save(&self, req: &SaveRequest) -> Result<SaveReceipt> {
        check_save_request(req)?;

        let resp = self.client.post(self.save_url.clone()).json(req).send()?;
        if resp.status() == StatusCode::BAD_REQUEST {
            return Err(ScrapeError::InvalidSaveRequest);
        }
        let receipt: SaveReceipt = ensure_success(resp)?.json()?;
        logf!("History: remote saved task {} ({} items)", receipt.task_id, receipt.items_saved);
        Ok(receipt)
    }
}

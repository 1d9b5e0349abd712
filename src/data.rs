// src/data.rs
//
// Record shapes shared by scrape, history and export.
// Field names match the history endpoints' JSON.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One extracted record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedItem {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
}

impl ParsedItem {
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>, link: impl Into<String>) -> Self {
        Self { id, title: title.into(), content: content.into(), link: link.into() }
    }

    /// Cells in export column order: ID, Title, Content, Link.
    pub fn cells(&self) -> [String; 4] {
        [self.id.to_string(), self.title.clone(), self.content.clone(), self.link.clone()]
    }
}

pub const ITEM_HEADERS: [&str; 4] = ["ID", "Title", "Content", "Link"];

/// Task status as stored. Only "completed" is special; anything else is
/// kept verbatim and shown as in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Completed,
    Other(String),
}

impl TaskStatus {
    #[inline]
    pub fn is_completed(&self) -> bool { matches!(self, TaskStatus::Completed) }

    pub fn label(&self) -> &'static str {
        if self.is_completed() { "Completed" } else { "In progress" }
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        if s == "completed" { TaskStatus::Completed } else { TaskStatus::Other(s) }
    }
}

impl From<TaskStatus> for String {
    fn from(st: TaskStatus) -> Self {
        match st {
            TaskStatus::Completed => s!("completed"),
            TaskStatus::Other(s) => s,
        }
    }
}

/// One recorded parse run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub selector: String,
    pub status: TaskStatus,
    #[serde(deserialize_with = "de_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "de_opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_items: u64,
}

impl Task {
    /// `created_at` in local time, e.g. "18.10.2026, 14:03:59".
    pub fn created_local(&self) -> String {
        self.created_at.with_timezone(&Local).format("%d.%m.%Y, %H:%M:%S").to_string()
    }
}

/// A task together with its stored items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetail {
    pub task: Task,
    #[serde(default)]
    pub items: Vec<ParsedItem>,
}

/// Body of a save call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequest {
    pub url: String,
    pub selector: String,
    #[serde(default)]
    pub items: Vec<ParsedItem>,
}

/// What the store says after a save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReceipt {
    pub task_id: u64,
    pub items_saved: u64,
    #[serde(default)]
    pub message: String,
}

/* ---------------- serde helpers ---------------- */

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

/// RFC 3339, or the `YYYY-MM-DD HH:MM:SS[.ffffff][+HH:MM]` form a database
/// driver prints. Naive values are read as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn de_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(d)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp: {raw}")))
}

fn de_opt_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    match Option::<String>::deserialize(d)? {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp: {raw}"))),
    }
}

// tests/remote_history.rs
use std::time::Duration;

use mockito::{Matcher, Server};
use web_scrape::data::{ParsedItem, SaveRequest, TaskStatus};
use web_scrape::error::ScrapeError;
use web_scrape::history::{HistoryBackend, RemoteHistory};

fn backend(server: &Server) -> RemoteHistory {
    RemoteHistory::new(
        &format!("{}/get-history", server.url()),
        &format!("{}/save-results", server.url()),
        Duration::from_secs(5),
    )
    .unwrap()
}

const TASKS: &str = r#"{"tasks": [
  {"id": 7, "url": "https://b.example", "selector": "h2", "status": "completed",
   "created_at": "2024-03-02T10:00:00Z", "completed_at": "2024-03-02T10:00:01Z", "total_items": 3},
  {"id": 6, "url": "https://a.example", "selector": ".post", "status": "running",
   "created_at": "2024-03-01 09:30:00.123456", "completed_at": null, "total_items": 0}
]}"#;

#[test]
fn list_reads_tasks_and_keeps_unknown_status() {
    let mut server = Server::new();
    let m = server
        .mock("GET", "/get-history")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TASKS)
        .create();

    let tasks = backend(&server).list(50).unwrap();
    m.assert();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, 7);
    assert!(tasks[0].status.is_completed());
    assert_eq!(tasks[1].status, TaskStatus::Other("running".into()));
    assert_eq!(tasks[1].status.label(), "In progress");
    assert!(tasks[1].completed_at.is_none());
}

#[test]
fn list_truncates_to_limit() {
    let mut server = Server::new();
    server.mock("GET", "/get-history").with_body(TASKS).create();
    assert_eq!(backend(&server).list(1).unwrap().len(), 1);
}

#[test]
fn list_is_newest_first_whatever_the_server_order() {
    let mut server = Server::new();
    server
        .mock("GET", "/get-history")
        .with_body(
            r#"{"tasks": [
              {"id": 1, "url": "u", "selector": "s", "status": "completed", "created_at": "2024-01-01T00:00:00Z"},
              {"id": 3, "url": "u", "selector": "s", "status": "completed", "created_at": "2024-01-03T00:00:00Z"},
              {"id": 2, "url": "u", "selector": "s", "status": "completed", "created_at": "2024-01-03T00:00:00Z"},
              {"id": 4, "url": "u", "selector": "s", "status": "completed", "created_at": "2024-01-02T00:00:00Z"}
            ]}"#,
        )
        .create();

    let ids: Vec<u64> = backend(&server).list(3).unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![3, 2, 4]);
}

#[test]
fn missing_tasks_field_is_empty() {
    let mut server = Server::new();
    server.mock("GET", "/get-history").with_body("{}").create();
    assert!(backend(&server).list(50).unwrap().is_empty());
}

#[test]
fn get_passes_task_id_and_sorts_items() {
    let mut server = Server::new();
    let m = server
        .mock("GET", "/get-history")
        .match_query(Matcher::UrlEncoded("task_id".into(), "7".into()))
        .with_body(
            r#"{"task": {"id": 7, "url": "https://b.example", "selector": "h2", "status": "completed",
                 "created_at": "2024-03-02T10:00:00Z", "completed_at": null, "total_items": 2},
                "items": [
                  {"id": 2, "task_id": 7, "title": null, "content": "second", "link": null},
                  {"id": 1, "task_id": 7, "title": "First", "content": "first", "link": "https://b.example/1"}
                ]}"#,
        )
        .create();

    let detail = backend(&server).get(7).unwrap();
    m.assert();

    assert_eq!(detail.task.id, 7);
    assert_eq!(detail.items[0], ParsedItem::new(1, "First", "first", "https://b.example/1"));
    assert_eq!(detail.items[1], ParsedItem::new(2, "", "second", ""));
}

#[test]
fn get_404_is_task_not_found() {
    let mut server = Server::new();
    server
        .mock("GET", "/get-history")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error": "Task not found"}"#)
        .create();

    let err = backend(&server).get(3).unwrap_err();
    assert!(matches!(err, ScrapeError::TaskNotFound(3)));
}

#[test]
fn save_posts_json_and_returns_receipt() {
    let mut server = Server::new();
    let m = server
        .mock("POST", "/save-results")
        .match_body(Matcher::PartialJsonString(
            r#"{"url": "https://a.example", "selector": ".post"}"#.into(),
        ))
        .with_status(200)
        .with_body(r#"{"task_id": 12, "items_saved": 1, "message": "Results saved successfully"}"#)
        .create();

    let req = SaveRequest {
        url: "https://a.example".into(),
        selector: ".post".into(),
        items: vec![ParsedItem::new(1, "T", "C", "")],
    };
    let receipt = backend(&server).save(&req).unwrap();
    m.assert();

    assert_eq!(receipt.task_id, 12);
    assert_eq!(receipt.items_saved, 1);
}

#[test]
fn save_rejects_empty_fields_without_a_request() {
    let mut server = Server::new();
    let m = server.mock("POST", "/save-results").expect(0).create();

    let req = SaveRequest { url: String::new(), selector: "h2".into(), items: Vec::new() };
    assert!(matches!(backend(&server).save(&req), Err(ScrapeError::InvalidSaveRequest)));
    m.assert();
}

#[test]
fn save_server_error_is_status_error() {
    let mut server = Server::new();
    server.mock("POST", "/save-results").with_status(500).create();

    let req = SaveRequest { url: "https://a.example".into(), selector: "h2".into(), items: Vec::new() };
    match backend(&server).save(&req) {
        Err(ScrapeError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

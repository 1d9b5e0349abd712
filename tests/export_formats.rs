// tests/export_formats.rs
use std::fs;

use web_scrape::config::options::{ExportFormat, ExportOptions};
use web_scrape::data::ParsedItem;
use web_scrape::error::ScrapeError;
use web_scrape::file::{to_export_string, write_export};

fn sample() -> Vec<ParsedItem> {
    vec![
        ParsedItem::new(1, "Hello, world", "He said \"hi\"", "https://example.com/1"),
        ParsedItem::new(2, "Tabs\tand\nlines", "plain", ""),
    ]
}

#[test]
fn csv_has_header_and_escapes() {
    let out = to_export_string(&sample(), ExportFormat::Csv, true).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "ID,Title,Content,Link");
    assert_eq!(lines[1], r#"1,"Hello, world","He said ""hi""",https://example.com/1"#);
    // embedded newline stays inside one quoted field
    assert!(out.contains("2,\"Tabs\tand\nlines\",plain,\n"));
}

#[test]
fn csv_without_headers_starts_with_data() {
    let out = to_export_string(&sample(), ExportFormat::Csv, false).unwrap();
    assert!(out.starts_with("1,"));
}

#[test]
fn excel_is_tab_separated_and_flattened() {
    let out = to_export_string(&sample(), ExportFormat::Excel, true).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "ID\tTitle\tContent\tLink");
    assert_eq!(lines[1], "1\tHello, world\tHe said \"hi\"\thttps://example.com/1");
    assert_eq!(lines[2].split('\t').count(), 4);
    assert!(lines[2].starts_with("2\tTabs and lines\t"));
}

#[test]
fn json_is_a_pretty_array_of_items() {
    let out = to_export_string(&sample(), ExportFormat::Json, true).unwrap();
    assert!(out.starts_with("[\n  {\n    \"id\": 1,"));

    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["title"], "Hello, world");
    assert_eq!(arr[1]["link"], "");
    assert_eq!(arr[0].as_object().unwrap().len(), 4);
}

#[test]
fn empty_list_is_rejected_in_every_format() {
    for fmt in ExportFormat::ALL {
        let err = to_export_string(&[], fmt, true).unwrap_err();
        assert!(matches!(err, ScrapeError::NothingToExport));
        assert_eq!(err.to_string(), "No data to export");
    }
}

#[test]
fn default_names_follow_format() {
    assert_eq!(ExportFormat::Csv.default_file_name(), "parsed_data.csv");
    assert_eq!(ExportFormat::Json.default_file_name(), "parsed_data.json");
    assert_eq!(ExportFormat::Excel.default_file_name(), "parsed_data.xls");
}

#[test]
fn write_export_resolves_paths_and_creates_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let mut export = ExportOptions { out_dir: dir.path().join("out"), ..Default::default() };

    // empty text → <out_dir>/parsed_data.csv
    let path = export.resolve_path("");
    let written = write_export(&path, &export, &sample()).unwrap();
    assert_eq!(written, dir.path().join("out").join("parsed_data.csv"));
    assert!(fs::read_to_string(&written).unwrap().starts_with("ID,Title"));

    // existing directory → default name appended
    export.format = ExportFormat::Json;
    let path = export.resolve_path(dir.path().to_str().unwrap());
    assert_eq!(path, dir.path().join("parsed_data.json"));

    // explicit file path, nested missing dirs
    export.format = ExportFormat::Excel;
    let target = dir.path().join("a").join("b").join("mine.txt");
    let path = export.resolve_path(target.to_str().unwrap());
    let written = write_export(&path, &export, &sample()).unwrap();
    assert_eq!(written, target);
    assert!(fs::read_to_string(&target).unwrap().starts_with("ID\tTitle"));
}

#[test]
fn write_export_with_nothing_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let export = ExportOptions { out_dir: dir.path().to_path_buf(), ..Default::default() };
    let path = export.out_path();

    let err = write_export(&path, &export, &[]).unwrap_err();
    assert_eq!(err.to_string(), "No data to export");
    assert!(!path.exists());
}

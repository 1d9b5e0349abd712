// tests/settings_file.rs
use web_scrape::config::options::{AppOptions, ExportFormat};
use web_scrape::config::settings;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let opts = settings::load(&settings::settings_path(dir.path())).unwrap();
    assert_eq!(opts, AppOptions::default());
    assert_eq!(opts.scraper.timeout_ms, 5000);
    assert_eq!(opts.scraper.delay_ms, 1000);
    assert!(opts.scraper.extra_headers.is_empty());
    assert!(opts.history.remote().is_none());
}

#[test]
fn saved_settings_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings::settings_path(&dir.path().join("store"));

    let mut opts = AppOptions::default();
    opts.scraper.timeout_ms = 2500;
    opts.scraper.delay_ms = 0;
    opts.scraper.user_agent = "test-agent/1.0".into();
    opts.scraper.extra_headers = r#"{"Accept-Language": "en-US"}"#.into();
    opts.export.format = ExportFormat::Excel;
    opts.export.include_headers = false;
    opts.history.history_url = Some("https://api.example/get-history".into());
    opts.history.save_url = Some("https://api.example/save-results".into());

    settings::save(&path, &opts).unwrap();
    assert!(path.exists());
    assert_eq!(settings::load(&path).unwrap(), opts);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[scraper]\ntimeout_ms = 100\n\n[export]\nformat = \"json\"\n").unwrap();

    let opts = settings::load(&path).unwrap();
    assert_eq!(opts.scraper.timeout_ms, 100);
    assert_eq!(opts.scraper.delay_ms, 1000);
    assert_eq!(opts.export.format, ExportFormat::Json);
    assert!(opts.export.include_headers);
}

#[test]
fn broken_file_is_an_error_but_startup_load_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[scraper\ntimeout_ms = ").unwrap();

    assert!(settings::load(&path).is_err());
    assert_eq!(settings::load_or_default(&path), AppOptions::default());
}

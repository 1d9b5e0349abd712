// src/cli.rs
use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use clap::{Args, Parser, Subcommand};

use crate::{
    config::{
        consts::STORE_DIR,
        options::{AppOptions, ExportFormat, ExportOptions},
        settings,
    },
    core::sanitize::truncate_chars,
    data::ParsedItem,
    file,
    history::{self, HistoryBackend},
    progress::Progress,
    scrape::{self, ScrapeRequest},
};

#[derive(Debug, Parser)]
#[command(name = "web_scrape", version, about = "Scrape pages with a CSS selector; export CSV / JSON / Excel")]
pub struct Cli {
    /// Directory for history, settings and the debug log
    #[arg(long, global = true, default_value = STORE_DIR)]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch URL(s), extract matches, record them in history and export
    Scrape(ScrapeArgs),
    /// List recorded tasks, newest first
    History {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Export the stored items of one task
    Show(ShowArgs),
    /// Show or change persisted settings
    Settings(SettingsArgs),
}

#[derive(Debug, Args)]
struct ScrapeArgs {
    /// Target page; repeat for a batch
    #[arg(short, long = "url", required = true)]
    urls: Vec<String>,

    /// CSS selector; one for all URLs, or one per URL
    #[arg(short, long = "selector", required = true)]
    selectors: Vec<String>,

    /// Don't record the run in history
    #[arg(long)]
    no_save: bool,

    #[command(flatten)]
    export: ExportArgs,

    #[command(flatten)]
    request: RequestArgs,
}

#[derive(Debug, Args)]
struct ShowArgs {
    task_id: u64,

    #[command(flatten)]
    export: ExportArgs,
}

#[derive(Debug, Args)]
struct ExportArgs {
    /// csv | json | excel (defaults to the saved setting)
    #[arg(short, long)]
    format: Option<ExportFormat>,

    /// Output file or directory; "-" prints to stdout
    #[arg(short, long)]
    out: Option<String>,

    /// Omit the header row (csv/excel)
    #[arg(long)]
    no_headers: bool,
}

#[derive(Debug, Args)]
struct RequestArgs {
    #[arg(long)]
    timeout_ms: Option<u64>,

    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long)]
    user_agent: Option<String>,

    /// Extra request headers as a JSON object
    #[arg(long)]
    headers: Option<String>,
}

#[derive(Debug, Args)]
struct SettingsArgs {
    #[command(flatten)]
    request: RequestArgs,

    /// Remote history endpoint (GET)
    #[arg(long, requires = "save_url")]
    history_url: Option<String>,

    /// Remote save endpoint (POST)
    #[arg(long, requires = "history_url")]
    save_url: Option<String>,

    /// Forget remote endpoints and use the local store
    #[arg(long, conflicts_with_all = ["history_url", "save_url"])]
    local: bool,

    /// Default export format
    #[arg(long)]
    format: Option<ExportFormat>,

    /// Default export directory
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    crate::log::init(&cli.store);

    let settings_path = settings::settings_path(&cli.store);
    let mut opts = settings::load(&settings_path)?;

    match cli.command {
        Command::Scrape(args) => run_scrape(&cli.store, &mut opts, args),
        Command::History { limit } => run_history(&cli.store, &opts, limit),
        Command::Show(args) => run_show(&cli.store, &opts, args),
        Command::Settings(args) => run_settings(&settings_path, &mut opts, args),
    }
}

/* ---------------- scrape ---------------- */

fn run_scrape(store: &std::path::Path, opts: &mut AppOptions, args: ScrapeArgs) -> Result<(), Box<dyn Error>> {
    args.request.apply(opts);
    opts.scraper.validate()?;

    let requests = pair_requests(&args.urls, &args.selectors)?;
    for req in &requests {
        req.validate()?;
    }

    let backend: Option<std::sync::Arc<dyn HistoryBackend>> = if args.no_save {
        None
    } else {
        Some(history::open_backend(&opts.history, store, opts.scraper.timeout())?)
    };

    logf!("CLI: scrape {} request(s), save={}", requests.len(), backend.is_some());

    let mut prog = CliProgress::default();
    let entries = scrape::scrape_batch(&opts.scraper, &requests, Some(&mut prog))?;

    let mut all_items: Vec<ParsedItem> = Vec::new();
    let mut failed = 0usize;
    for entry in entries {
        match entry.result {
            Ok(items) => {
                if let Some(b) = backend.as_deref() {
                    let (receipt, save_error) = scrape::record(b, &entry.request, &items);
                    if let Some(r) = receipt {
                        eprintln!("Saved as task {} ({} items)", r.task_id, r.items_saved);
                    }
                    if let Some(msg) = save_error {
                        eprintln!("Warning: {msg}");
                    }
                }
                all_items.extend(items);
            }
            Err(_) => failed += 1,
        }
    }

    if failed == requests.len() {
        return Err("All requests failed".into());
    }

    // One output table: renumber across the batch.
    for (i, item) in all_items.iter_mut().enumerate() {
        item.id = i as u64 + 1;
    }

    eprintln!("Parsed {} items successfully", all_items.len());
    if all_items.is_empty() {
        eprintln!("No data to export");
        return Ok(());
    }
    print_items(&all_items);
    export_items(&opts.export, &args.export, &all_items)
}

fn pair_requests(urls: &[String], selectors: &[String]) -> Result<Vec<ScrapeRequest>, Box<dyn Error>> {
    match selectors {
        [one] => Ok(urls.iter().map(|u| ScrapeRequest::new(u.as_str(), one.as_str())).collect()),
        many if many.len() == urls.len() => Ok(urls
            .iter()
            .zip(many)
            .map(|(u, s)| ScrapeRequest::new(u.as_str(), s.as_str()))
            .collect()),
        _ => Err(format!(
            "Got {} URLs but {} selectors; give one selector or one per URL",
            urls.len(),
            selectors.len()
        )
        .into()),
    }
}

/* ---------------- history / show ---------------- */

fn run_history(store: &std::path::Path, opts: &AppOptions, limit: Option<usize>) -> Result<(), Box<dyn Error>> {
    let backend = history::open_backend(&opts.history, store, opts.scraper.timeout())?;
    let tasks = backend.list(limit.unwrap_or(opts.history.limit))?;

    if tasks.is_empty() {
        println!("History is empty");
        return Ok(());
    }

    println!("{:>6}  {:<20}  {:<11}  {:>5}  {:<24}  {}", "ID", "Date", "Status", "Items", "Selector", "URL");
    for t in &tasks {
        println!(
            "{:>6}  {:<20}  {:<11}  {:>5}  {:<24}  {}",
            t.id,
            t.created_local(),
            t.status.label(),
            t.total_items,
            truncate_chars(&t.selector, 24),
            t.url
        );
    }
    Ok(())
}

fn run_show(store: &std::path::Path, opts: &AppOptions, args: ShowArgs) -> Result<(), Box<dyn Error>> {
    let backend = history::open_backend(&opts.history, store, opts.scraper.timeout())?;
    let detail = backend.get(args.task_id)?;

    eprintln!(
        "Task {}: {} [{}] {} items, {}",
        detail.task.id,
        detail.task.url,
        detail.task.selector,
        detail.items.len(),
        detail.task.status.label()
    );
    if detail.items.is_empty() {
        eprintln!("No data to export");
        return Ok(());
    }
    export_items(&opts.export, &args.export, &detail.items)
}

/* ---------------- settings ---------------- */

fn run_settings(path: &std::path::Path, opts: &mut AppOptions, args: SettingsArgs) -> Result<(), Box<dyn Error>> {
    let before = opts.clone();

    args.request.apply(opts);
    if args.local {
        opts.history.history_url = None;
        opts.history.save_url = None;
    }
    if let (Some(h), Some(s)) = (args.history_url, args.save_url) {
        opts.history.history_url = Some(h);
        opts.history.save_url = Some(s);
    }
    if let Some(f) = args.format {
        opts.export.format = f;
    }
    if let Some(d) = args.out_dir {
        opts.export.out_dir = d;
    }

    opts.scraper.validate()?;
    if *opts != before || !path.exists() {
        settings::save(path, opts)?;
        eprintln!("Saved {}", path.display());
    }
    print!("{}", toml::to_string_pretty(opts)?);
    Ok(())
}

impl RequestArgs {
    fn apply(&self, opts: &mut AppOptions) {
        let s = &mut opts.scraper;
        if let Some(v) = self.timeout_ms { s.timeout_ms = v; }
        if let Some(v) = self.delay_ms { s.delay_ms = v; }
        if let Some(v) = &self.user_agent { s.user_agent = v.clone(); }
        if let Some(v) = &self.headers { s.extra_headers = v.clone(); }
    }
}

/* ---------------- output ---------------- */

fn print_items(items: &[ParsedItem]) {
    for it in items {
        println!("{:>4}  {:<40}  {}", it.id, truncate_chars(&it.title, 40), it.link);
    }
}

fn export_items(defaults: &ExportOptions, args: &ExportArgs, items: &[ParsedItem]) -> Result<(), Box<dyn Error>> {
    let mut export = defaults.clone();
    if let Some(f) = args.format {
        export.format = f;
    }
    if args.no_headers {
        export.include_headers = false;
    }

    if args.out.as_deref() == Some("-") {
        let text = file::to_export_string(items, export.format, export.include_headers)?;
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') { writeln!(out)?; }
        return Ok(());
    }

    let path = export.resolve_path(args.out.as_deref().unwrap_or(""));
    let written = file::write_export(&path, &export, items)?;
    eprintln!("Data exported to {}: {}", export.format.label(), written.display());
    Ok(())
}

#[derive(Default)]
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, url: &str, items: usize) {
        self.done += 1;
        eprintln!("[{}/{}] {url} → {items} items", self.done, self.total);
    }
    fn item_failed(&mut self, url: &str, error: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {url} failed: {error}", self.done, self.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_selector_applies_to_every_url() {
        let urls = vec![s!("https://a.org"), s!("https://b.org")];
        let reqs = pair_requests(&urls, &[s!(".x")]).unwrap();
        assert_eq!(reqs.len(), 2);
        assert!(reqs.iter().all(|r| r.selector == ".x"));
    }

    #[test]
    fn mismatched_selector_count_is_rejected() {
        let urls = vec![s!("https://a.org"), s!("https://b.org"), s!("https://c.org")];
        assert!(pair_requests(&urls, &[s!(".x"), s!(".y")]).is_err());
    }

    #[test]
    fn parses_scrape_flags() {
        let cli = Cli::try_parse_from([
            "web_scrape", "scrape", "-u", "https://a.org", "-s", "h2",
            "--format", "excel", "--no-save", "--delay-ms", "0",
        ])
        .unwrap();
        match cli.command {
            Command::Scrape(a) => {
                assert_eq!(a.export.format, Some(ExportFormat::Excel));
                assert!(a.no_save);
                assert_eq!(a.request.delay_ms, Some(0));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}

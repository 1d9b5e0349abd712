// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use url::Url;

use web_scrape::core::{compile_selector, extract_items};
use web_scrape::file::to_export_string;
use web_scrape::config::options::ExportFormat;

// A listing page: n posts with heading, body and a relative link, plus noise.
fn synthetic_page(n: usize) -> String {
    let mut doc = String::from("<html><head><style>.post{}</style></head><body><nav><a href=\"/\">Home</a></nav>");
    for i in 0..n {
        doc.push_str(&format!(
            "<article class=\"post\"><h2>Post {i}</h2>\
             <p>Lorem ipsum &amp; dolor sit amet, item {i}.</p>\
             <script>track({i});</script>\
             <a href=\"/posts/{i}\">Read more</a></article>\n"
        ));
    }
    doc.push_str("</body></html>");
    doc
}

fn bench_extract(c: &mut Criterion) {
    let doc = synthetic_page(500);
    let base = Url::parse("https://example.com/blog/").unwrap();
    let post = compile_selector("article.post").unwrap();
    let headings = compile_selector("h2").unwrap();

    c.bench_function("extract_posts_500", |b| {
        b.iter(|| {
            let items = extract_items(black_box(&doc), &post, Some(&base));
            black_box(items.len())
        })
    });

    c.bench_function("extract_headings_500", |b| {
        b.iter(|| {
            let items = extract_items(black_box(&doc), &headings, None);
            black_box(items.len())
        })
    });

    let items = extract_items(&doc, &post, Some(&base));
    c.bench_function("export_csv_500", |b| {
        b.iter(|| to_export_string(black_box(&items), ExportFormat::Csv, true).map(|s| s.len()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);

// src/core/html.rs
//! Turn an HTML document + CSS selector into `ParsedItem`s.
//!
//! One item per matched element, in document order:
//! - **content**: visible text of the element (script/style skipped,
//!   block boundaries become spaces, whitespace collapsed).
//! - **title**: first heading `h1`–`h6` (self or descendant), else the
//!   `title` attribute, else the first non-empty anchor text, else the
//!   start of the content.
//! - **link**: own `href` for `<a>`, else first descendant `a[href]`,
//!   resolved against the page URL.
//!
//! Elements with neither text nor link are dropped before ids are handed
//! out, so ids are always `1..=n`.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

use super::sanitize::{normalize_ws, truncate_chars};
use crate::config::consts::TITLE_FALLBACK_CHARS;
use crate::data::ParsedItem;
use crate::error::{Result, ScrapeError};

static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").expect("static selector"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").expect("static selector"));
static ANCHOR_HREF: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static selector"));

const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "template"];
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "ol", "p", "pre",
    "section", "table", "td", "th", "tr", "ul",
];

pub fn compile_selector(css: &str) -> Result<Selector> {
    let css = css.trim();
    Selector::parse(css).map_err(|e| ScrapeError::InvalidSelector {
        selector: s!(css),
        reason: e.to_string(),
    })
}

/// Parse `doc` and extract one item per element matching `selector`.
/// `base` resolves relative links; without it hrefs are kept as written.
pub fn extract_items(doc: &str, selector: &Selector, base: Option<&Url>) -> Vec<ParsedItem> {
    let html = Html::parse_document(doc);

    let mut out = Vec::new();
    for el in html.select(selector) {
        let content = visible_text(el);
        let link = find_link(el, base);
        if content.is_empty() && link.is_empty() {
            continue;
        }
        let title = find_title(el, &content);
        let id = out.len() as u64 + 1;
        out.push(ParsedItem { id, title, content, link });
    }
    out
}

fn find_title(el: ElementRef<'_>, content: &str) -> String {
    if is_heading(el.value().name()) {
        let t = visible_text(el);
        if !t.is_empty() { return t; }
    }
    if let Some(t) = el.select(&HEADING).map(visible_text).find(|t| !t.is_empty()) {
        return t;
    }
    if let Some(t) = el.value().attr("title").map(normalize_ws).filter(|t| !t.is_empty()) {
        return t;
    }
    // An anchor is its own first anchor.
    if el.value().name() == "a" && !content.is_empty() {
        return s!(content);
    }
    if let Some(t) = el.select(&ANCHOR).map(visible_text).find(|t| !t.is_empty()) {
        return t;
    }
    truncate_chars(content, TITLE_FALLBACK_CHARS)
}

fn find_link(el: ElementRef<'_>, base: Option<&Url>) -> String {
    let href = if el.value().name() == "a" {
        el.value().attr("href")
    } else {
        el.select(&ANCHOR_HREF).next().and_then(|a| a.value().attr("href"))
    };
    match href.map(str::trim).filter(|h| !h.is_empty()) {
        Some(h) => resolve_link(h, base),
        None => s!(),
    }
}

fn resolve_link(href: &str, base: Option<&Url>) -> String {
    match base.map(|b| b.join(href)) {
        Some(Ok(abs)) => abs.to_string(),
        _ => s!(href),
    }
}

fn is_heading(name: &str) -> bool {
    matches!(name, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

/// Text a reader would see, on one line.
pub fn visible_text(el: ElementRef<'_>) -> String {
    let mut buf = String::new();
    collect_text(el, &mut buf);
    normalize_ws(&buf)
}

fn collect_text(el: ElementRef<'_>, buf: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => buf.push_str(t),
            Node::Element(e) => {
                let name = e.name();
                if SKIP_TAGS.contains(&name) { continue; }
                let Some(child_el) = ElementRef::wrap(child) else { continue };
                let block = BLOCK_TAGS.contains(&name);
                if block { buf.push(' '); }
                collect_text(child_el, buf);
                if block { buf.push(' '); }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div class="post">
            <h2>First <em>post</em></h2>
            <p>Body of the first post.</p>
            <a href="/posts/1">Read more</a>
          </div>
          <div class="post" title="Tooltip title">
            <p>Second &amp; last</p><script>var x = 1;</script>
          </div>
          <div class="post">   </div>
        </body></html>
    "#;

    fn base() -> Url { Url::parse("https://example.com/blog/").unwrap() }

    #[test]
    fn extracts_heading_title_text_and_resolved_link() {
        let sel = compile_selector(".post").unwrap();
        let items = extract_items(PAGE, &sel, Some(&base()));

        assert_eq!(items.len(), 2, "empty element skipped");
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].title, "First post");
        assert_eq!(items[0].content, "First post Body of the first post. Read more");
        assert_eq!(items[0].link, "https://example.com/posts/1");

        assert_eq!(items[1].id, 2);
        assert_eq!(items[1].title, "Tooltip title");
        assert_eq!(items[1].content, "Second & last");
        assert_eq!(items[1].link, "");
    }

    #[test]
    fn anchors_link_to_themselves() {
        let doc = r#"<ul><li><a href="a.html">Alpha</a></li><li><a href="https://x.org/b">Beta</a></li></ul>"#;
        let sel = compile_selector("li > a").unwrap();
        let items = extract_items(doc, &sel, Some(&base()));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Alpha");
        assert_eq!(items[0].link, "https://example.com/blog/a.html");
        assert_eq!(items[1].link, "https://x.org/b");
    }

    #[test]
    fn long_anchor_text_is_the_whole_title() {
        let text = "A headline that keeps going well past the eighty character cut used for plain blocks";
        let doc = format!(r#"<p><a class="story" href="/s/1">{text}</a></p>"#);
        let sel = compile_selector("a.story").unwrap();
        let items = extract_items(&doc, &sel, Some(&base()));
        assert!(text.chars().count() > TITLE_FALLBACK_CHARS);
        assert_eq!(items[0].title, text);
        assert_eq!(items[0].content, text);
    }

    #[test]
    fn title_falls_back_to_content_prefix() {
        let long = "word ".repeat(40);
        let doc = format!("<p class='x'>{long}</p>");
        let sel = compile_selector("p.x").unwrap();
        let items = extract_items(&doc, &sel, None);
        assert_eq!(items.len(), 1);
        assert!(items[0].title.chars().count() <= TITLE_FALLBACK_CHARS);
        assert!(items[0].content.starts_with(&items[0].title));
    }

    #[test]
    fn relative_link_without_base_is_kept() {
        let doc = r#"<div class="c"><a href="/x">x</a></div>"#;
        let sel = compile_selector(".c").unwrap();
        let items = extract_items(doc, &sel, None);
        assert_eq!(items[0].link, "/x");
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let sel = compile_selector("article").unwrap();
        assert!(extract_items(PAGE, &sel, None).is_empty());
    }

    #[test]
    fn bad_selector_reports_reason() {
        match compile_selector("div[") {
            Err(ScrapeError::InvalidSelector { selector, .. }) => assert_eq!(selector, "div["),
            other => panic!("expected InvalidSelector, got {other:?}"),
        }
    }
}

// src/core/sanitize.rs

/// Collapse runs of whitespace (incl. NBSP) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// First `max` chars, cut on a char boundary, trailing space dropped.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => s[..cut].trim_end().to_string(),
        None => s.to_string(),
    }
}

/// A cell safe for tab-separated output: tabs and line breaks become a
/// single space.
pub fn tsv_cell(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_break = false;
    for ch in s.chars() {
        if matches!(ch, '\t' | '\r' | '\n') {
            if !prev_break { out.push(' '); prev_break = true; }
        } else { out.push(ch); prev_break = false; }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  a \n\t b\u{a0}\u{a0}c  "), "a b c");
        assert_eq!(normalize_ws(" \n "), "");
    }

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate_chars("Заголовок первый", 9), "Заголовок");
        assert_eq!(truncate_chars("short", 80), "short");
        assert_eq!(truncate_chars("ab cd", 3), "ab");
    }

    #[test]
    fn tsv_cells_lose_tabs_and_breaks() {
        assert_eq!(tsv_cell("a\tb\r\nc"), "a b c");
        assert_eq!(tsv_cell("plain"), "plain");
    }
}

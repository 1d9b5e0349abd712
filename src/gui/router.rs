// src/gui/router.rs
use crate::config::state::PageKind::{self, *};
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::parse::PAGE,
    &pages::history::PAGE,
    &pages::settings::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: PageKind) -> &'static dyn Page {
    match kind {
        Parse    => &pages::parse::PAGE,
        History  => &pages::history::PAGE,
        Settings => &pages::settings::PAGE,
    }
}

pub fn index_of(kind: PageKind) -> usize {
    PAGES.iter().position(|p| p.kind() == kind).unwrap_or(0)
}

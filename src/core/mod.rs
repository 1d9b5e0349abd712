// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;

pub use html::{compile_selector, extract_items};
pub use net::Fetcher;

// src/gui/components/mod.rs
pub mod export_bar;
pub mod history_table;
pub mod notice;
pub mod results_table;
pub mod status_bar;
pub mod tabs;

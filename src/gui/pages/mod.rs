// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::state::PageKind;
use super::app::App;

pub mod history;
pub mod parse;
pub mod settings;

/// One tab. Pages are stateless statics; everything they touch lives on `App`.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Called when the tab becomes active.
    fn on_enter(&self, _app: &mut App, _ctx: &egui::Context) {}

    /// Draw the page body below the tabs.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}

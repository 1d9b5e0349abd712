// src/gui/pages/parse.rs
use eframe::egui;

use crate::config::state::PageKind;
use crate::gui::{actions, app::App, components};
use super::Page;

pub struct ParsePage;
pub static PAGE: ParsePage = ParsePage;

impl Page for ParsePage {
    fn title(&self) -> &'static str { "Parse" }
    fn kind(&self) -> PageKind { PageKind::Parse }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        draw_form(ui, app);

        if app.items.is_empty() {
            return;
        }

        ui.add_space(12.0);
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.strong(format!("Items found: {}", app.items.len()));
                if !app.results_caption.is_empty() {
                    ui.weak(&app.results_caption);
                }
            });
            ui.add_space(4.0);
            components::export_bar::draw(ui, app);
            ui.separator();
            components::results_table::draw(ui, &app.items);
        });
    }
}

fn draw_form(ui: &mut egui::Ui, app: &mut App) {
    let mut submit = false;

    egui::Grid::new("parse_form")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("URL:");
            let r = ui.add(
                egui::TextEdit::singleline(&mut app.state.gui.url_text)
                    .hint_text("https://example.com")
                    .desired_width(f32::INFINITY),
            );
            submit |= r.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.end_row();

            ui.label("CSS selector:");
            let r = ui.add(
                egui::TextEdit::singleline(&mut app.state.gui.selector_text)
                    .hint_text(".article, .post, h2")
                    .desired_width(f32::INFINITY),
            );
            submit |= r.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.end_row();
        });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if app.running {
            ui.add_enabled(false, egui::Button::new("Parsing..."));
            ui.spinner();
        } else if ui.button("Start parsing").clicked() {
            submit = true;
        }
    });

    if submit && !app.running {
        actions::scrape(app, ui.ctx());
    }
}

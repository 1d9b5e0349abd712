// src/gui/components/notice.rs
use eframe::egui::{self, Color32, RichText};
use crate::gui::app::{App, NoticeKind, NOTICE_TTL};

const SUCCESS: Color32 = Color32::from_rgb(0x2e, 0x9e, 0x44);
const ERROR: Color32 = Color32::from_rgb(0xd0, 0x3a, 0x3a);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let expired = app.notice.as_ref().is_some_and(|n| n.shown_at.elapsed() >= NOTICE_TTL);
    if expired {
        app.notice = None;
    }
    let Some(notice) = app.notice.as_ref() else { return };

    let color = match notice.kind {
        NoticeKind::Success => SUCCESS,
        NoticeKind::Error => ERROR,
    };

    let mut dismiss = false;
    ui.add_space(4.0);
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, color))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&notice.text).color(color));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    dismiss = ui.small_button("✕").clicked();
                });
            });
        });

    if dismiss {
        app.notice = None;
    }
}

//! Themed widget helpers shared by the form panel.

use bevy_egui::egui;

use crate::theme;

/// A primary (highlighted) button for the main action in a panel.
pub fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let button = egui::Button::new(
        egui::RichText::new(text)
            .size(theme::FONT_BODY)
            .color(theme::TEXT_HEADING),
    )
    .fill(theme::PRIMARY)
    .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS));
    ui.add(button)
}

/// Fixed-width block showing `text` exactly as stored.
pub fn code_block(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(ui.visuals().code_bg_color)
        .corner_radius(egui::CornerRadius::same(theme::WIDGET_CORNER_RADIUS))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.add(
                egui::Label::new(egui::RichText::new(text).monospace())
                    .wrap_mode(egui::TextWrapMode::Extend)
                    .selectable(true),
            );
        });
}

/// A small single-line status message in the caller's color, used for both
/// failures and confirmations.
pub fn status_line(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.label(egui::RichText::new(text).small().color(color));
}

use bevy_egui::{egui, EguiContexts};

pub const PANEL: egui::Color32 = egui::Color32::from_rgb(35, 37, 48);
pub const INACTIVE: egui::Color32 = egui::Color32::from_rgb(50, 55, 65);
pub const HOVER: egui::Color32 = egui::Color32::from_rgb(70, 80, 100);
pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(100, 160, 220);
pub const CODE_BG: egui::Color32 = egui::Color32::from_rgb(30, 32, 40);

pub const TEXT_HEADING: egui::Color32 = egui::Color32::from_rgb(235, 235, 240);
pub const TEXT_ERROR: egui::Color32 = egui::Color32::from_rgb(230, 110, 100);
pub const TEXT_OK: egui::Color32 = egui::Color32::from_rgb(120, 200, 140);

pub const FONT_BODY: f32 = 14.0;
pub const FONT_CODE: f32 = 13.0;
pub const WIDGET_CORNER_RADIUS: u8 = 6;

/// The form's style on top of `base`: flat dark panel, pattern editor and
/// preview block on the code background, larger monospace text.
pub fn form_style(base: &egui::Style) -> egui::Style {
    let mut style = base.clone();
    let visuals = &mut style.visuals;

    visuals.panel_fill = PANEL;
    visuals.window_fill = PANEL;
    // TextEdit::code_editor and the preview block both draw on this.
    visuals.extreme_bg_color = CODE_BG;
    visuals.code_bg_color = CODE_BG;
    visuals.error_fg_color = TEXT_ERROR;
    visuals.selection.bg_fill = PRIMARY;
    visuals.selection.stroke = egui::Stroke::new(1.0, PRIMARY);

    let radius = egui::CornerRadius::same(WIDGET_CORNER_RADIUS);
    for (widget, fill) in [
        (&mut visuals.widgets.inactive, INACTIVE),
        (&mut visuals.widgets.hovered, HOVER),
        (&mut visuals.widgets.active, PRIMARY),
    ] {
        widget.bg_fill = fill;
        widget.weak_bg_fill = fill;
        widget.corner_radius = radius;
    }
    visuals.widgets.noninteractive.bg_fill = PANEL;
    visuals.widgets.noninteractive.corner_radius = radius;

    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(FONT_BODY));
    style
        .text_styles
        .insert(egui::TextStyle::Button, egui::FontId::proportional(FONT_BODY));
    style
        .text_styles
        .insert(egui::TextStyle::Monospace, egui::FontId::monospace(FONT_CODE));
    style.spacing.item_spacing.y = 8.0;

    style
}

pub fn apply_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let style = form_style(&ctx.style());
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_style_code_surfaces_share_background() {
        let style = form_style(&egui::Style::default());
        assert_eq!(style.visuals.extreme_bg_color, CODE_BG);
        assert_eq!(style.visuals.code_bg_color, CODE_BG);
    }

    #[test]
    fn test_form_style_errors_use_error_color() {
        let style = form_style(&egui::Style::default());
        assert_eq!(style.visuals.error_fg_color, TEXT_ERROR);
    }

    #[test]
    fn test_form_style_monospace_size() {
        let style = form_style(&egui::Style::default());
        assert_eq!(
            style.text_styles.get(&egui::TextStyle::Monospace),
            Some(&egui::FontId::monospace(FONT_CODE))
        );
    }

    #[test]
    fn test_form_style_widget_fills() {
        let style = form_style(&egui::Style::default());
        assert_eq!(style.visuals.widgets.inactive.bg_fill, INACTIVE);
        assert_eq!(style.visuals.widgets.hovered.weak_bg_fill, HOVER);
        assert_eq!(style.visuals.widgets.active.bg_fill, PRIMARY);
        assert_eq!(
            style.visuals.widgets.active.corner_radius,
            egui::CornerRadius::same(WIDGET_CORNER_RADIUS)
        );
    }
}

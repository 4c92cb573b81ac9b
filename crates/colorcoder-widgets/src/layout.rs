//! Layout helpers for the tool window: rules, captions, error banners.

use egui::{CornerRadius, Frame, Margin, RichText, Stroke, Ui};

use crate::{sizing, theme};

/// Full-width horizontal rule between window sections.
pub fn separator(ui: &mut Ui) {
    ui.add_space(4.0);
    let left = ui.min_rect().left();
    let right = ui.max_rect().right();
    let y = ui.cursor().top();
    ui.painter()
        .hline(left..=right, y, Stroke::new(1.0, theme::BORDER));
    ui.add_space(4.0);
}

/// Small muted caption above a group of controls.
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(10.0).color(theme::TEXT_MUTED));
}

/// Red banner under the control that caused `message`. `None` draws nothing
/// and takes no space, so the layout does not jump when a banner clears.
pub fn error_banner(ui: &mut Ui, message: Option<&str>) {
    let Some(message) = message else {
        return;
    };
    Frame::new()
        .fill(theme::ERROR.gamma_multiply(0.08))
        .stroke(Stroke::new(1.0, theme::ERROR.gamma_multiply(0.4)))
        .corner_radius(CornerRadius::same(sizing::CORNER_RADIUS))
        .inner_margin(Margin::symmetric(6, 3))
        .show(ui, |ui| {
            ui.label(RichText::new(message).size(11.0).color(theme::ERROR));
        });
}

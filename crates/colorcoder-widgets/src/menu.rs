//! Drop-down pieces of the tool window's File menu.

use egui::{Align2, Color32, CornerRadius, CursorIcon, FontId, Frame, Margin, Sense, Stroke, Ui, vec2};

use crate::{sizing, theme};

const ROW_HEIGHT: f32 = 24.0;

/// One clickable row of a drop-down menu, with an optional muted hint on the
/// right (a file name, an extension filter).
pub struct MenuRow<'a> {
    label: &'a str,
    hint: Option<&'a str>,
    enabled: bool,
}

impl<'a> MenuRow<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            hint: None,
            enabled: true,
        }
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Returns true when an enabled row was clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let sense = if self.enabled { Sense::click() } else { Sense::hover() };
        let (rect, response) = ui.allocate_exact_size(vec2(ui.available_width(), ROW_HEIGHT), sense);

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            if self.enabled && response.hovered() {
                painter.rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), theme::HOVER_BG);
            }
            let color = if self.enabled { theme::TEXT } else { theme::TEXT_MUTED.gamma_multiply(0.6) };
            painter.text(
                rect.left_center() + vec2(8.0, 0.0),
                Align2::LEFT_CENTER,
                self.label,
                FontId::proportional(13.0),
                color,
            );
            if let Some(hint) = self.hint {
                painter.text(
                    rect.right_center() - vec2(8.0, 0.0),
                    Align2::RIGHT_CENTER,
                    hint,
                    FontId::proportional(11.0),
                    theme::TEXT_MUTED,
                );
            }
        }

        self.enabled && response.on_hover_cursor(CursorIcon::PointingHand).clicked()
    }
}

/// Thin rule between groups of menu rows.
pub fn menu_separator(ui: &mut Ui) {
    ui.add_space(3.0);
    let rect = ui.available_rect_before_wrap();
    ui.painter().hline(
        rect.left() + 6.0..=rect.right() - 6.0,
        rect.top(),
        Stroke::new(1.0, theme::BORDER),
    );
    ui.add_space(3.0);
}

/// Frame drawn behind an open drop-down.
pub fn dropdown_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .stroke(Stroke::new(1.0, theme::BORDER))
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .shadow(egui::epaint::Shadow {
            offset: [0, 3],
            blur: 10,
            spread: 0,
            color: Color32::from_black_alpha(20),
        })
        .inner_margin(Margin::same(6))
}

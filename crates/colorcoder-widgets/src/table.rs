//! Cells for the color-name table.

use egui::{vec2, Align2, Color32, CornerRadius, CursorIcon, FontId, Pos2, Sense, Stroke, StrokeKind, Ui};

use crate::{sizing, theme};

/// One selectable cell of the name table. Empty cells are drawn but not clickable.
pub struct NameCell<'a> {
    text: Option<&'a str>,
    selected: bool,
}

impl<'a> NameCell<'a> {
    /// A cell showing `text`, or an empty cell for `None`.
    pub fn new(text: Option<&'a str>) -> Self {
        Self {
            text,
            selected: false,
        }
    }

    /// Set whether this cell is the current selection.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the cell and return true if an occupied cell was clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let sense = if self.text.is_some() {
            Sense::click()
        } else {
            Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(vec2(sizing::COLOR_BUTTON_WIDTH, sizing::CELL_HEIGHT), sense);

        if ui.is_rect_visible(rect) {
            let bg = if self.selected {
                theme::SELECTED_BG
            } else if self.text.is_some() && response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::WHITE
            };
            ui.painter().rect_filled(rect, CornerRadius::ZERO, bg);
            ui.painter().rect_stroke(
                rect,
                CornerRadius::ZERO,
                Stroke::new(1.0, theme::BORDER),
                StrokeKind::Inside,
            );
            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    CornerRadius::same(sizing::CORNER_RADIUS),
                    Stroke::new(1.5, theme::ACCENT),
                    StrokeKind::Inside,
                );
            }

            if let Some(text) = self.text {
                ui.painter().text(
                    Pos2::new(rect.left() + 8.0, rect.center().y),
                    Align2::LEFT_CENTER,
                    text,
                    FontId::proportional(12.0),
                    theme::TEXT,
                );
            }
        }

        if self.text.is_none() {
            return false;
        }
        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

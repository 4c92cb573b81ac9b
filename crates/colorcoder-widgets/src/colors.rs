//! Color buttons and the live preview swatch.

use egui::{
    vec2, Align2, Color32, CornerRadius, CursorIcon, FontId, Pos2, Rect, Sense, Stroke, StrokeKind,
    Ui, Vec2,
};

use crate::{sizing, theme};

/// Convert normalized RGB (0.0-1.0 per channel) to an egui color.
pub fn from_unit_rgb(rgb: [f64; 3]) -> Color32 {
    let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgb(channel(rgb[0]), channel(rgb[1]), channel(rgb[2]))
}

/// Black or white, whichever reads better on `background`.
pub fn contrast_text(background: Color32) -> Color32 {
    let luma = 0.299 * f32::from(background.r())
        + 0.587 * f32::from(background.g())
        + 0.114 * f32::from(background.b());
    if luma > 140.0 {
        Color32::from_gray(20)
    } else {
        Color32::WHITE
    }
}

/// A palette color button: a filled rounded rect labelled with the color name.
pub struct ColorButton<'a> {
    color: Color32,
    label: &'a str,
    tooltip: Option<&'a str>,
    size: Vec2,
}

impl<'a> ColorButton<'a> {
    /// Create a new color button.
    pub fn new(color: Color32, label: &'a str) -> Self {
        Self {
            color,
            label,
            tooltip: None,
            size: vec2(sizing::COLOR_BUTTON_WIDTH, sizing::COLOR_BUTTON_HEIGHT),
        }
    }

    /// Set the hover text.
    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            ui.painter().rect_filled(rect, radius, self.color);

            let border = if response.hovered() {
                Stroke::new(2.0, theme::ACCENT)
            } else {
                Stroke::new(1.0, theme::BORDER)
            };
            ui.painter().rect_stroke(rect, radius, border, StrokeKind::Inside);

            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                FontId::proportional(12.0),
                contrast_text(self.color),
            );
        }

        let clicked = response.clicked();
        let response = response.on_hover_cursor(CursorIcon::PointingHand);
        if let Some(tooltip) = self.tooltip {
            response.on_hover_text(tooltip);
        }
        clicked
    }
}

/// The "no color" button (white with a red diagonal).
pub struct NoColorButton<'a> {
    tooltip: &'a str,
    size: Vec2,
}

impl<'a> NoColorButton<'a> {
    /// Create a new "no color" button.
    pub fn new(tooltip: &'a str) -> Self {
        Self {
            tooltip,
            size: vec2(sizing::COLOR_BUTTON_WIDTH, sizing::COLOR_BUTTON_HEIGHT),
        }
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            ui.painter().rect_filled(rect, radius, Color32::WHITE);
            ui.painter().rect_stroke(
                rect,
                radius,
                Stroke::new(1.0, Color32::from_gray(200)),
                StrokeKind::Inside,
            );

            let inset = rect.shrink(6.0);
            ui.painter().line_segment(
                [inset.left_bottom(), inset.right_top()],
                Stroke::new(2.0, Color32::from_rgb(239, 68, 68)),
            );

            if response.hovered() {
                ui.painter()
                    .rect_stroke(rect, radius, Stroke::new(2.0, theme::ACCENT), StrokeKind::Inside);
            }
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// Live preview of the color being built: a scene frame plus "Visible" and
/// "Hidden" labels drawn in the outliner styles.
pub struct PreviewSwatch {
    scene: Color32,
    visible_label: Color32,
    hidden_label: Color32,
    size: Vec2,
}

impl PreviewSwatch {
    /// Create a preview from the three preview colors.
    pub fn new(scene: Color32, visible_label: Color32, hidden_label: Color32) -> Self {
        Self {
            scene,
            visible_label,
            hidden_label,
            size: vec2(220.0, 60.0),
        }
    }

    /// Show the preview.
    pub fn show(self, ui: &mut Ui) -> Rect {
        let (rect, _) = ui.allocate_exact_size(self.size, Sense::hover());

        if ui.is_rect_visible(rect) {
            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            let (labels, frame) = rect.split_left_right_at_fraction(0.5);

            ui.painter().rect_filled(labels, radius, theme::PREVIEW_BG);
            let font = FontId::proportional(13.0);
            ui.painter().text(
                Pos2::new(labels.left() + 10.0, labels.top() + labels.height() * 0.3),
                Align2::LEFT_CENTER,
                "Visible",
                font.clone(),
                self.visible_label,
            );
            ui.painter().text(
                Pos2::new(labels.left() + 10.0, labels.top() + labels.height() * 0.7),
                Align2::LEFT_CENTER,
                "Hidden",
                font,
                self.hidden_label,
            );

            let frame = frame.shrink2(vec2(6.0, 0.0));
            ui.painter().rect_filled(frame, radius, self.scene);
            ui.painter().rect_stroke(
                frame,
                radius,
                Stroke::new(1.0, theme::BORDER),
                StrokeKind::Inside,
            );
        }

        rect
    }
}

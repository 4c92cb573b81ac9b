//! egui widgets for the ColorCoder palette tool.
//!
//! - **Colors**: color buttons, the "no color" button, the HSV preview swatch
//! - **Table**: selectable name cells for the delete table
//! - **Menu**: File menu rows, separators, drop-down frame
//! - **Layout**: section labels, separators, error banners

pub mod colors;
pub mod layout;
pub mod menu;
pub mod table;

pub use colors::{ColorButton, NoColorButton, PreviewSwatch, contrast_text, from_unit_rgb};
pub use layout::{error_banner, section_label, separator};
pub use menu::{MenuRow, dropdown_frame, menu_separator};
pub use table::NameCell;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Minimum height of a color button
    pub const COLOR_BUTTON_HEIGHT: f32 = 45.0;
    /// Width of a color button
    pub const COLOR_BUTTON_WIDTH: f32 = 96.0;
    /// Height of a name table cell
    pub const CELL_HEIGHT: f32 = 24.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Selected background
    pub const SELECTED_BG: Color32 = Color32::from_rgb(235, 245, 255);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
    /// Error text
    pub const ERROR: Color32 = Color32::from_rgb(220, 38, 38);
    /// Dark background behind the preview labels
    pub const PREVIEW_BG: Color32 = Color32::from_rgb(43, 43, 43);
}

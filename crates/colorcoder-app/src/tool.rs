//! The palette tool window's state: the presentation side of the controller.
//!
//! The button grid and the name table are kept as [`CellTable`]s and only ever
//! changed by replaying the placements and reflows the controller reports, so
//! they stay in lockstep with the palette order.

use colorcoder_core::storage::StorageResult;
use colorcoder_core::{
    Banners, Cell, CellTable, ColorApplier, ColorEntry, DocumentStorage, PaletteController,
    Preview, SaveOption,
};
use colorcoder_widgets::from_unit_rgb;
use egui::Color32;

use crate::ui::{Tab, UiAction};

/// A rendered color button.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorButtonCell {
    pub name: String,
    pub color: Color32,
}

impl From<&ColorEntry> for ColorButtonCell {
    fn from(entry: &ColorEntry) -> Self {
        Self {
            name: entry.name.clone(),
            color: from_unit_rgb(entry.scene_color.to_array()),
        }
    }
}

/// Slider and text-field state of the "new color" form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewColorForm {
    pub name: String,
    /// Degrees, 0-360.
    pub hue: f64,
    /// Percent, 0-100.
    pub saturation: f64,
    /// Percent, 0-100.
    pub value: f64,
}

impl Default for NewColorForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            hue: 0.0,
            saturation: 100.0,
            value: 100.0,
        }
    }
}

/// One palette tool instance.
pub struct ToolWindow {
    controller: PaletteController,
    buttons: CellTable<ColorButtonCell>,
    names: CellTable<String>,
    pub form: NewColorForm,
    /// Current cell in the name table.
    pub selected: Option<Cell>,
    pub tab: Tab,
    pub menu_open: bool,
    /// Last save/load/apply report.
    pub status: Option<String>,
}

impl ToolWindow {
    /// Load the palette and build the grids.
    pub fn open(storage: impl DocumentStorage + 'static) -> StorageResult<Self> {
        let controller = PaletteController::load(storage)?;
        let mut tool = Self {
            controller,
            buttons: CellTable::new(),
            names: CellTable::new(),
            form: NewColorForm::default(),
            selected: None,
            tab: Tab::Colors,
            menu_open: false,
            status: None,
        };
        tool.rebuild();
        Ok(tool)
    }

    pub fn controller(&self) -> &PaletteController {
        &self.controller
    }

    pub fn buttons(&self) -> &CellTable<ColorButtonCell> {
        &self.buttons
    }

    pub fn names(&self) -> &CellTable<String> {
        &self.names
    }

    pub fn banners(&self) -> &Banners {
        self.controller.banners()
    }

    /// Preview colors for the current slider values.
    pub fn preview(&self) -> Preview {
        colorcoder_core::preview(self.form.hue, self.form.saturation, self.form.value)
    }

    /// Name shown in the selected table cell.
    pub fn selected_name(&self) -> Option<&str> {
        self.selected
            .and_then(|cell| self.names.get(cell))
            .map(String::as_str)
    }

    /// Throw away both grids and rebuild them from the palette.
    fn rebuild(&mut self) {
        let rows = self.controller.total_rows();
        self.buttons.clear();
        self.names.clear();
        self.buttons.set_row_count(rows);
        self.names.set_row_count(rows);
        for (cell, entry) in self.controller.cells() {
            self.buttons.put(cell, ColorButtonCell::from(entry));
            self.names.put(cell, entry.name.clone());
        }
        self.selected = None;
    }

    /// React to a UI action. Scene-selection actions are handled by the app.
    pub fn handle<A: ColorApplier + ?Sized>(&mut self, action: UiAction, host: &mut A) {
        match action {
            UiAction::AddColor => self.add_color(),
            UiAction::DeleteSelected => self.delete_selected(),
            UiAction::SelectCell(cell) => {
                self.selected = self.names.get(cell).is_some().then_some(cell);
            }
            UiAction::ApplyColor(name) => {
                if let Err(e) = self.controller.apply_color(&name, host) {
                    log::warn!("Could not apply \"{}\": {}", name, e);
                    self.status = Some(e.to_string());
                }
            }
            UiAction::ClearColor => {
                if let Err(e) = self.controller.clear_color(host) {
                    log::warn!("Could not clear color: {}", e);
                    self.status = Some(e.to_string());
                }
            }
            UiAction::Save(option) => self.save(option),
            UiAction::Reload => {
                self.status = Some(match self.controller.reload() {
                    Ok(()) => {
                        self.rebuild();
                        format!("Reloaded {}", self.controller.storage_description())
                    }
                    Err(e) => format!("Reload failed: {}", e),
                });
            }
            UiAction::OpenPalette => self.open_palette(),
            UiAction::OpenTool | UiAction::ToggleObject(_) => {}
        }
    }

    fn add_color(&mut self) {
        let form = &self.form;
        let Ok(outcome) = self
            .controller
            .add_color(&form.name, form.hue, form.saturation, form.value)
        else {
            return;
        };
        self.buttons
            .apply_placement(&outcome.placement, ColorButtonCell::from(&outcome.entry));
        self.names
            .apply_placement(&outcome.placement, outcome.entry.name);
        self.form.name.clear();
    }

    fn delete_selected(&mut self) {
        let name = self.selected_name().map(str::to_owned);
        let Ok(outcome) = self.controller.delete_selected(name.as_deref()) else {
            return;
        };
        // The removed button is dropped here, which disposes of it.
        self.buttons.apply_reflow(&outcome.reflow);
        self.names.apply_reflow(&outcome.reflow);
        self.selected = None;
    }

    fn save(&mut self, option: SaveOption) {
        self.status = Some(match self.controller.save_changes(option) {
            Ok(()) => format!(
                "Saved {} colors to {}",
                self.controller.palette().len(),
                self.controller.storage_description()
            ),
            Err(e) => format!("Save failed: {}", e),
        });
    }

    #[cfg(feature = "native")]
    fn open_palette(&mut self) {
        let dialog = rfd::FileDialog::new()
            .set_title("Open Palette")
            .add_filter("ColorCoder Palette", &["json"]);
        let Some(path) = dialog.pick_file() else {
            return;
        };
        self.open_path(path);
    }

    #[cfg(not(feature = "native"))]
    fn open_palette(&mut self) {
        log::warn!("Opening palettes needs the native feature");
    }

    /// Switch to the palette file at `path`, keeping the current one on failure.
    pub fn open_path(&mut self, path: impl Into<std::path::PathBuf>) {
        let storage = colorcoder_core::FileStorage::new(path);
        self.status = Some(match self.controller.open(Box::new(storage)) {
            Ok(()) => {
                self.rebuild();
                format!("Opened {}", self.controller.storage_description())
            }
            Err(e) => format!("Open failed: {}", e),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorcoder_core::{ErrorBanner, MemoryStorage, Rgb, SceneHost};

    fn tool_with(count: usize) -> ToolWindow {
        let mut tool = ToolWindow::open(MemoryStorage::with_json("[[]]")).unwrap();
        let mut scene = SceneHost::new();
        for i in 0..count {
            tool.form.name = format!("c{i}");
            tool.form.hue = (i * 40) as f64;
            tool.handle(UiAction::AddColor, &mut scene);
        }
        tool
    }

    fn grid_names(tool: &ToolWindow) -> Vec<(Cell, String)> {
        tool.names()
            .occupied()
            .map(|(cell, name)| (cell, name.clone()))
            .collect()
    }

    fn button_names(tool: &ToolWindow) -> Vec<(Cell, String)> {
        tool.buttons()
            .occupied()
            .map(|(cell, button)| (cell, button.name.clone()))
            .collect()
    }

    #[test]
    fn test_loaded_palette_fills_grids() {
        let json = r#"[[{"a": [[1,0,0],[1,0,0]]}, {"b": [[0,1,0],[0,1,0]]},
                        {"c": [[0,0,1],[0,0,1]]}, {"d": [[1,1,1],[1,1,1]]}]]"#;
        let tool = ToolWindow::open(MemoryStorage::with_json(json)).unwrap();
        assert_eq!(tool.names().row_count(), 2);
        assert_eq!(tool.names().get(Cell::new(1, 0)).map(String::as_str), Some("d"));
        assert_eq!(
            tool.buttons().get(Cell::new(0, 1)).map(|b| b.color),
            Some(Color32::from_rgb(0, 255, 0))
        );
    }

    #[test]
    fn test_add_places_button_and_name() {
        let tool = tool_with(4);
        assert_eq!(tool.buttons().row_count(), 2);
        assert_eq!(tool.names().row_count(), 2);
        assert_eq!(grid_names(&tool), button_names(&tool));
        assert_eq!(
            tool.names().get(Cell::new(1, 0)).map(String::as_str),
            Some("c3")
        );
        assert!(tool.form.name.is_empty());
    }

    #[test]
    fn test_rejected_add_keeps_form() {
        let mut tool = tool_with(1);
        tool.form.name = "C0".to_string();
        tool.handle(UiAction::AddColor, &mut SceneHost::new());
        assert_eq!(tool.form.name, "C0");
        assert!(tool.banners().is_visible(ErrorBanner::ColorName));
        assert_eq!(tool.names().occupied().count(), 1);
    }

    #[test]
    fn test_delete_reflows_both_grids() {
        let mut tool = tool_with(7);
        tool.handle(UiAction::SelectCell(Cell::new(0, 2)), &mut SceneHost::new());
        assert_eq!(tool.selected_name(), Some("c2"));

        tool.handle(UiAction::DeleteSelected, &mut SceneHost::new());

        let expected: Vec<(Cell, String)> = ["c0", "c1", "c3", "c4", "c5", "c6"]
            .iter()
            .enumerate()
            .map(|(i, n)| (Cell::of_index(i), n.to_string()))
            .collect();
        assert_eq!(grid_names(&tool), expected);
        assert_eq!(button_names(&tool), expected);
        assert_eq!(tool.names().row_count(), 2);
        assert_eq!(tool.buttons().row_count(), 2);
        assert_eq!(tool.selected, None);
    }

    #[test]
    fn test_delete_without_selection_shows_banner() {
        let mut tool = tool_with(2);
        tool.handle(UiAction::DeleteSelected, &mut SceneHost::new());
        assert_eq!(
            tool.banners().message(ErrorBanner::SelectedColor),
            Some("Error: No Color was selected.")
        );
        assert_eq!(tool.names().occupied().count(), 2);
    }

    #[test]
    fn test_selecting_empty_cell_clears_selection() {
        let mut tool = tool_with(2);
        tool.handle(UiAction::SelectCell(Cell::new(0, 0)), &mut SceneHost::new());
        tool.handle(UiAction::SelectCell(Cell::new(0, 2)), &mut SceneHost::new());
        assert_eq!(tool.selected, None);
    }

    #[test]
    fn test_apply_and_clear_reach_scene() {
        let mut tool = tool_with(1);
        let mut scene = SceneHost::new();
        let joint = scene.add_object("joint1");
        scene.select([joint]);

        tool.handle(UiAction::ApplyColor("c0".into()), &mut scene);
        let object = scene.object(joint).unwrap();
        assert_eq!(object.override_color.color, Rgb::new(1.0, 0.0, 0.0));
        assert!(object.use_outliner_color);

        tool.handle(UiAction::ClearColor, &mut scene);
        assert!(!scene.object(joint).unwrap().use_outliner_color);

        tool.handle(UiAction::ApplyColor("missing".into()), &mut scene);
        assert!(tool.status.as_deref().unwrap_or_default().contains("missing"));
    }

    #[test]
    fn test_save_and_reload_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        std::fs::write(&path, "[[]]").unwrap();

        let mut tool = ToolWindow::open(colorcoder_core::FileStorage::new(&path)).unwrap();
        tool.form.name = "red".into();
        tool.handle(UiAction::AddColor, &mut SceneHost::new());
        tool.handle(UiAction::Save(SaveOption::Colors), &mut SceneHost::new());
        assert!(tool.status.as_deref().unwrap_or_default().starts_with("Saved 1 colors"));

        tool.form.name = "blue".into();
        tool.handle(UiAction::AddColor, &mut SceneHost::new());
        tool.handle(UiAction::Reload, &mut SceneHost::new());
        assert_eq!(grid_names(&tool), [(Cell::new(0, 0), "red".to_string())]);
    }

    #[test]
    fn test_open_bad_path_keeps_palette() {
        let mut tool = tool_with(3);
        tool.open_path("/definitely/not/here.json");
        assert!(tool.status.as_deref().unwrap_or_default().starts_with("Open failed"));
        assert_eq!(tool.names().occupied().count(), 3);
    }
}

//! egui rendering of the scene panel and the palette tool window.

use colorcoder_core::host::OverrideColor;
use colorcoder_core::{Cell, ErrorBanner, GRID_COLUMNS, ObjectId, SaveOption, SceneHost};
use colorcoder_widgets::{
    ColorButton, MenuRow, NameCell, NoColorButton, PreviewSwatch, dropdown_frame, error_banner,
    from_unit_rgb, menu_separator, section_label, separator, sizing, theme,
};
use egui::{Color32, Context, RichText, Ui, Vec2};

use crate::tool::ToolWindow;

/// Viewport fill of an object without a color override.
const UNCOLORED: Color32 = Color32::from_gray(140);

/// Actions that can be triggered by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Show the palette tool, creating it on first use.
    OpenTool,
    /// Add or remove a scene object from the selection.
    ToggleObject(ObjectId),
    /// Create a color from the form.
    AddColor,
    /// Delete the color selected in the name table.
    DeleteSelected,
    /// Make a name table cell current.
    SelectCell(Cell),
    /// Apply a palette color to the selected objects.
    ApplyColor(String),
    /// Remove color from the selected objects.
    ClearColor,
    /// Write the palette to disk.
    Save(SaveOption),
    /// Re-read the palette file, dropping unsaved edits.
    Reload,
    /// Pick another palette file.
    OpenPalette,
}

/// Pages of the tool window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Colors,
    Manage,
}

/// Render the host side: a menu bar to launch the tool and the scene outliner.
pub fn render_scene_panel(ctx: &Context, scene: &SceneHost, launch_error: Option<&str>) -> Option<UiAction> {
    let mut action = None;

    egui::TopBottomPanel::top("host_menu").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Scene").strong());
            ui.separator();
            if ui.button("Color Coder…").clicked() {
                action = Some(UiAction::OpenTool);
            }
            error_banner(ui, launch_error);
        });
    });

    egui::SidePanel::left("outliner")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            section_label(ui, "OUTLINER");
            ui.add_space(4.0);
            for object in scene.objects() {
                ui.horizontal(|ui| {
                    let mut selected = scene.is_selected(object.id);
                    let label = if object.use_outliner_color {
                        RichText::new(&object.name).color(from_unit_rgb(object.outliner_color.to_array()))
                    } else {
                        RichText::new(&object.name).color(theme::TEXT)
                    };
                    if ui.checkbox(&mut selected, label).changed() {
                        action = Some(UiAction::ToggleObject(object.id));
                    }
                });
            }
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        section_label(ui, "VIEWPORT");
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for object in scene.objects() {
                render_scene_object(ui, scene, object.id);
            }
        });
    });

    action
}

/// Draw one object as it would look in the viewport.
fn render_scene_object(ui: &mut Ui, scene: &SceneHost, id: ObjectId) {
    let Some(object) = scene.object(id) else {
        return;
    };
    // Shapes carry the scene color when there are any, the object otherwise.
    let overrides: Vec<OverrideColor> = if object.shapes.is_empty() {
        vec![object.override_color]
    } else {
        object
            .shapes
            .iter()
            .filter_map(|shape| scene.shape(*shape))
            .map(|shape| shape.override_color)
            .collect()
    };
    let fills: Vec<Color32> = overrides
        .iter()
        .map(|attrs| {
            if attrs.enabled {
                from_unit_rgb(attrs.color.to_array())
            } else {
                UNCOLORED
            }
        })
        .collect();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(&object.name).size(12.0));
            ui.horizontal(|ui| {
                for fill in fills {
                    let (rect, _) = ui.allocate_exact_size(Vec2::splat(28.0), egui::Sense::hover());
                    ui.painter().circle_filled(rect.center(), 12.0, fill);
                }
            });
            if scene.is_selected(id) {
                section_label(ui, "selected");
            }
        });
    });
}

/// Render the palette tool window. Sets `open` to false when the user closes it.
pub fn render_tool_window(ctx: &Context, tool: &mut ToolWindow, open: &mut bool) -> Option<UiAction> {
    let mut action = None;

    egui::Window::new("Color Coder")
        .open(open)
        .resizable(false)
        .default_width(340.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("File").clicked() {
                    tool.menu_open = !tool.menu_open;
                }
                ui.separator();
                ui.selectable_value(&mut tool.tab, Tab::Colors, "Colors");
                ui.selectable_value(&mut tool.tab, Tab::Manage, "Create / Delete");
            });

            if tool.menu_open {
                let description = tool.controller().storage_description();
                let file_name = std::path::Path::new(&description)
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or(&description);
                if let Some(menu_action) = render_file_menu(ui, file_name) {
                    tool.menu_open = false;
                    action = Some(menu_action);
                }
            }

            separator(ui);

            let tab_action = match tool.tab {
                Tab::Colors => render_color_grid(ui, tool),
                Tab::Manage => render_manage_tab(ui, tool),
            };
            action = action.take().or(tab_action);

            separator(ui);
            ui.horizontal(|ui| {
                let controller = tool.controller();
                let mut footer = format!("{} colors", controller.palette().len());
                if controller.is_dirty() {
                    footer.push_str(" (unsaved)");
                }
                section_label(ui, &footer);
                if let Some(status) = &tool.status {
                    section_label(ui, status);
                }
            });
        });

    action
}

fn render_file_menu(ui: &mut Ui, file_name: &str) -> Option<UiAction> {
    let mut action = None;

    dropdown_frame().show(ui, |ui| {
        ui.set_width(200.0);
        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing = Vec2::new(0.0, 2.0);

            section_label(ui, "Save");
            for option in SaveOption::ALL {
                if MenuRow::new(option.label()).hint(file_name).show(ui) {
                    action = Some(UiAction::Save(option));
                }
            }

            menu_separator(ui);

            if MenuRow::new("Reload").show(ui) {
                action = Some(UiAction::Reload);
            }
            let open = MenuRow::new("Open Palette…")
                .hint("*.json")
                .enabled(cfg!(feature = "native"));
            if open.show(ui) {
                action = Some(UiAction::OpenPalette);
            }
        });
    });

    action
}

/// The color buttons, three per row, plus the "no color" button.
fn render_color_grid(ui: &mut Ui, tool: &ToolWindow) -> Option<UiAction> {
    let mut action = None;
    let buttons = tool.buttons();

    egui::Grid::new("color_buttons")
        .spacing(Vec2::new(6.0, 6.0))
        .show(ui, |ui| {
            for row in 0..buttons.row_count() {
                for column in 0..GRID_COLUMNS {
                    match buttons.get(Cell::new(row, column)) {
                        Some(button) => {
                            if ColorButton::new(button.color, &button.name)
                                .tooltip("Apply to selected objects")
                                .show(ui)
                            {
                                action = Some(UiAction::ApplyColor(button.name.clone()));
                            }
                        }
                        None => {
                            ui.allocate_space(Vec2::new(
                                sizing::COLOR_BUTTON_WIDTH,
                                sizing::COLOR_BUTTON_HEIGHT,
                            ));
                        }
                    }
                }
                ui.end_row();
            }
        });

    ui.add_space(6.0);
    if NoColorButton::new("Remove color from selected objects").show(ui) {
        action = Some(UiAction::ClearColor);
    }

    action
}

/// The new-color form and the delete table.
fn render_manage_tab(ui: &mut Ui, tool: &mut ToolWindow) -> Option<UiAction> {
    let mut action = None;

    section_label(ui, "NEW COLOR");
    ui.horizontal(|ui| {
        ui.label("Name");
        ui.text_edit_singleline(&mut tool.form.name);
    });
    error_banner(ui, tool.banners().message(ErrorBanner::ColorName));

    ui.add(egui::Slider::new(&mut tool.form.hue, 0.0..=360.0).integer().text("Hue"));
    ui.add(egui::Slider::new(&mut tool.form.saturation, 0.0..=100.0).integer().text("Saturation"));
    ui.add(egui::Slider::new(&mut tool.form.value, 0.0..=100.0).integer().text("Value"));

    let preview = tool.preview();
    PreviewSwatch::new(
        from_unit_rgb(preview.scene.to_array()),
        from_unit_rgb(preview.visible_label.to_array()),
        from_unit_rgb(preview.hidden_label.to_array()),
    )
    .show(ui);

    if ui.button("Add Color").clicked() {
        action = Some(UiAction::AddColor);
    }

    separator(ui);
    section_label(ui, "EXISTING COLORS");

    let names = tool.names();
    egui::Grid::new("color_names")
        .spacing(Vec2::ZERO)
        .show(ui, |ui| {
            for row in 0..names.row_count() {
                for column in 0..GRID_COLUMNS {
                    let cell = Cell::new(row, column);
                    if NameCell::new(names.get(cell).map(String::as_str))
                        .selected(tool.selected == Some(cell))
                        .show(ui)
                    {
                        action = Some(UiAction::SelectCell(cell));
                    }
                }
                ui.end_row();
            }
        });

    if ui.button("Delete Color").clicked() {
        action = Some(UiAction::DeleteSelected);
    }
    error_banner(ui, tool.banners().message(ErrorBanner::SelectedColor));

    action
}

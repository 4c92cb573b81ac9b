//! Core application state and lifecycle.

use colorcoder_core::{HostError, SceneHost, ToolRegistry};

use crate::config::AppConfig;
use crate::tool::ToolWindow;
use crate::ui::{UiAction, render_scene_panel, render_tool_window};

/// Main application struct: the host scene plus the palette tool registered
/// for this session.
pub struct App {
    config: AppConfig,
    scene: SceneHost,
    tool: ToolRegistry<ToolWindow>,
    /// Why the tool could not be built, shown next to the launch button.
    launch_error: Option<String>,
}

impl App {
    /// Create the application and show the tool once, as on session start.
    pub fn new(config: AppConfig) -> Self {
        let scene = demo_scene().unwrap_or_else(|e| {
            log::error!("Failed to build demo scene: {}", e);
            SceneHost::new()
        });
        let mut app = Self {
            config,
            scene,
            tool: ToolRegistry::new(),
            launch_error: None,
        };
        app.start_up();
        app
    }

    /// Run the application.
    pub fn run(config: AppConfig) -> eframe::Result {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(&config.title)
                .with_inner_size([config.width, config.height]),
            ..Default::default()
        };
        let title = config.title.clone();
        eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(App::new(config)))))
    }

    /// Show the palette tool, building it only if this session has none yet.
    pub fn start_up(&mut self) {
        let config = &self.config;
        let result = self
            .tool
            .show_or_create(|| config.storage().and_then(ToolWindow::open));
        match result {
            Ok(_) => self.launch_error = None,
            Err(e) => {
                log::error!("Could not open the palette: {}", e);
                self.launch_error = Some(e.to_string());
            }
        }
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::OpenTool => self.start_up(),
            UiAction::ToggleObject(id) => self.scene.toggle_selected(id),
            other => {
                if let Some(tool) = self.tool.get_mut() {
                    tool.handle(other, &mut self.scene);
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        actions.extend(render_scene_panel(ctx, &self.scene, self.launch_error.as_deref()));

        if let Some(tool) = self.tool.visible_mut() {
            let mut open = true;
            actions.extend(render_tool_window(ctx, tool, &mut open));
            if !open {
                // Closing only hides the tool; its unsaved edits live on.
                self.tool.hide();
            }
        }

        for action in actions {
            self.handle_action(action);
        }
    }
}

/// A few objects to color: bare transforms and controls with shapes.
fn demo_scene() -> Result<SceneHost, HostError> {
    let mut scene = SceneHost::new();
    scene.add_object("root_jnt");
    scene.add_object("spine_01_jnt");
    let arm = scene.add_object("l_arm_ctrl");
    scene.add_shape(arm, "l_arm_ctrlShape")?;
    let cog = scene.add_object("cog_ctrl");
    scene.add_shape(cog, "cog_ctrlShape")?;
    scene.add_shape(cog, "cog_ctrlShape1")?;
    scene.add_object("locator1");
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorcoder_core::ColorApplier;
    use std::path::PathBuf;

    fn config_for(path: PathBuf) -> AppConfig {
        AppConfig {
            palette_path: Some(path),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_missing_palette_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(config_for(dir.path().join("missing.json")));
        assert!(app.launch_error.is_some());
        assert!(!app.tool.is_created());
    }

    #[test]
    fn test_reopening_keeps_unsaved_edits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        std::fs::write(&path, "[[]]").unwrap();

        let mut app = App::new(config_for(path));
        assert!(app.tool.is_visible());

        if let Some(tool) = app.tool.get_mut() {
            tool.form.name = "teal".into();
        }
        app.handle_action(UiAction::AddColor);
        app.tool.hide();

        app.handle_action(UiAction::OpenTool);
        assert!(app.tool.is_visible());
        let tool = app.tool.get().unwrap();
        assert_eq!(tool.controller().palette().len(), 1);
        assert!(tool.controller().is_dirty());
    }

    #[test]
    fn test_actions_reach_scene() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        std::fs::write(&path, r#"[[{"red": [[1, 0, 0], [1, 0, 0]]}]]"#).unwrap();

        let mut app = App::new(config_for(path));
        let cog = app
            .scene
            .objects()
            .find(|o| o.name == "cog_ctrl")
            .map(|o| o.id)
            .unwrap();
        app.handle_action(UiAction::ToggleObject(cog));
        assert_eq!(app.scene.selection(), vec![cog]);

        app.handle_action(UiAction::ApplyColor("red".into()));
        let object = app.scene.object(cog).unwrap();
        assert!(object.use_outliner_color);
        for shape in &object.shapes {
            assert!(app.scene.shape(*shape).unwrap().override_color.enabled);
        }
    }
}

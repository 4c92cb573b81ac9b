//! ColorCoder Application
//!
//! Desktop shell hosting the palette tool next to a small demo scene the
//! colors are applied to.

mod app;
mod config;
mod tool;
mod ui;

pub use app::App;
pub use config::{AppConfig, PALETTE_ENV};
pub use tool::{ColorButtonCell, NewColorForm, ToolWindow};
pub use ui::{Tab, UiAction, render_scene_panel, render_tool_window};

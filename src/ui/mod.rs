// User interface components
pub mod app;
pub mod config;
pub mod inlet_config_dialog;
pub mod styles;
pub mod ui_panels;
pub mod ui_render;
pub mod ui_text;
pub mod utils;
pub mod zone_edit;

// Re-export main app and the dialog
pub use app::CaseEditorApp;
pub use config::UI_CONFIG;
pub use inlet_config_dialog::{DialogError, DialogOutcome, InletConfigDialog};
pub use zone_edit::{BasicZoneEditor, ZoneEditor};

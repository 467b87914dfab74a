use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::Cli;
use crate::config::DEFAULT_CASE_PATH;
use crate::domain::Case;
use crate::ui::config::UI_TEXT;
use crate::ui::inlet_config_dialog::{DialogOutcome, InletConfigDialog};
use crate::ui::utils::setup_custom_visuals;
use crate::ui::zone_edit::BasicZoneEditor;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Error types for application operations
#[derive(Debug, Clone)]
pub enum AppError {
    /// Case file could not be read or parsed
    CaseLoad(String),
    /// Case file could not be written
    CaseSave(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::CaseLoad(msg) => write!(f, "Could not load case: {}", msg),
            AppError::CaseSave(msg) => write!(f, "Could not save case: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

#[derive(Debug, Clone)]
pub(super) enum StatusMessage {
    Info(String),
    Error(AppError),
}

#[derive(Deserialize, Serialize)]
pub struct CaseEditorApp {
    #[serde(default = "default_case_path")]
    pub(super) case_path: PathBuf,

    // Runtime-only state
    #[serde(skip)]
    pub(super) case: Case,
    #[serde(skip)]
    pub(super) dialog: Option<InletConfigDialog>,
    #[serde(skip)]
    pub(super) zone_editor: BasicZoneEditor,
    #[serde(skip)]
    pub(super) status: Option<StatusMessage>,
}

fn default_case_path() -> PathBuf {
    PathBuf::from(DEFAULT_CASE_PATH)
}

impl Default for CaseEditorApp {
    fn default() -> Self {
        Self {
            case_path: default_case_path(),
            case: Case::default(),
            dialog: None,
            zone_editor: BasicZoneEditor,
            status: None,
        }
    }
}

impl CaseEditorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, args: &Cli) -> Self {
        let mut app: CaseEditorApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        // Command line wins over the remembered path
        if let Some(path) = &args.case {
            app.case_path = path.clone();
        }

        if args.new {
            app.case = Case::default();
        } else {
            app.load_case();
        }

        app
    }

    pub(super) fn load_case(&mut self) {
        if !self.case_path.exists() {
            self.case = Case::default();
            self.status = Some(StatusMessage::Info(format!(
                "{}: {}",
                UI_TEXT.new_case,
                self.case_path.display()
            )));
            return;
        }

        match Case::load(&self.case_path) {
            Ok(case) => {
                self.case = case;
                self.status = None;
            }
            Err(err) => {
                log::error!("{:#}", err);
                self.case = Case::default();
                self.status = Some(StatusMessage::Error(AppError::CaseLoad(format!(
                    "{:#}",
                    err
                ))));
            }
        }
    }

    pub(super) fn save_case(&mut self) {
        self.status = Some(match self.case.save(&self.case_path) {
            Ok(()) => StatusMessage::Info(format!(
                "{}: {}",
                UI_TEXT.case_saved,
                self.case_path.display()
            )),
            Err(err) => {
                log::error!("{:#}", err);
                StatusMessage::Error(AppError::CaseSave(format!("{:#}", err)))
            }
        });
    }

    pub(super) fn open_inlet_outlet_dialog(&mut self) {
        if self.dialog.is_none() {
            self.dialog = Some(InletConfigDialog::open(&self.case.inlet_outlet));
        }
    }

    pub(super) fn render_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };

        let outcome = dialog.show(ctx, &mut self.zone_editor, &mut self.case.inlet_outlet);
        if outcome != DialogOutcome::Open {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Inlet/outlet dialog closed: {:?}", outcome);
            }
            self.dialog = None;
        }
    }
}

impl eframe::App for CaseEditorApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.dialog.take().is_some() {
            log::warn!("Exiting with the inlet/outlet dialog open; its changes were discarded");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &*self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Everything outside the dialog is inert while it is open
        let dialog_open = self.dialog.is_some();
        self.render_top_panel(ctx, dialog_open);
        self.render_central_panel(ctx, dialog_open);
        self.render_dialog(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_case_path() -> PathBuf {
        std::env::temp_dir().join(format!("inlet_config_app_{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn missing_case_file_starts_a_new_case() {
        let mut app = CaseEditorApp {
            case_path: temp_case_path(),
            ..Default::default()
        };
        app.case.name = "stale".to_string();

        app.load_case();

        assert_eq!(app.case, Case::default());
        assert!(matches!(app.status, Some(StatusMessage::Info(_))));
    }

    #[test]
    fn unreadable_case_file_reports_load_error() {
        let path = temp_case_path();
        std::fs::write(&path, "not json").unwrap();
        let mut app = CaseEditorApp {
            case_path: path.clone(),
            ..Default::default()
        };

        app.load_case();
        let _ = std::fs::remove_file(&path);

        assert!(matches!(
            app.status,
            Some(StatusMessage::Error(AppError::CaseLoad(_)))
        ));
    }

    #[test]
    fn saved_case_is_loaded_back() {
        let path = temp_case_path();
        let mut app = CaseEditorApp {
            case_path: path.clone(),
            ..Default::default()
        };
        app.case.inlet_outlet.resizetime = 3.0;
        app.save_case();
        assert!(matches!(app.status, Some(StatusMessage::Info(_))));

        let mut reopened = CaseEditorApp {
            case_path: path.clone(),
            ..Default::default()
        };
        reopened.load_case();
        let _ = std::fs::remove_file(&path);

        assert_eq!(reopened.case.inlet_outlet.resizetime, 3.0);
    }

    #[test]
    fn dialog_opens_once_on_the_case_settings() {
        let mut app = CaseEditorApp::default();
        app.case.inlet_outlet.zones.push(crate::domain::InletOutletZone::new());

        app.open_inlet_outlet_dialog();
        app.open_inlet_outlet_dialog();

        let dialog = app.dialog.as_ref().unwrap();
        assert!(dialog.is_open());
        assert_eq!(dialog.rows().len(), 1);
    }
}

// Core modules
pub mod config;
pub mod domain;
pub mod ui;

// Re-export commonly used types
pub use domain::{Case, DetermLimit, ExtrapolateMode, InletOutletConfig, InletOutletZone};
pub use ui::{CaseEditorApp, InletConfigDialog};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Case file to open (defaults to the last opened case, then case.json)
    #[arg(long)]
    pub case: Option<PathBuf>,

    /// Start from an empty case instead of loading the case file
    #[arg(long, default_value_t = false)]
    pub new: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, args: &Cli) -> Box<dyn eframe::App> {
    Box::new(ui::CaseEditorApp::new(cc, args))
}

//! Configuration module for the inlet/outlet configuration tool.

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod dialog;
pub mod persistence;

// Re-export commonly used items
pub use dialog::{DEFAULT_RESIZE_TIME, DEFAULT_ZONE_LAYERS, DIALOG};
pub use persistence::{APP_STATE_PATH, DEFAULT_CASE_PATH};

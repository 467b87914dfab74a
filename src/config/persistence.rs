//! File persistence configuration

/// Case file opened when no `--case` argument is given
pub const DEFAULT_CASE_PATH: &str = "case.json";

// App state persistence
/// Path for saving/loading application UI state
pub const APP_STATE_PATH: &str = ".states.json";

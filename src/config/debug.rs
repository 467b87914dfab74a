//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep noisy ones `false` by default so
//! release builds remain quiet. Every flag is further gated by
//! `cfg(debug_assertions)` at the call site.

pub struct DebugFlags {
    /// Emit UI interaction logs (dialog open/close, add/delete zone).
    pub print_ui_interactions: bool,
    /// Emit a trace whenever a zone edit sub-dialog is opened or closed.
    pub print_zone_edits: bool,
    /// Emit case file load/save details.
    pub print_case_serde: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_zone_edits: true,
    print_case_serde: false,
};

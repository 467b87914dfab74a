//! Inlet/Outlet dialog geometry and defaults

pub struct DialogConfig {
    pub minimum_width: f32,
    pub minimum_height: f32,
    // Height of one zone row inside the zones list
    pub row_height: f32,
    // Max height of the scrollable zones list before it starts scrolling
    pub zones_list_max_height: f32,
}

pub const DIALOG: DialogConfig = DialogConfig {
    minimum_width: 570.0,
    minimum_height: 630.0,
    row_height: 64.0,
    zones_list_max_height: 420.0,
};

/// Resize time used for a freshly created case
pub const DEFAULT_RESIZE_TIME: f64 = 0.5;

/// Number of particle layers a new zone starts with
pub const DEFAULT_ZONE_LAYERS: u32 = 4;

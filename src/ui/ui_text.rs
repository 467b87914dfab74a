//! User visible strings. Swap `UI_TEXT` to localise the tool.

pub struct UiText {
    pub app_title: &'static str,

    // Host window
    pub open_inlet_outlet_button: &'static str,
    pub save_case_button: &'static str,
    pub case_heading: &'static str,
    pub case_saved: &'static str,
    pub new_case: &'static str,
    pub no_zones: &'static str,

    // Inlet/Outlet dialog
    pub dialog_title: &'static str,
    pub resize_time_label: &'static str,
    pub extrapolate_mode_label: &'static str,
    pub determ_limit_label: &'static str,
    pub zones_group_heading: &'static str,
    pub add_zone_button: &'static str,
    pub zone_label_prefix: &'static str,
    pub edit_button: &'static str,
    pub delete_button: &'static str,
    pub finish_button: &'static str,
    pub cancel_button: &'static str,

    // Zone editor
    pub zone_edit_title: &'static str,
    pub zone_layers_label: &'static str,
    pub zone_direction_label: &'static str,
    pub zone_convert_fluid_label: &'static str,
    pub zone_edit_done_button: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Inlet/Outlet Case Editor",

    open_inlet_outlet_button: "Inlet/Outlet configuration...",
    save_case_button: "Save case",
    case_heading: "Case",
    case_saved: "Case saved",
    new_case: "New case, will be saved to",
    no_zones: "No inlet/outlet zones defined",

    dialog_title: "Inlet/Outlet configuration",
    resize_time_label: "Resizetime: ",
    extrapolate_mode_label: "Extrapolate mode: ",
    determ_limit_label: "Determlimit: ",
    zones_group_heading: "Inlet/Outlet zones",
    add_zone_button: "Add a new zone...",
    zone_label_prefix: "Inlet/Outlet Zone",
    edit_button: "Edit",
    delete_button: "Delete",
    finish_button: "Close",
    cancel_button: "Cancel",

    zone_edit_title: "Inlet/Outlet zone",
    zone_layers_label: "Layers: ",
    zone_direction_label: "Direction (x, y, z): ",
    zone_convert_fluid_label: "Convert fluid entering the zone",
    zone_edit_done_button: "OK",
};

use eframe::egui::{Context, RichText, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Caption text for form fields and group titles
pub fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Dark theme with the dialog and panel fills from `UI_CONFIG`
pub fn setup_custom_visuals(ctx: &Context) {
    let colors = &UI_CONFIG.colors;
    let mut visuals = Visuals::dark();

    visuals.window_fill = colors.dialog;
    visuals.panel_fill = colors.central_panel;

    visuals.widgets.noninteractive.fg_stroke.color = colors.label;
    visuals.widgets.inactive.fg_stroke.color = colors.label;
    for state in [&mut visuals.widgets.hovered, &mut visuals.widgets.active] {
        state.fg_stroke.color = colors.heading;
    }

    ctx.set_visuals(visuals);
}

/// Page title for the host window, shown as e.g. "CASE:"
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    let title = format!("{}:", text.into().to_uppercase());
    ui.add_space(10.0);
    ui.heading(RichText::new(title).monospace().color(UI_CONFIG.colors.heading));
    ui.add_space(5.0);
}

pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);
}

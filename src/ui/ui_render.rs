use eframe::egui::{CentralPanel, Color32, Context, Frame, Margin, ScrollArea, TopBottomPanel};

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{section_heading, spaced_separator};

use super::app::{CaseEditorApp, StatusMessage};

impl CaseEditorApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context, dialog_open: bool) {
        let top_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::top("menu_panel")
            .frame(top_frame)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!dialog_open, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button(UI_TEXT.open_inlet_outlet_button).clicked() {
                            self.open_inlet_outlet_dialog();
                        }
                        if ui.button(UI_TEXT.save_case_button).clicked() {
                            self.save_case();
                        }
                        ui.separator();
                        ui.label_subdued(self.case_path.display().to_string());
                    });
                });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context, dialog_open: bool) {
        CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!dialog_open, |ui| {
                section_heading(ui, UI_TEXT.case_heading);
                if !self.case.name.is_empty() {
                    ui.label_subheader(self.case.name.as_str());
                }

                let io = &self.case.inlet_outlet;
                let value_color = Color32::from_rgb(180, 200, 255);
                ui.metric(
                    UI_TEXT.resize_time_label,
                    &io.resizetime.to_string(),
                    value_color,
                );
                ui.metric(
                    UI_TEXT.extrapolate_mode_label,
                    &io.extrapolatemode.to_string(),
                    value_color,
                );
                ui.metric(
                    UI_TEXT.determ_limit_label,
                    io.determlimit.label(),
                    value_color,
                );

                spaced_separator(ui);
                ui.label_subheader(UI_TEXT.zones_group_heading);
                if io.zones.is_empty() {
                    ui.label_subdued(UI_TEXT.no_zones);
                } else {
                    ScrollArea::vertical()
                        .id_salt("case_zones")
                        .show(ui, |ui| {
                            for (index, zone) in io.zones.iter().enumerate() {
                                ui.label_subdued(format!(
                                    "{} {}: {} ({} layers)",
                                    UI_TEXT.zone_label_prefix,
                                    index + 1,
                                    zone.id,
                                    zone.layers
                                ));
                            }
                        });
                }

                if let Some(status) = &self.status {
                    spaced_separator(ui);
                    match status {
                        StatusMessage::Info(msg) => ui.label_subdued(msg.as_str()),
                        StatusMessage::Error(err) => ui.label_error(err.to_string()),
                    }
                }
            });
        });
    }
}

use eframe::egui::{Align, ComboBox, Frame, Layout, Margin, TextEdit, Ui};
use strum::IntoEnumIterator;
use uuid::Uuid;

use crate::config::DIALOG;
use crate::domain::{DetermLimit, ExtrapolateMode, InletOutletZone};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::utils::colored_subsection_heading;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Requests a zone row sends to whoever owns the zone list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneRowEvent {
    EditRequested(Uuid),
    DeleteRequested(Uuid),
}

/// One line of the zones list: label, then Edit and Delete buttons
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRow {
    label: String,
    zone_id: Uuid,
}

impl ZoneRow {
    /// `index` is 0-based; the label shows it 1-based.
    pub fn new(index: usize, zone: &InletOutletZone) -> Self {
        Self {
            label: format!("{} {}", UI_TEXT.zone_label_prefix, index + 1),
            zone_id: zone.id,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn zone_id(&self) -> Uuid {
        self.zone_id
    }
}

impl Panel for ZoneRow {
    type Event = ZoneRowEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        Frame::new()
            .fill(UI_CONFIG.colors.zone_row)
            .inner_margin(Margin::symmetric(8, 4))
            .show(ui, |ui| {
                ui.set_min_height(DIALOG.row_height);
                ui.horizontal_centered(|ui| {
                    ui.label(self.label.as_str());
                    // Right-to-left, so Delete is added first to end up last
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button(UI_TEXT.delete_button).clicked() {
                            events.push(ZoneRowEvent::DeleteRequested(self.zone_id));
                        }
                        if ui.button(UI_TEXT.edit_button).clicked() {
                            events.push(ZoneRowEvent::EditRequested(self.zone_id));
                        }
                    });
                });
            });
        events
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsEvent {
    ExtrapolateMode(usize),
    DetermLimit(usize),
}

/// The row of global options at the top of the dialog.
/// Resize time is edited in place; selector changes come back as events.
pub struct OptionsPanel<'a> {
    resize_time_text: &'a mut String,
    extrapolate_index: usize,
    determ_limit_index: usize,
}

impl<'a> OptionsPanel<'a> {
    pub fn new(
        resize_time_text: &'a mut String,
        extrapolate_index: usize,
        determ_limit_index: usize,
    ) -> Self {
        Self {
            resize_time_text,
            extrapolate_index,
            determ_limit_index,
        }
    }

    fn render_resize_time(&mut self, ui: &mut Ui) {
        ui.label(colored_subsection_heading(UI_TEXT.resize_time_label));
        ui.add(TextEdit::singleline(self.resize_time_text).desired_width(70.0));
    }

    fn render_extrapolate_selector(&mut self, ui: &mut Ui) -> Option<usize> {
        let mut changed = None;
        let selected_text = ExtrapolateMode::from_selector_index(self.extrapolate_index)
            .map(|mode| mode.to_string())
            .unwrap_or_default();

        ui.label(colored_subsection_heading(UI_TEXT.extrapolate_mode_label));
        ComboBox::from_id_salt("extrapolate_mode")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for mode in ExtrapolateMode::iter() {
                    if ui
                        .selectable_value(
                            &mut self.extrapolate_index,
                            mode.selector_index(),
                            mode.to_string(),
                        )
                        .clicked()
                    {
                        changed = Some(self.extrapolate_index);
                    }
                }
            });
        changed
    }

    fn render_determ_limit_selector(&mut self, ui: &mut Ui) -> Option<usize> {
        let mut changed = None;
        let selected_text = DetermLimit::from_selector_index(self.determ_limit_index)
            .map(DetermLimit::label)
            .unwrap_or_default();

        ui.label(colored_subsection_heading(UI_TEXT.determ_limit_label));
        ComboBox::from_id_salt("determ_limit")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for limit in DetermLimit::iter() {
                    if ui
                        .selectable_value(
                            &mut self.determ_limit_index,
                            limit.selector_index(),
                            limit.label(),
                        )
                        .clicked()
                    {
                        changed = Some(self.determ_limit_index);
                    }
                }
            });
        changed
    }
}

impl<'a> Panel for OptionsPanel<'a> {
    type Event = OptionsEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            self.render_resize_time(ui);
            ui.separator();
            if let Some(index) = self.render_extrapolate_selector(ui) {
                events.push(OptionsEvent::ExtrapolateMode(index));
            }
            ui.separator();
            if let Some(index) = self.render_determ_limit_selector(ui) {
                events.push(OptionsEvent::DetermLimit(index));
            }
        });
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_row_label_is_one_based() {
        let zone = InletOutletZone::new();
        let row = ZoneRow::new(0, &zone);
        assert_eq!(row.label(), "Inlet/Outlet Zone 1");
        assert_eq!(row.zone_id(), zone.id);

        let row = ZoneRow::new(6, &zone);
        assert_eq!(row.label(), "Inlet/Outlet Zone 7");
    }
}

use eframe::egui::{Context, DragValue, Id, Window};

use crate::domain::InletOutletZone;
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;

/// Sub-dialog that edits a single zone in place.
pub trait ZoneEditor {
    /// Renders the editor for `zone`. Returns `true` once the user is done with it.
    fn show(&mut self, ctx: &Context, zone: &mut InletOutletZone) -> bool;
}

/// Plain egui editor for the per-zone fields
#[derive(Default)]
pub struct BasicZoneEditor;

impl ZoneEditor for BasicZoneEditor {
    fn show(&mut self, ctx: &Context, zone: &mut InletOutletZone) -> bool {
        let mut open = true;
        let mut done = false;

        Window::new(UI_TEXT.zone_edit_title)
            .id(Id::new(("zone_edit", zone.id)))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label_subdued(zone.id.to_string());
                ui.add_space(5.0);

                ui.horizontal(|ui| {
                    ui.label(UI_TEXT.zone_layers_label);
                    ui.add(DragValue::new(&mut zone.layers).range(1..=64));
                });

                ui.horizontal(|ui| {
                    ui.label(UI_TEXT.zone_direction_label);
                    for component in zone.direction.iter_mut() {
                        ui.add(DragValue::new(component).speed(0.1));
                    }
                });

                ui.checkbox(&mut zone.convert_fluid, UI_TEXT.zone_convert_fluid_label);

                ui.add_space(10.0);
                if ui.button(UI_TEXT.zone_edit_done_button).clicked() {
                    done = true;
                }
            });

        done || !open
    }
}

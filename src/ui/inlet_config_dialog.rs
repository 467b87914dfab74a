//! Inlet/Outlet configuration dialog.
//!
//! The dialog works on a staged copy of the case's [`InletOutletConfig`]:
//! option edits and zone add/edit/delete only touch the copy, and
//! [`InletConfigDialog::finish`] writes everything back in one go. Cancel
//! (button or window close) drops the copy.

use eframe::egui::{Align, Context, Id, Layout, ScrollArea, Ui, Window};
use std::fmt;
use uuid::Uuid;

use crate::config::DIALOG;
use crate::domain::{DetermLimit, ExtrapolateMode, InletOutletConfig, InletOutletZone};
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{OptionsEvent, OptionsPanel, Panel, ZoneRow, ZoneRowEvent};
use crate::ui::utils::{colored_subsection_heading, spaced_separator};
use crate::ui::zone_edit::ZoneEditor;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Error types for dialog operations
#[derive(Debug, Clone, PartialEq)]
pub enum DialogError {
    /// Resize time text is not a finite number
    InvalidResizeTime(String),
    /// Resize time parsed but is below zero
    NegativeResizeTime(f64),
    /// No zone with this id in the working copy
    UnknownZone(Uuid),
}

impl fmt::Display for DialogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogError::InvalidResizeTime(text) => {
                write!(f, "Resizetime must be a number, got '{}'", text)
            }
            DialogError::NegativeResizeTime(value) => {
                write!(f, "Resizetime must not be negative, got {}", value)
            }
            DialogError::UnknownZone(id) => write!(f, "No inlet/outlet zone with id {}", id),
        }
    }
}

impl std::error::Error for DialogError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Open,
    Finished,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogAction {
    AddZone,
    Row(ZoneRowEvent),
    Finish,
    Cancel,
}

pub struct InletConfigDialog {
    // Form state
    resize_time_text: String,
    extrapolate_index: usize,
    determ_limit_index: usize,

    // Working copy of the case settings; written back on finish
    staged: InletOutletConfig,
    rows: Vec<ZoneRow>,
    editing_zone: Option<Uuid>,

    last_error: Option<DialogError>,
    outcome: DialogOutcome,
}

impl InletConfigDialog {
    /// Opens the dialog on `config`, filling the form from its current values.
    pub fn open(config: &InletOutletConfig) -> Self {
        let mut dialog = Self {
            resize_time_text: config.resizetime.to_string(),
            extrapolate_index: config.extrapolatemode.selector_index(),
            determ_limit_index: config.determlimit.selector_index(),
            staged: config.clone(),
            rows: Vec::new(),
            editing_zone: None,
            last_error: None,
            outcome: DialogOutcome::Open,
        };
        dialog.refresh_zone_list();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!(
                "Opened inlet/outlet dialog with {} zone(s)",
                dialog.staged.zones.len()
            );
        }

        dialog
    }

    /// Rebuilds the row list from the working copy, in zone order.
    pub fn refresh_zone_list(&mut self) {
        self.rows = self
            .staged
            .zones
            .iter()
            .enumerate()
            .map(|(index, zone)| ZoneRow::new(index, zone))
            .collect();
    }

    /// Appends a fresh zone and opens its editor. Returns the new zone's id.
    pub fn add_zone(&mut self) -> Uuid {
        let zone = InletOutletZone::new();
        let id = zone.id;
        self.staged.zones.push(zone);
        self.refresh_zone_list();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Added inlet/outlet zone {}", id);
        }

        // Just pushed, so this cannot fail
        let _ = self.edit_zone(id);
        id
    }

    /// Marks `id` as the zone being edited; the editor is rendered on top of the dialog.
    pub fn edit_zone(&mut self, id: Uuid) -> Result<(), DialogError> {
        log::debug!("Trying to open a zone edit for zone UUID {}", id);

        if self.staged.zone(id).is_none() {
            return Err(DialogError::UnknownZone(id));
        }
        self.editing_zone = Some(id);
        Ok(())
    }

    /// Called when the zone editor closes.
    pub fn finish_zone_edit(&mut self) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_zone_edits {
            if let Some(id) = self.editing_zone {
                log::info!("Closed zone edit for {}", id);
            }
        }

        self.editing_zone = None;
        self.refresh_zone_list();
    }

    /// Removes the zone with `id`. Returns `false` if there was no such zone.
    pub fn delete_zone(&mut self, id: Uuid) -> bool {
        let removed = self.staged.remove_zone(id).is_some();
        if removed {
            if self.editing_zone == Some(id) {
                self.editing_zone = None;
            }
            self.refresh_zone_list();

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Deleted inlet/outlet zone {}", id);
            }
        }
        removed
    }

    /// Closes the dialog without writing anything back.
    pub fn cancel(&mut self) {
        self.editing_zone = None;
        self.outcome = DialogOutcome::Cancelled;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Inlet/outlet dialog cancelled");
        }
    }

    /// Validates the form and commits it, plus the staged zone list, into `target`.
    /// On error nothing in `target` changes and the dialog stays open.
    pub fn finish(&mut self, target: &mut InletOutletConfig) -> Result<(), DialogError> {
        let resizetime = match Self::parse_resize_time(&self.resize_time_text) {
            Ok(value) => value,
            Err(err) => {
                self.last_error = Some(err.clone());
                return Err(err);
            }
        };

        target.resizetime = resizetime;
        target.determlimit =
            DetermLimit::from_selector_index(self.determ_limit_index).unwrap_or_default();
        target.extrapolatemode =
            ExtrapolateMode::from_selector_index(self.extrapolate_index).unwrap_or_default();
        target.zones = self.staged.zones.clone();

        self.last_error = None;
        self.editing_zone = None;
        self.outcome = DialogOutcome::Finished;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!(
                "Inlet/outlet settings saved: resizetime={} extrapolatemode={} determlimit={} zones={}",
                target.resizetime,
                target.extrapolatemode.value(),
                target.determlimit,
                target.zones.len()
            );
        }

        Ok(())
    }

    pub fn parse_resize_time(text: &str) -> Result<f64, DialogError> {
        let value: f64 = text
            .trim()
            .parse()
            .map_err(|_| DialogError::InvalidResizeTime(text.to_string()))?;
        if !value.is_finite() {
            return Err(DialogError::InvalidResizeTime(text.to_string()));
        }
        if value < 0.0 {
            return Err(DialogError::NegativeResizeTime(value));
        }
        // Folds "-0" into +0.0
        Ok(value.abs())
    }

    pub fn rows(&self) -> &[ZoneRow] {
        &self.rows
    }

    pub fn zones(&self) -> &[InletOutletZone] {
        &self.staged.zones
    }

    pub fn resize_time_text(&self) -> &str {
        &self.resize_time_text
    }

    pub fn set_resize_time_text(&mut self, text: impl Into<String>) {
        self.resize_time_text = text.into();
    }

    pub fn extrapolate_index(&self) -> usize {
        self.extrapolate_index
    }

    /// Out-of-range indices are ignored; the selector is a closed set.
    pub fn select_extrapolate_mode(&mut self, index: usize) {
        if ExtrapolateMode::from_selector_index(index).is_some() {
            self.extrapolate_index = index;
        }
    }

    pub fn determ_limit_index(&self) -> usize {
        self.determ_limit_index
    }

    pub fn select_determ_limit(&mut self, index: usize) {
        if DetermLimit::from_selector_index(index).is_some() {
            self.determ_limit_index = index;
        }
    }

    pub fn editing_zone(&self) -> Option<Uuid> {
        self.editing_zone
    }

    pub fn last_error(&self) -> Option<&DialogError> {
        self.last_error.as_ref()
    }

    pub fn outcome(&self) -> DialogOutcome {
        self.outcome
    }

    pub fn is_open(&self) -> bool {
        self.outcome == DialogOutcome::Open
    }

    /// Renders the dialog (and the zone editor while one is open) for this frame.
    pub fn show(
        &mut self,
        ctx: &Context,
        editor: &mut dyn ZoneEditor,
        target: &mut InletOutletConfig,
    ) -> DialogOutcome {
        if !self.is_open() {
            return self.outcome;
        }

        let mut window_open = true;
        let mut actions = Vec::new();
        Window::new(UI_TEXT.dialog_title)
            .id(Id::new("inlet_config_dialog"))
            .open(&mut window_open)
            .collapsible(false)
            .resizable(true)
            .min_width(DIALOG.minimum_width)
            .min_height(DIALOG.minimum_height)
            .show(ctx, |ui| {
                let editing = self.editing_zone.is_some();
                ui.add_enabled_ui(!editing, |ui| {
                    actions = self.render_contents(ui);
                });
            });

        if !window_open {
            actions.push(DialogAction::Cancel);
        }
        for action in actions {
            self.apply_action(action, target);
        }

        if let Some(id) = self.editing_zone {
            let done = match self.staged.zone_mut(id) {
                Some(zone) => editor.show(ctx, zone),
                None => true,
            };
            if done {
                self.finish_zone_edit();
            }
        }

        self.outcome
    }

    fn apply_action(&mut self, action: DialogAction, target: &mut InletOutletConfig) {
        match action {
            DialogAction::AddZone => {
                self.add_zone();
            }
            DialogAction::Row(ZoneRowEvent::EditRequested(id)) => {
                if let Err(err) = self.edit_zone(id) {
                    log::warn!("{}", err);
                    self.last_error = Some(err);
                }
            }
            DialogAction::Row(ZoneRowEvent::DeleteRequested(id)) => {
                self.delete_zone(id);
            }
            DialogAction::Finish => {
                if let Err(err) = self.finish(target) {
                    log::warn!("Inlet/outlet settings not saved: {}", err);
                }
            }
            DialogAction::Cancel => self.cancel(),
        }
    }

    fn render_contents(&mut self, ui: &mut Ui) -> Vec<DialogAction> {
        let mut actions = Vec::new();

        let option_events = OptionsPanel::new(
            &mut self.resize_time_text,
            self.extrapolate_index,
            self.determ_limit_index,
        )
        .render(ui);
        for event in option_events {
            match event {
                OptionsEvent::ExtrapolateMode(index) => self.select_extrapolate_mode(index),
                OptionsEvent::DetermLimit(index) => self.select_determ_limit(index),
            }
        }

        ui.add_space(10.0);
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(colored_subsection_heading(UI_TEXT.zones_group_heading));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(UI_TEXT.add_zone_button).clicked() {
                        actions.push(DialogAction::AddZone);
                    }
                });
            });
            ui.add_space(5.0);

            ScrollArea::vertical()
                .max_height(DIALOG.zones_list_max_height)
                .id_salt("inlet_outlet_zones")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for row in self.rows.iter_mut() {
                        actions.extend(row.render(ui).into_iter().map(DialogAction::Row));
                    }
                });
        });

        if let Some(err) = &self.last_error {
            ui.add_space(5.0);
            ui.label_error(err.to_string());
        }

        spaced_separator(ui);
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button(UI_TEXT.finish_button).clicked() {
                actions.push(DialogAction::Finish);
            }
            if ui.button(UI_TEXT.cancel_button).clicked() {
                actions.push(DialogAction::Cancel);
            }
        });

        actions
    }
}

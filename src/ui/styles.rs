use eframe::egui::{Color32, RichText, Ui};

use crate::ui::config::UI_CONFIG;

/// Semantic text helpers on `egui::Ui`, so panels never pick colours themselves.
pub trait UiStyleExt {
    /// Small grey text for ids, paths and hints.
    fn label_subdued(&mut self, text: impl Into<String>);

    /// `caption value` on one line, the value drawn strong in `color`.
    fn metric(&mut self, caption: &str, value: &str, color: Color32);

    fn label_subheader(&mut self, text: impl Into<String>);

    /// Validation and IO failures.
    fn label_error(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.label));
    }

    fn metric(&mut self, caption: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(RichText::new(caption).color(UI_CONFIG.colors.label));
            ui.label(RichText::new(value).strong().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.subsection_heading));
    }

    fn label_error(&mut self, text: impl Into<String>) {
        let text = format!("⚠ {}", text.into());
        self.label(RichText::new(text).color(UI_CONFIG.colors.error));
    }
}

use crate::ui::config::UI_CONFIG;
use eframe::egui::{Color32, RichText, Ui};

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (zone names, date lines).
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders the large monospace time slot in the given color.
    fn label_time(&mut self, text: impl Into<String>, color: Color32);

    /// Renders the small meta slot (zone abbreviation / offset).
    fn label_meta(&mut self, text: impl Into<String>);

    /// Renders an error message (red).
    fn label_error(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn label_time(&mut self, text: impl Into<String>, color: Color32) {
        self.label(RichText::new(text).heading().monospace().color(color));
    }

    fn label_meta(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .small()
                .color(UI_CONFIG.colors.meta),
        );
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.error));
    }
}

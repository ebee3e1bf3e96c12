use eframe::egui::{
    Align2, CentralPanel, ComboBox, Context, CornerRadius, Frame, Key, Margin, ScrollArea,
    TextEdit, TopBottomPanel, Window,
};

use crate::clock::ClockReading;
use crate::clock::reading::INVALID_ZONE_INDICATOR;
use crate::config::SUGGESTED_ZONES;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

use super::app::ClocksApp;

/// User intents collected during a render pass and applied afterwards.
pub(super) enum UserEvent {
    AddZone(String),
    RemoveZone(String),
    ResetToDefaults,
    ShowDate(bool),
    Hour12(bool),
}

impl ClocksApp {
    /// Input row: free-text zone entry, suggestion dropdown, display
    /// toggles and the reset button.
    pub(super) fn render_top_panel(&mut self, ctx: &Context) -> Vec<UserEvent> {
        let mut events = Vec::new();

        let panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.top_panel)
            .inner_margin(Margin::same(8));

        TopBottomPanel::top("controls")
            .frame(panel_frame)
            .show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    let input = ui.add(
                        TextEdit::singleline(&mut self.zone_input)
                            .hint_text(UI_TEXT.input_hint)
                            .desired_width(220.0),
                    );

                    let submitted =
                        input.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

                    if ui.button(UI_TEXT.add_button).clicked() || submitted {
                        events.push(UserEvent::AddZone(self.zone_input.clone()));
                        self.zone_input.clear();
                    }

                    // Datalist stand-in: picking a suggestion fills the
                    // input but does not add by itself.
                    ComboBox::from_id_salt("zone_suggestions")
                        .selected_text(UI_TEXT.suggestions_label)
                        .show_ui(ui, |ui| {
                            for zone in SUGGESTED_ZONES {
                                if ui.selectable_label(false, zone).clicked() {
                                    self.zone_input = zone.to_string();
                                }
                            }
                        });

                    ui.separator();

                    let mut show_date = self.settings.show_date;
                    if ui
                        .checkbox(&mut show_date, UI_TEXT.show_date_checkbox)
                        .changed()
                    {
                        events.push(UserEvent::ShowDate(show_date));
                    }

                    let mut hour12 = self.settings.hour12;
                    if ui.checkbox(&mut hour12, UI_TEXT.hour12_checkbox).changed() {
                        events.push(UserEvent::Hour12(hour12));
                    }

                    ui.separator();

                    if ui.button(UI_TEXT.reset_button).clicked() {
                        events.push(UserEvent::ResetToDefaults);
                    }
                });
            });

        events
    }

    /// The card grid. Iteration order comes from the zone list (front of
    /// list renders first); the reading map is only a lookup.
    pub(super) fn render_clocks_panel(&mut self, ctx: &Context) -> Vec<UserEvent> {
        let mut events = Vec::new();

        let order: Vec<String> = self.zones.iter().map(str::to_string).collect();

        let panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));

        CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
            if order.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label_subdued(UI_TEXT.empty_list_hint);
                });
                return;
            }

            ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for zone in &order {
                        // A zone with no reading yet renders its placeholder;
                        // the next tick pass fills it.
                        let reading = self
                            .readings
                            .get(zone)
                            .cloned()
                            .unwrap_or_else(|| ClockReading::placeholder(zone));
                        render_clock_card(ui, &reading, &mut events);
                    }
                });
            });
        });

        events
    }

    /// Modal-style alert for rejected zone input.
    pub(super) fn render_alert(&mut self, ctx: &Context) {
        let Some(message) = self.alert.clone() else {
            return;
        };

        let mut dismissed = false;
        Window::new(UI_TEXT.alert_title)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label_error(message.as_str());
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button(UI_TEXT.alert_dismiss).clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.alert = None;
        }
    }
}

fn render_clock_card(ui: &mut eframe::egui::Ui, reading: &ClockReading, events: &mut Vec<UserEvent>) {
    let card_frame = Frame::new()
        .fill(UI_CONFIG.colors.card_fill)
        .corner_radius(CornerRadius::same(UI_CONFIG.card_rounding))
        .inner_margin(Margin::same(10));

    card_frame.show(ui, |ui| {
        ui.set_width(UI_CONFIG.card_width);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(&reading.zone);
                ui.with_layout(
                    eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                    |ui| {
                        let remove = ui
                            .small_button(UI_TEXT.remove_button)
                            .on_hover_text(format!(
                                "{} {}",
                                UI_TEXT.remove_tooltip_prefix, reading.zone
                            ));
                        if remove.clicked() {
                            events.push(UserEvent::RemoveZone(reading.zone.clone()));
                        }
                    },
                );
            });

            let failed = reading.time == INVALID_ZONE_INDICATOR;
            let time_color = if failed {
                UI_CONFIG.colors.error
            } else {
                UI_CONFIG.colors.time
            };
            ui.label_time(reading.time.as_str(), time_color);

            if !reading.date.is_empty() {
                ui.label_subdued(reading.date.as_str());
            }
            if !reading.meta.is_empty() {
                ui.label_meta(reading.meta.as_str());
            }
        });
    });
}

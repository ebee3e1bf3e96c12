use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub time: Color32,
    pub meta: Color32,
    pub central_panel: Color32,
    pub top_panel: Color32,
    pub card_fill: Color32,
    pub error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub card_width: f32,
    pub card_rounding: u8,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(240, 240, 240),
        time: Color32::from_rgb(130, 200, 140),
        meta: Color32::from_rgb(150, 200, 255),
        central_panel: Color32::from_rgb(20, 22, 28),
        top_panel: Color32::from_rgb(30, 33, 41),
        card_fill: Color32::from_rgb(38, 42, 52),
        error: Color32::from_rgb(255, 100, 100),
    },
    card_width: 220.0,
    card_rounding: 8,
};

/// Every user-visible string in one place.
pub struct UiText {
    pub window_title: &'static str,
    pub input_hint: &'static str,
    pub suggestions_label: &'static str,
    pub add_button: &'static str,
    pub remove_button: &'static str,
    pub remove_tooltip_prefix: &'static str,
    pub reset_button: &'static str,
    pub show_date_checkbox: &'static str,
    pub hour12_checkbox: &'static str,
    pub invalid_zone_alert: &'static str,
    pub alert_title: &'static str,
    pub alert_dismiss: &'static str,
    pub empty_list_hint: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    window_title: "tz-clocks — world clocks",
    input_hint: "IANA zone, e.g. Europe/Madrid",
    suggestions_label: "Common zones",
    add_button: "Add",
    remove_button: "✕",
    remove_tooltip_prefix: "Remove",
    reset_button: "Reset to defaults",
    show_date_checkbox: "Show date",
    hour12_checkbox: "12-hour clock",
    invalid_zone_alert: "Invalid time zone. Use an IANA identifier such as \"Europe/Madrid\" or \"America/New_York\".",
    alert_title: "Cannot add zone",
    alert_dismiss: "OK",
    empty_list_hint: "No zones tracked. Add one above or reset to defaults.",
};

//! Display preferences.

use serde::{Deserialize, Serialize};

/// The two persisted display toggles.
///
/// Field names on the wire are `showDate` / `hour12`, matching the persisted
/// JSON blob format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplaySettings {
    /// Show a formatted date line under each clock.
    pub show_date: bool,
    /// Use a 12-hour clock with an AM/PM marker instead of 24-hour time.
    pub hour12: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_both_off() {
        let s = DisplaySettings::default();
        assert!(!s.show_date);
        assert!(!s.hour12);
    }

    #[test]
    fn test_wire_field_names() {
        let s = DisplaySettings {
            show_date: true,
            hour12: false,
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"showDate":true,"hour12":false}"#);
    }

    #[test]
    fn test_missing_fields_default_to_false() {
        let s: DisplaySettings = serde_json::from_str(r#"{"showDate":true}"#).unwrap();
        assert!(s.show_date);
        assert!(!s.hour12);
    }
}

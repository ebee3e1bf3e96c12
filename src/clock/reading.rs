//! The per-card render artifact.

use chrono::{DateTime, Utc};

use crate::clock::{formatter, validator};
use crate::domain::DisplaySettings;

/// Time slot content of a card that has not had its first tick fill yet.
pub const TIME_PLACEHOLDER: &str = "--:--:--";

/// Fixed time slot content for a card whose zone no longer resolves.
pub const INVALID_ZONE_INDICATOR: &str = "invalid zone";

/// One zone's formatted slots, regenerated wholesale on structural changes
/// and overwritten in place on every tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockReading {
    /// Owning zone identifier; the sole correlation key between the zone
    /// list and the rendered card set.
    pub zone: String,
    pub time: String,
    pub date: String,
    pub meta: String,
}

impl ClockReading {
    /// A freshly created card before its first tick fill.
    pub fn placeholder(zone: &str) -> Self {
        Self {
            zone: zone.to_string(),
            time: TIME_PLACEHOLDER.to_string(),
            date: String::new(),
            meta: String::new(),
        }
    }

    /// Formats `now` into the card's zone under the given settings.
    ///
    /// A zone that stopped resolving after acceptance degrades to the
    /// invalid-zone reading for this card only; siblings are unaffected
    /// because each card is computed independently.
    pub fn compute(zone: &str, now: DateTime<Utc>, settings: DisplaySettings) -> Self {
        match validator::resolve(zone) {
            Ok(tz) => Self {
                zone: zone.to_string(),
                time: formatter::format_time(now, tz, settings.hour12),
                date: if settings.show_date {
                    formatter::format_date(now, tz)
                } else {
                    String::new()
                },
                meta: formatter::zone_label(now, tz),
            },
            Err(err) => Self {
                zone: zone.to_string(),
                time: INVALID_ZONE_INDICATOR.to_string(),
                date: String::new(),
                meta: format!("{} • {}", zone, err),
            },
        }
    }
}

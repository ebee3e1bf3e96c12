//! Instant-in-zone text formatting.

use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;

/// Formats an instant as wall-clock time in `zone`.
///
/// Always 2-digit hour/minute/second; `hour12` switches to a 12-hour clock
/// with an AM/PM marker.
pub fn format_time(now: DateTime<Utc>, zone: Tz, hour12: bool) -> String {
    let local = now.with_timezone(&zone);
    if hour12 {
        local.format("%I:%M:%S %p").to_string()
    } else {
        local.format("%H:%M:%S").to_string()
    }
}

/// Formats an instant as a date line: short weekday, short month, 2-digit
/// day, numeric year.
pub fn format_date(now: DateTime<Utc>, zone: Tz) -> String {
    now.with_timezone(&zone).format("%a, %b %d, %Y").to_string()
}

/// Short zone label for an instant: the tzdb abbreviation when it has one
/// (`CEST`, `GMT`), else a `GMT+5:30`-style offset label.
///
/// Empty abbreviations do not occur in the bundled database, so the fallback
/// only fires for the purely numeric `+07`-style entries.
pub fn zone_label(now: DateTime<Utc>, zone: Tz) -> String {
    let local = now.with_timezone(&zone);
    let abbrev = local.format("%Z").to_string();
    if abbrev.starts_with(['+', '-']) {
        gmt_offset_label(local.offset().fix().local_minus_utc())
    } else {
        abbrev
    }
}

/// Renders an offset in seconds east of UTC as `GMT+7` / `GMT-3:30` / `GMT`.
fn gmt_offset_label(offset_secs: i32) -> String {
    if offset_secs == 0 {
        return "GMT".to_string();
    }
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let total_minutes = offset_secs.abs() / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if minutes == 0 {
        format!("GMT{}{}", sign, hours)
    } else {
        format!("GMT{}{}:{:02}", sign, hours, minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_24_hour_time_is_zero_padded() {
        let now = instant(2026, 1, 15, 7, 4, 9);
        assert_eq!(format_time(now, chrono_tz::UTC, false), "07:04:09");
    }

    #[test]
    fn test_12_hour_time_carries_am_pm() {
        let now = instant(2026, 1, 15, 14, 30, 0);
        assert_eq!(format_time(now, chrono_tz::UTC, true), "02:30:00 PM");
        let midnight = instant(2026, 1, 15, 0, 0, 0);
        assert_eq!(format_time(midnight, chrono_tz::UTC, true), "12:00:00 AM");
    }

    #[test]
    fn test_time_converts_into_zone() {
        // Madrid is UTC+2 in August (CEST).
        let now = instant(2026, 8, 29, 12, 0, 0);
        assert_eq!(
            format_time(now, chrono_tz::Europe::Madrid, false),
            "14:00:00"
        );
    }

    #[test]
    fn test_date_line_shape() {
        let now = instant(2026, 8, 29, 12, 0, 0);
        assert_eq!(format_date(now, chrono_tz::UTC), "Sat, Aug 29, 2026");
        // Crossing midnight in Sydney pushes the date forward.
        let late = instant(2026, 8, 29, 18, 0, 0);
        assert_eq!(
            format_date(late, chrono_tz::Australia::Sydney),
            "Sun, Aug 30, 2026"
        );
    }

    #[test]
    fn test_zone_label_prefers_abbreviation() {
        let summer = instant(2026, 8, 29, 12, 0, 0);
        assert_eq!(zone_label(summer, chrono_tz::Europe::Madrid), "CEST");
        let winter = instant(2026, 1, 15, 12, 0, 0);
        assert_eq!(zone_label(winter, chrono_tz::Europe::London), "GMT");
    }

    #[test]
    fn test_gmt_offset_label_shapes() {
        assert_eq!(gmt_offset_label(0), "GMT");
        assert_eq!(gmt_offset_label(7 * 3600), "GMT+7");
        assert_eq!(gmt_offset_label(5 * 3600 + 30 * 60), "GMT+5:30");
        assert_eq!(gmt_offset_label(-(3 * 3600 + 30 * 60)), "GMT-3:30");
    }
}

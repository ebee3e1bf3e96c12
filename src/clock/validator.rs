//! Candidate-zone validation.

use chrono::Utc;
use chrono_tz::Tz;

use crate::clock::ZoneError;

/// Resolves an IANA identifier against the bundled database.
///
/// No alias normalization and no partial matching: the identifier either
/// parses as a [`Tz`] or it is rejected.
pub fn resolve(tz: &str) -> Result<Tz, ZoneError> {
    tz.parse::<Tz>()
        .map_err(|_| ZoneError::Unresolvable(tz.to_string()))
}

/// Whether `tz` can be used to format an instant.
///
/// Mirrors the acceptance check done at add time: resolve the zone, then
/// probe-format "now" through it. Resolvability is the sole criterion.
pub fn is_valid(tz: &str) -> bool {
    match resolve(tz) {
        Ok(zone) => {
            // The probe cannot fail once the zone resolves, but running it
            // keeps validation identical to what the tick engine does.
            let _ = super::formatter::format_time(Utc::now(), zone, false);
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_garbage() {
        assert!(!is_valid("Not/A_Zone"));
        assert!(!is_valid(""));
        assert!(!is_valid("Europe Madrid"));
    }

    #[test]
    fn test_accepts_known_zones() {
        assert!(is_valid("UTC"));
        assert!(is_valid("Europe/Madrid"));
        assert!(is_valid("America/New_York"));
    }

    #[test]
    fn test_no_alias_normalization() {
        // Case must match the database entry exactly.
        assert!(!is_valid("europe/madrid"));
    }

    #[test]
    fn test_resolve_error_names_the_zone() {
        let err = resolve("Mars/Olympus_Mons").unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus_Mons"));
    }
}

//! Kickoff time display. The snapshot stores UTC instants; fans read local
//! stadium time, so the venue's two-letter state code picks the zone.
//!
//! The zone is resolved from the venue state, not the home team's location.
//! Neutral-site games therefore display in the host city's zone.

use crate::GameRecord;
use chrono::DateTime;
use chrono_tz::Tz;

/// Placeholder shown whenever a kickoff instant is absent or unparseable.
pub const DATE_UNAVAILABLE: &str = "Date not available";

/// Display time zone for a venue state code. Unrecognized or missing codes
/// fall back to US Eastern.
pub fn zone_for_state(code: Option<&str>) -> Tz {
    use chrono_tz::America;

    match code.unwrap_or("") {
        "AL" | "IA" | "IL" | "KS" | "LA" | "MN" | "MO" | "MS" | "ND" | "NE" | "OK" | "SD"
        | "TN" | "TX" | "WI" => America::Chicago,
        "AK" => America::Anchorage,
        "AZ" => America::Phoenix,
        "CA" | "NV" | "OR" | "WA" => America::Los_Angeles,
        "CO" | "MT" | "NM" | "UT" | "WY" => America::Denver,
        "HI" => chrono_tz::Pacific::Honolulu,
        "ID" => America::Boise,
        "IN" => America::Indiana::Indianapolis,
        "MI" => America::Detroit,
        "CT" | "DC" | "DE" | "FL" | "GA" | "KY" | "MA" | "MD" | "ME" | "NC" | "NH" | "NJ"
        | "NY" | "OH" | "PA" | "RI" | "SC" | "VA" | "VT" | "WV" => America::New_York,
        _ => America::New_York,
    }
}

/// Format a game's kickoff for display: short weekday, short month, numeric
/// day and year, 12-hour clock in the venue's zone. Never fails — a missing
/// or malformed `start_date` yields [`DATE_UNAVAILABLE`].
pub fn format_kickoff(game: &GameRecord) -> String {
    let Some(raw) = game.start_date.as_deref() else {
        return DATE_UNAVAILABLE.to_owned();
    };

    let Ok(instant) = DateTime::parse_from_rfc3339(raw) else {
        return DATE_UNAVAILABLE.to_owned();
    };

    let zone = zone_for_state(game.state.as_deref());
    instant
        .with_timezone(&zone)
        .format("%a, %b %-d, %Y, %-I:%M %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(start_date: Option<&str>, state: Option<&str>) -> GameRecord {
        GameRecord {
            start_date: start_date.map(str::to_owned),
            state: state.map(str::to_owned),
            ..Default::default()
        }
    }

    #[test]
    fn formats_in_venue_zone() {
        // 01:30 UTC lands the previous evening in Texas (CST, UTC-6).
        let g = game_with(Some("2015-01-13T01:30:00.000Z"), Some("TX"));
        assert_eq!(format_kickoff(&g), "Mon, Jan 12, 2015, 7:30 PM");
    }

    #[test]
    fn unknown_state_falls_back_to_eastern() {
        let g = game_with(Some("2015-01-13T01:30:00.000Z"), Some("PR"));
        assert_eq!(format_kickoff(&g), "Mon, Jan 12, 2015, 8:30 PM");
        let g = game_with(Some("2015-01-13T01:30:00.000Z"), None);
        assert_eq!(format_kickoff(&g), "Mon, Jan 12, 2015, 8:30 PM");
    }

    #[test]
    fn arizona_ignores_dst() {
        // America/Phoenix stays on MST year round.
        let g = game_with(Some("2014-01-07T02:30:00.000Z"), Some("AZ"));
        assert_eq!(format_kickoff(&g), "Mon, Jan 6, 2014, 7:30 PM");
    }

    #[test]
    fn missing_date_yields_placeholder() {
        assert_eq!(format_kickoff(&game_with(None, Some("TX"))), DATE_UNAVAILABLE);
    }

    #[test]
    fn unparseable_date_yields_placeholder() {
        let g = game_with(Some("next saturday"), Some("TX"));
        assert_eq!(format_kickoff(&g), DATE_UNAVAILABLE);
    }
}

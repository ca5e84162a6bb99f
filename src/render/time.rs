use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};

/// How game times are displayed
#[derive(Debug, Clone)]
pub struct TimeFormat {
    offset: FixedOffset,
    zone_label: String,
}

impl TimeFormat {
    pub fn new(offset: FixedOffset, zone_label: &str) -> Self {
        Self {
            offset,
            zone_label: zone_label.to_string(),
        }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix(), "UTC")
    }

    /// Format an ISO-8601 timestamp as e.g. "Tue, Nov 18, 7:00 PM ET".
    /// Unparsable input is returned unchanged.
    pub fn format(&self, raw: &str) -> String {
        match parse_game_time(raw) {
            Some(time) => format!(
                "{} {}",
                time.with_timezone(&self.offset).format("%a, %b %-d, %-I:%M %p"),
                self.zone_label
            ),
            None => raw.to_string(),
        }
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self::utc()
    }
}

/// Parse an ISO-8601 game time. Accepts RFC 3339, minute precision with a `Z` or
/// numeric offset ("2025-11-18T00:00Z", "2025-11-18T19:00-05:00"), and timestamps
/// with no offset, which are taken as UTC.
pub fn parse_game_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
        return Some(time.with_timezone(&Utc));
    }

    if let Ok(time) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%:z") {
        return Some(time.with_timezone(&Utc));
    }

    // A trailing Z is UTC; with no offset at all, assume UTC too
    let naive = raw.strip_suffix('Z').unwrap_or(raw);
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eastern() -> TimeFormat {
        TimeFormat::new(FixedOffset::west_opt(5 * 3600).unwrap(), "ET")
    }

    #[test]
    fn test_parse_minute_precision() {
        let time = parse_game_time("2025-11-18T00:00Z").unwrap();
        assert_eq!(time.to_rfc3339(), "2025-11-18T00:00:00+00:00");
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let time = parse_game_time("2025-11-18T19:30:00-05:00").unwrap();
        assert_eq!(time.to_rfc3339(), "2025-11-19T00:30:00+00:00");
    }

    #[test]
    fn test_parse_minute_precision_with_offset() {
        let time = parse_game_time("2025-11-18T19:00-05:00").unwrap();
        assert_eq!(time.to_rfc3339(), "2025-11-19T00:00:00+00:00");
    }

    #[test]
    fn test_parse_without_offset_is_utc() {
        let time = parse_game_time("2025-11-18T19:00:00").unwrap();
        assert_eq!(time.to_rfc3339(), "2025-11-18T19:00:00+00:00");

        let time = parse_game_time("2025-11-18T19:00").unwrap();
        assert_eq!(time.to_rfc3339(), "2025-11-18T19:00:00+00:00");

        let time = parse_game_time("2025-11-18T19:00:00.250").unwrap();
        assert_eq!(time.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_format_offset_and_naive_forms() {
        assert_eq!(eastern().format("2025-11-18T19:00-05:00"), "Tue, Nov 18, 7:00 PM ET");
        assert_eq!(
            TimeFormat::utc().format("2025-11-18T19:00:00"),
            "Tue, Nov 18, 7:00 PM UTC"
        );
    }

    #[test]
    fn test_format_in_zone() {
        assert_eq!(eastern().format("2025-11-18T00:00Z"), "Mon, Nov 17, 7:00 PM ET");
    }

    #[test]
    fn test_format_utc() {
        assert_eq!(
            TimeFormat::utc().format("2025-11-18T15:05:00Z"),
            "Tue, Nov 18, 3:05 PM UTC"
        );
    }

    #[test]
    fn test_format_malformed_returns_raw() {
        assert_eq!(eastern().format("tonight-ish"), "tonight-ish");
        assert_eq!(eastern().format(""), "");
        assert_eq!(eastern().format("2025-13-40T00:00Z"), "2025-13-40T00:00Z");
    }
}

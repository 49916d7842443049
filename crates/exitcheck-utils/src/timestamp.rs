//! UTC timestamps in the fixed `YYYY-MM-DD HH:MM:SS UTC` shape shared by log
//! lines and result documents.

use chrono::{DateTime, Utc};

/// chrono format string for [`format_utc`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Format an instant, e.g. `2025-11-18 22:54:32 UTC`.
#[must_use]
pub fn format_utc(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Source of "now" for anything that stamps output.
///
/// Production code uses [`Utc::now`]; tests substitute a fixed instant.
pub type Clock = fn() -> DateTime<Utc>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_utc_shape() {
        let at = Utc.with_ymd_and_hms(2025, 11, 18, 22, 54, 32).unwrap();
        assert_eq!(format_utc(at), "2025-11-18 22:54:32 UTC");
    }

    #[test]
    fn test_format_utc_zero_pads() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_utc(at), "2026-01-02 03:04:05 UTC");
    }
}

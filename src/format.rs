//! Display Formatting

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

/// "Mar 9, 2024", in the viewer's local time zone
pub fn format_date(at: &DateTime<Utc>) -> String {
    format_date_in(at, &Local)
}

fn format_date_in<Tz: TimeZone>(at: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: Display,
{
    at.with_timezone(zone).format("%b %-d, %Y").to_string()
}

/// "1 lead selected" / "3 leads selected"
pub fn selection_label(count: usize) -> String {
    let noun = if count == 1 { "lead" } else { "leads" };
    format!("{} {} selected", count, noun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_date() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        assert_eq!(format_date_in(&at, &Utc), "Mar 9, 2024");
        let at = Utc.with_ymd_and_hms(2023, 12, 25, 6, 0, 0).unwrap();
        assert_eq!(format_date_in(&at, &Utc), "Dec 25, 2023");
    }

    #[test]
    fn test_format_date_uses_zone_near_midnight() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 23, 30, 0).unwrap();
        let cet = FixedOffset::east_opt(3600).unwrap();
        let pst = FixedOffset::west_opt(8 * 3600).unwrap();
        assert_eq!(format_date_in(&at, &cet), "Mar 10, 2024");
        assert_eq!(format_date_in(&at, &pst), "Mar 9, 2024");

        let early = Utc.with_ymd_and_hms(2024, 1, 1, 2, 0, 0).unwrap();
        assert_eq!(format_date_in(&early, &pst), "Dec 31, 2023");
    }

    #[test]
    fn test_selection_label() {
        assert_eq!(selection_label(1), "1 lead selected");
        assert_eq!(selection_label(0), "0 leads selected");
        assert_eq!(selection_label(12), "12 leads selected");
    }
}

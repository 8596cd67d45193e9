use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Utc, Weekday};

const EET_SECS: i32 = 2 * 3600;
const EEST_SECS: i32 = 3 * 3600;

/// Last Sunday of `month`, or `None` for an invalid year/month.
fn last_sunday(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = first_of_next.pred_opt()?;
    let back = last.weekday().num_days_from_sunday();
    Some(last - Duration::days(back as i64))
}

/// Europe/Riga: EET, with EEST from the last Sunday of March 01:00 UTC to the
/// last Sunday of October 01:00 UTC.
pub fn riga_offset(utc: DateTime<Utc>) -> FixedOffset {
    let year = utc.year();
    let switch = |month| {
        last_sunday(year, month)
            .and_then(|d| d.and_hms_opt(1, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
    };
    let is_summer = match (switch(3), switch(10)) {
        (Some(start), Some(end)) => utc >= start && utc < end,
        _ => false,
    };
    let secs = if is_summer { EEST_SECS } else { EET_SECS };
    FixedOffset::east_opt(secs).expect("Riga offset should be in range")
}

pub fn riga_time(utc: DateTime<Utc>) -> DateTime<FixedOffset> {
    utc.with_timezone(&riga_offset(utc))
}

/// 24h "HH:MM" wall-clock time in Riga.
pub fn format_clock(utc: DateTime<Utc>) -> String {
    riga_time(utc).format("%H:%M").to_string()
}

pub fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// "September 16, 2024, 23:48" in Riga time, for the footer's last-updated line.
pub fn format_timestamp(rfc3339: &str) -> Option<String> {
    let utc = DateTime::parse_from_rfc3339(rfc3339).ok()?.with_timezone(&Utc);
    Some(riga_time(utc).format("%B %-d, %Y, %H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_last_sunday() {
        assert_eq!(last_sunday(2024, 3), NaiveDate::from_ymd_opt(2024, 3, 31));
        assert_eq!(last_sunday(2024, 10), NaiveDate::from_ymd_opt(2024, 10, 27));
        assert_eq!(last_sunday(2025, 3), NaiveDate::from_ymd_opt(2025, 3, 30));
        assert_eq!(last_sunday(2025, 12), NaiveDate::from_ymd_opt(2025, 12, 28));
        assert_eq!(last_sunday(2025, 13), None);
    }

    #[test]
    fn test_winter_and_summer() {
        assert_eq!(format_clock(utc(2024, 1, 15, 12, 0)), "14:00");
        assert_eq!(format_clock(utc(2024, 7, 1, 21, 30)), "00:30");
    }

    #[test]
    fn test_spring_forward() {
        assert_eq!(format_clock(utc(2024, 3, 31, 0, 59)), "02:59");
        assert_eq!(format_clock(utc(2024, 3, 31, 1, 0)), "04:00");
    }

    #[test]
    fn test_fall_back() {
        assert_eq!(format_clock(utc(2024, 10, 27, 0, 59)), "03:59");
        assert_eq!(format_clock(utc(2024, 10, 27, 1, 0)), "03:00");
    }

    #[test]
    fn test_weekend() {
        assert!(is_weekend(Weekday::Sat));
        assert!(is_weekend(Weekday::Sun));
        assert!(!is_weekend(Weekday::Mon));
        assert!(!is_weekend(Weekday::Fri));
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2024-09-16T20:48:00Z").as_deref(),
            Some("September 16, 2024, 23:48")
        );
        // single-digit day is not padded
        assert_eq!(
            format_timestamp("2025-03-05T12:07:00Z").as_deref(),
            Some("March 5, 2025, 14:07")
        );
        assert_eq!(format_timestamp("yesterday"), None);
    }
}

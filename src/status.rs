use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::clock::{is_weekend, riga_time};

/// What the site owner is probably doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    Sleeping,
    Breakfast,
    Programming,
    WorkingOut,
    Reading,
    Brunch,
    Outdoors,
    Hobbies,
    WatchingTv,
    WindingDown,
}

impl Activity {
    pub fn at(day: Weekday, hour: u32) -> Self {
        if is_weekend(day) {
            match hour {
                0..8 => Self::Sleeping,
                8..10 => Self::Brunch,
                10..14 => Self::Outdoors,
                14..18 => Self::Hobbies,
                18..22 => Self::WatchingTv,
                _ => Self::WindingDown,
            }
        } else {
            match hour {
                0..6 => Self::Sleeping,
                6..9 => Self::Breakfast,
                9..17 => Self::Programming,
                17..19 => Self::WorkingOut,
                19..22 => Self::Reading,
                _ => Self::WindingDown,
            }
        }
    }

    /// Activity for the owner's local (Riga) time.
    pub fn current(now: DateTime<Utc>) -> Self {
        let local = riga_time(now);
        Self::at(local.weekday(), local.hour())
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Sleeping => "😴",
            Self::Breakfast => "🍽️",
            Self::Programming => "💻",
            Self::WorkingOut => "🏋️",
            Self::Reading => "📚",
            Self::Brunch => "🍳",
            Self::Outdoors => "🏞️",
            Self::Hobbies => "🎨",
            Self::WatchingTv => "🍿",
            Self::WindingDown => "🌙",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sleeping => "Currently Sleeping",
            Self::Breakfast => "Currently Eating breakfast",
            Self::Programming => "Currently Programming",
            Self::WorkingOut => "Currently Working out",
            Self::Reading => "Currently Reading/Relaxing",
            Self::Brunch => "Currently Making brunch",
            Self::Outdoors => "Currently Enjoying outdoors",
            Self::Hobbies => "Currently Pursuing hobbies",
            Self::WatchingTv => "Currently Watching tv shows",
            Self::WindingDown => "Winding down for the night",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_weekday_table() {
        let day = Weekday::Wed;
        assert_eq!(Activity::at(day, 0), Activity::Sleeping);
        assert_eq!(Activity::at(day, 5), Activity::Sleeping);
        assert_eq!(Activity::at(day, 6), Activity::Breakfast);
        assert_eq!(Activity::at(day, 9), Activity::Programming);
        assert_eq!(Activity::at(day, 16), Activity::Programming);
        assert_eq!(Activity::at(day, 17), Activity::WorkingOut);
        assert_eq!(Activity::at(day, 19), Activity::Reading);
        assert_eq!(Activity::at(day, 22), Activity::WindingDown);
        assert_eq!(Activity::at(day, 23), Activity::WindingDown);
    }

    #[test]
    fn test_weekend_table() {
        for day in [Weekday::Sat, Weekday::Sun] {
            assert_eq!(Activity::at(day, 7), Activity::Sleeping);
            assert_eq!(Activity::at(day, 8), Activity::Brunch);
            assert_eq!(Activity::at(day, 10), Activity::Outdoors);
            assert_eq!(Activity::at(day, 14), Activity::Hobbies);
            assert_eq!(Activity::at(day, 18), Activity::WatchingTv);
            assert_eq!(Activity::at(day, 22), Activity::WindingDown);
        }
    }

    #[test]
    fn test_current_uses_riga_time() {
        // Friday 21:30 UTC is Saturday 00:30 in Riga (summer time)
        let now = Utc.with_ymd_and_hms(2024, 7, 5, 21, 30, 0).unwrap();
        assert_eq!(Activity::current(now), Activity::Sleeping);
        // Monday 07:00 UTC is 10:00 in Riga
        let now = Utc.with_ymd_and_hms(2024, 7, 8, 7, 0, 0).unwrap();
        assert_eq!(Activity::current(now), Activity::Programming);
    }

    #[test]
    fn test_cache_round_trip_keeps_variant() {
        let json = serde_json::to_string(&Activity::Outdoors).unwrap();
        let back: Activity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Activity::Outdoors);
        assert_eq!(back.label(), "Currently Enjoying outdoors");
    }
}

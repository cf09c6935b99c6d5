//! Countdown
//!
//! Time remaining until the ceremony, split for display.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// `[days, hh, mm, ss]`; only the day count is unpadded
    pub fn display_parts(&self) -> [String; 4] {
        [
            self.days.to_string(),
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}

/// `None` once `target` has been reached
pub fn time_left(target: DateTime<Utc>, now: DateTime<Utc>) -> Option<TimeLeft> {
    let millis = (target - now).num_milliseconds();
    if millis <= 0 {
        return None;
    }
    // partial seconds count as a whole one so zero is shown only at the target
    let total = (millis + 999) / 1_000;
    Some(TimeLeft {
        days: total / 86_400,
        hours: (total / 3_600) % 24,
        minutes: (total / 60) % 60,
        seconds: total % 60,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn wedding() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 11, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_split() {
        let now = wedding() - Duration::days(3) - Duration::hours(4) - Duration::minutes(5) - Duration::seconds(6);
        let left = time_left(wedding(), now).unwrap();
        assert_eq!(left, TimeLeft { days: 3, hours: 4, minutes: 5, seconds: 6 });
        assert_eq!(left.display_parts(), ["3", "04", "05", "06"]);
    }

    #[test]
    fn test_reached() {
        assert_eq!(time_left(wedding(), wedding()), None);
        assert_eq!(time_left(wedding(), wedding() + Duration::seconds(1)), None);
    }

    #[test]
    fn test_sub_second_remainder_rounds_up() {
        let now = wedding() - Duration::milliseconds(1_500);
        assert_eq!(time_left(wedding(), now).unwrap().seconds, 2);
    }

    #[test]
    fn test_last_half_second_still_counts() {
        let now = wedding() - Duration::milliseconds(500);
        let left = time_left(wedding(), now).unwrap();
        assert_eq!(left, TimeLeft { days: 0, hours: 0, minutes: 0, seconds: 1 });
        assert_eq!(time_left(wedding(), wedding() - Duration::milliseconds(1)).unwrap().seconds, 1);
    }
}

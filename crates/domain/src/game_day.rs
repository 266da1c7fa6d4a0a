//! The UTC calendar day that keys a boss and its leaderboard.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// A UTC calendar date, rendered as `YYYY-MM-DD`.
///
/// Every caller derives the day from a UTC instant through [`GameDay::from_datetime`],
/// so two requests that straddle local midnight still agree on the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GameDay(NaiveDate);

impl GameDay {
    pub fn from_datetime(now: DateTime<Utc>) -> Self {
        Self(now.date_naive())
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DomainError::validation(format!("Invalid date {year}-{month}-{day}")))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// The following calendar day.
    pub fn next(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }
}

impl fmt::Display for GameDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl FromStr for GameDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DAY_FORMAT)
            .map(Self)
            .map_err(|e| DomainError::parse(format!("Invalid game day '{}': {}", s, e)))
    }
}

impl TryFrom<String> for GameDay {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<GameDay> for String {
    fn from(day: GameDay) -> String {
        day.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn day_boundary_is_utc() {
        let late = Utc.with_ymd_and_hms(2025, 3, 9, 23, 59, 59).unwrap();
        let early = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap();

        assert_eq!(GameDay::from_datetime(late).to_string(), "2025-03-09");
        assert_eq!(GameDay::from_datetime(early).to_string(), "2025-03-10");
    }

    #[test]
    fn parse_and_display_agree() {
        let day: GameDay = "2025-01-05".parse().unwrap();
        assert_eq!(day, GameDay::from_ymd(2025, 1, 5).unwrap());
        assert_eq!(day.to_string(), "2025-01-05");
        assert_eq!(day.weekday(), Weekday::Sun);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("yesterday".parse::<GameDay>().is_err());
    }

    #[test]
    fn serializes_as_date_string() {
        let day = GameDay::from_ymd(2025, 12, 31).unwrap();
        assert_eq!(serde_json::to_string(&day).unwrap(), "\"2025-12-31\"");
        assert_eq!(day.next().unwrap().to_string(), "2026-01-01");
    }
}

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Profile fields collected during onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub nickname: String,
    pub birth_year: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestTag {
    Running,
    Reading,
    Cooking,
    Music,
    Travel,
    Gaming,
}

impl InterestTag {
    pub const ALL: [InterestTag; 6] = [
        InterestTag::Running,
        InterestTag::Reading,
        InterestTag::Cooking,
        InterestTag::Music,
        InterestTag::Travel,
        InterestTag::Gaming,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InterestTag::Running => "Running",
            InterestTag::Reading => "Reading",
            InterestTag::Cooking => "Cooking",
            InterestTag::Music => "Music",
            InterestTag::Travel => "Travel",
            InterestTag::Gaming => "Gaming",
        }
    }
}

impl fmt::Display for InterestTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScheduleId(pub u64);

impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: ScheduleId,
    pub title: String,
    pub date: NaiveDate,
}

/// Inclusive date range. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = String;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(raw.start, raw.end)
            .ok_or_else(|| format!("range end {} is before start {}", raw.end, raw.start))
    }
}

impl DateRange {
    /// Returns `None` when `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Seven days starting at `start`.
    pub fn week_from(start: NaiveDate) -> Self {
        let end = start
            .checked_add_days(chrono::Days::new(6))
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, both ends included.
    pub fn len_days(&self) -> u32 {
        let span = self.end.num_days_from_ce() - self.start.num_days_from_ce();
        span.unsigned_abs() + 1
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// What the local session storage says about the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    SignedOut,
    SignedIn { onboarded: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn range_rejects_reversed_bounds() {
        assert!(DateRange::new(date(2024, 5, 2), date(2024, 5, 1)).is_none());
        assert!(DateRange::new(date(2024, 5, 1), date(2024, 5, 1)).is_some());
    }

    #[test]
    fn deserialize_rejects_reversed_bounds() {
        let err = serde_json::from_str::<DateRange>(r#"{"start":"2024-05-02","end":"2024-05-01"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("before start"));
    }

    #[test]
    fn deserialize_accepts_ordered_bounds() {
        let range: DateRange =
            serde_json::from_str(r#"{"start":"2024-05-01","end":"2024-05-07"}"#).unwrap();
        assert_eq!(range, DateRange::week_from(date(2024, 5, 1)));
        assert_eq!(range.len_days(), 7);
    }

    #[test]
    fn week_covers_seven_days() {
        let week = DateRange::week_from(date(2024, 2, 26));
        assert_eq!(week.end(), date(2024, 3, 3));
        assert_eq!(week.len_days(), 7);
        assert_eq!(week.days().count(), 7);
        assert!(week.contains(date(2024, 2, 29)));
        assert!(!week.contains(date(2024, 3, 4)));
    }
}
